//! FavQs adapter.
//!
//! FavQs exposes its quote of the day at `GET {endpoint}` with no query
//! parameters; the response nests the quote under a `quote` object with
//! `body` and `author` fields.

use async_trait::async_trait;
use quotd_types::{AdapterError, AdapterResult, Provider, Quote, QuoteAdapter};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::{log_fetch_failure, BROWSER_USER_AGENT};

/// Wire shape of a FavQs quote-of-the-day response.
///
/// A missing `quote` object or missing fields deserialize as empty
/// strings and surface as blank-text absence, not as a parse fault.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FavqsResponse {
	quote: FavqsQuote,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FavqsQuote {
	body: String,
	author: String,
}

#[derive(Debug)]
pub struct FavqsAdapter {
	client: Client,
}

impl FavqsAdapter {
	pub const ID: &'static str = "favqs-qotd";

	pub fn new() -> AdapterResult<Self> {
		let mut headers = HeaderMap::new();
		headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
		headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

		let client = Client::builder()
			.default_headers(headers)
			.build()
			.map_err(AdapterError::Http)?;

		Ok(Self { client })
	}

	async fn request_payload(&self, provider: &Provider) -> AdapterResult<FavqsResponse> {
		let response = self
			.client
			.get(&provider.endpoint)
			.timeout(provider.timeout())
			.send()
			.await
			.map_err(AdapterError::Http)?;

		let status = response.status();
		if !status.is_success() {
			return Err(AdapterError::HttpStatus {
				status: status.as_u16(),
			});
		}

		let body = response.text().await.map_err(AdapterError::Http)?;
		serde_json::from_str(&body).map_err(|e| AdapterError::InvalidResponse {
			reason: format!("failed to parse FavQs response: {}", e),
		})
	}
}

#[async_trait]
impl QuoteAdapter for FavqsAdapter {
	fn id(&self) -> &str {
		Self::ID
	}

	async fn fetch_quote(&self, provider: &Provider) -> AdapterResult<Option<Quote>> {
		debug!("{}: requesting quote from {}", provider.name, provider.endpoint);

		let payload = match self.request_payload(provider).await {
			Ok(payload) => payload,
			Err(err) => {
				log_fetch_failure(&provider.name, &err);
				return Ok(None);
			},
		};

		match Quote::from_raw(&payload.quote.body, &payload.quote.author, &provider.name) {
			Some(quote) => {
				info!("{}: quote obtained", provider.name);
				Ok(Some(quote))
			},
			None => {
				warn!("{}: response carried no quote text", provider.name);
				Ok(None)
			},
		}
	}
}
