//! Forismatic adapter.
//!
//! Forismatic serves random quotes through a query-parameter API:
//! `GET {endpoint}?method=getQuote&format=json&lang=ru` answers with a
//! flat JSON object carrying `quoteText` and `quoteAuthor`.

use async_trait::async_trait;
use quotd_types::{AdapterError, AdapterResult, Provider, Quote, QuoteAdapter};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::{log_fetch_failure, BROWSER_USER_AGENT};

/// Wire shape of a Forismatic `getQuote` response.
///
/// Missing keys deserialize as empty strings; the provider's contract is
/// loose and an absent field means the same as a blank one.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ForismaticResponse {
	quote_text: String,
	quote_author: String,
}

#[derive(Debug)]
pub struct ForismaticAdapter {
	client: Client,
}

impl ForismaticAdapter {
	pub const ID: &'static str = "forismatic-v1";

	pub fn new() -> AdapterResult<Self> {
		let mut headers = HeaderMap::new();
		headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));

		let client = Client::builder()
			.default_headers(headers)
			.build()
			.map_err(AdapterError::Http)?;

		Ok(Self { client })
	}

	async fn request_payload(&self, provider: &Provider) -> AdapterResult<ForismaticResponse> {
		let response = self
			.client
			.get(&provider.endpoint)
			.query(&[("method", "getQuote"), ("format", "json"), ("lang", "ru")])
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
			reason: format!("failed to parse Forismatic response: {}", e),
		})
	}
}

#[async_trait]
impl QuoteAdapter for ForismaticAdapter {
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

		match Quote::from_raw(&payload.quote_text, &payload.quote_author, &provider.name) {
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
