//! The adapter contract and its error taxonomy.

use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

use crate::{Provider, Quote};

/// Failures an adapter can run into while talking to its provider.
///
/// Adapters convert all of these to a logged "no result" at their own
/// boundary; the enum exists so the failure can be classified for
/// logging, and so custom adapters have an error channel for faults the
/// resolver should record.
#[derive(Debug, Error)]
pub enum AdapterError {
	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("provider returned HTTP {status}")]
	HttpStatus { status: u16 },

	#[error("invalid response format: {reason}")]
	InvalidResponse { reason: String },
}

impl AdapterError {
	pub fn is_timeout(&self) -> bool {
		matches!(self, AdapterError::Http(source) if source.is_timeout())
	}
}

pub type AdapterResult<T> = Result<T, AdapterError>;

/// One provider's wire format, translated to the normalized quote shape.
///
/// `fetch_quote` performs a single bounded attempt against the given
/// provider. `Ok(Some(quote))` is success, `Ok(None)` means the provider
/// yielded nothing usable (timeout, transport error, bad payload, blank
/// text) and the caller should simply move on. `Err` is reserved for
/// faults the adapter did not anticipate; the resolver catches those and
/// records them per provider.
#[async_trait]
pub trait QuoteAdapter: Send + Sync + Debug {
	/// Adapter id used for registry lookup from provider descriptors.
	fn id(&self) -> &str;

	/// Attempt to obtain one quote from the provider.
	async fn fetch_quote(&self, provider: &Provider) -> AdapterResult<Option<Quote>>;
}
