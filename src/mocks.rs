//! Mock adapters for tests.
//!
//! Simple adapters that stand in for the real providers without any
//! network dependency.

use async_trait::async_trait;

use quotd_types::{AdapterError, AdapterResult, Provider, Quote, QuoteAdapter};

/// Adapter that always produces the same quote
#[derive(Debug, Clone)]
pub struct FixedQuoteAdapter {
	pub id: String,
	pub text: String,
	pub author: String,
}

impl FixedQuoteAdapter {
	pub fn new() -> Self {
		Self {
			id: "mock-fixed-v1".to_string(),
			text: "The only way to do great work is to love what you do.".to_string(),
			author: "Steve Jobs".to_string(),
		}
	}
}

impl Default for FixedQuoteAdapter {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl QuoteAdapter for FixedQuoteAdapter {
	fn id(&self) -> &str {
		&self.id
	}

	async fn fetch_quote(&self, provider: &Provider) -> AdapterResult<Option<Quote>> {
		Ok(Quote::from_raw(&self.text, &self.author, &provider.name))
	}
}

/// Adapter that never produces a quote, either quietly or as a fault
#[derive(Debug, Clone)]
pub struct UnavailableAdapter {
	pub id: String,
	pub fault: bool,
}

impl UnavailableAdapter {
	/// Behaves like a provider with nothing to offer.
	pub fn empty() -> Self {
		Self {
			id: "mock-unavailable-v1".to_string(),
			fault: false,
		}
	}

	/// Fails with an error the resolver must catch and record.
	pub fn faulty() -> Self {
		Self {
			id: "mock-unavailable-v1".to_string(),
			fault: true,
		}
	}
}

#[async_trait]
impl QuoteAdapter for UnavailableAdapter {
	fn id(&self) -> &str {
		&self.id
	}

	async fn fetch_quote(&self, _provider: &Provider) -> AdapterResult<Option<Quote>> {
		if self.fault {
			return Err(AdapterError::InvalidResponse {
				reason: "mock adapter configured to fail".to_string(),
			});
		}
		Ok(None)
	}
}

/// Provider descriptor pointing at the fixed mock adapter
pub fn mock_provider() -> Provider {
	Provider::new("MockProvider", "mock-fixed-v1", "http://localhost:9000/")
}
