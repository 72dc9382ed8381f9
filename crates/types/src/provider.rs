//! Provider descriptors.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Validation errors for provider descriptors
#[derive(Debug, Error)]
pub enum ProviderValidationError {
	#[error("provider name must not be blank")]
	BlankName,

	#[error("provider '{name}' is missing an adapter id")]
	BlankAdapterId { name: String },

	#[error("provider '{name}' has an invalid endpoint '{endpoint}': {reason}")]
	InvalidEndpoint {
		name: String,
		endpoint: String,
		reason: String,
	},
}

/// Static description of one external quote provider.
///
/// Descriptors are built once at startup from configuration and never
/// mutated afterwards; the registry hands out read-only views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
	/// Display name, also used as the `source` of quotes it produces.
	pub name: String,
	/// Id of the adapter that knows this provider's wire format.
	pub adapter_id: String,
	/// Endpoint URL the adapter issues its GET against.
	pub endpoint: String,
	/// Per-request timeout in milliseconds.
	pub timeout_ms: u64,
}

impl Provider {
	pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

	pub fn new(
		name: impl Into<String>,
		adapter_id: impl Into<String>,
		endpoint: impl Into<String>,
	) -> Self {
		Self {
			name: name.into(),
			adapter_id: adapter_id.into(),
			endpoint: endpoint.into(),
			timeout_ms: Self::DEFAULT_TIMEOUT_MS,
		}
	}

	pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
		self.timeout_ms = timeout_ms;
		self
	}

	pub fn timeout(&self) -> Duration {
		Duration::from_millis(self.timeout_ms)
	}

	/// Check that the descriptor is usable before it enters the registry.
	pub fn validate(&self) -> Result<(), ProviderValidationError> {
		if self.name.trim().is_empty() {
			return Err(ProviderValidationError::BlankName);
		}
		if self.adapter_id.trim().is_empty() {
			return Err(ProviderValidationError::BlankAdapterId {
				name: self.name.clone(),
			});
		}

		let url = Url::parse(&self.endpoint).map_err(|e| ProviderValidationError::InvalidEndpoint {
			name: self.name.clone(),
			endpoint: self.endpoint.clone(),
			reason: e.to_string(),
		})?;
		if !matches!(url.scheme(), "http" | "https") {
			return Err(ProviderValidationError::InvalidEndpoint {
				name: self.name.clone(),
				endpoint: self.endpoint.clone(),
				reason: format!("unsupported scheme '{}'", url.scheme()),
			});
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn valid_provider_passes_validation() {
		let provider = Provider::new("Forismatic", "forismatic-v1", "https://api.forismatic.com/api/1.0/");
		assert!(provider.validate().is_ok());
		assert_eq!(provider.timeout(), Duration::from_millis(10_000));
	}

	#[test]
	fn blank_name_is_rejected() {
		let provider = Provider::new("  ", "forismatic-v1", "https://api.forismatic.com/api/1.0/");
		assert!(matches!(
			provider.validate(),
			Err(ProviderValidationError::BlankName)
		));
	}

	#[test]
	fn blank_adapter_id_is_rejected() {
		let provider = Provider::new("Forismatic", "", "https://api.forismatic.com/api/1.0/");
		assert!(matches!(
			provider.validate(),
			Err(ProviderValidationError::BlankAdapterId { .. })
		));
	}

	#[test]
	fn non_http_endpoint_is_rejected() {
		let provider = Provider::new("Forismatic", "forismatic-v1", "ftp://example.com/");
		assert!(matches!(
			provider.validate(),
			Err(ProviderValidationError::InvalidEndpoint { .. })
		));

		let provider = Provider::new("Forismatic", "forismatic-v1", "not a url");
		assert!(matches!(
			provider.validate(),
			Err(ProviderValidationError::InvalidEndpoint { .. })
		));
	}

	#[test]
	fn timeout_override_is_kept() {
		let provider =
			Provider::new("FavQs", "favqs-qotd", "https://favqs.com/api/qotd").with_timeout_ms(250);
		assert_eq!(provider.timeout(), Duration::from_millis(250));
	}
}
