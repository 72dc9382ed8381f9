//! Provider traversal with random order and fallback.

use std::sync::Arc;

use quotd_adapters::ProviderRegistry;
use quotd_types::{Quote, ResolveError};
use rand::seq::SliceRandom;
use tracing::{debug, error, info, warn};

/// Resolves one quote per call by walking the registered providers in a
/// freshly shuffled order and returning the first quote any of them
/// produces.
pub struct QuoteResolver {
	registry: Arc<ProviderRegistry>,
}

impl QuoteResolver {
	pub fn new(registry: Arc<ProviderRegistry>) -> Self {
		Self { registry }
	}

	/// Attempt to obtain a quote, trying each provider at most once.
	///
	/// The registry's canonical order is never mutated; each call works
	/// on its own uniformly shuffled copy. Providers are tried strictly
	/// one after another so a slow provider costs at most its own
	/// timeout. An adapter returning no quote is routine and leaves no
	/// trace in the failure outcome; an adapter error is caught here,
	/// recorded as `"{provider}: {error}"`, and traversal continues.
	pub async fn resolve(&self) -> Result<Quote, ResolveError> {
		let mut providers = self.registry.providers().to_vec();
		providers.shuffle(&mut rand::rng());

		let mut errors = Vec::new();
		for provider in &providers {
			let Some(adapter) = self.registry.adapter(&provider.adapter_id) else {
				let detail = format!(
					"{}: no adapter registered for id '{}'",
					provider.name, provider.adapter_id
				);
				warn!("{}", detail);
				errors.push(detail);
				continue;
			};

			match adapter.fetch_quote(provider).await {
				Ok(Some(quote)) => {
					info!("resolved quote from {}", provider.name);
					return Ok(quote);
				},
				Ok(None) => {
					debug!("{}: no quote, trying next provider", provider.name);
				},
				Err(err) => {
					let detail = format!("{}: {}", provider.name, err);
					error!("unexpected adapter failure: {}", detail);
					errors.push(detail);
				},
			}
		}

		warn!(
			"all {} provider(s) exhausted without a quote",
			providers.len()
		);
		Err(ResolveError::Exhausted { errors })
	}
}
