//! Fixed catalog of providers and their adapters.

use std::collections::HashMap;
use std::sync::Arc;

use quotd_types::{AdapterResult, Provider, QuoteAdapter};

use crate::{FavqsAdapter, ForismaticAdapter};

/// Ordered catalog of provider descriptors plus the adapters that can
/// serve them, keyed by adapter id.
///
/// Populated once at startup and read-only afterwards. The provider list
/// keeps its configured order; callers that want a different traversal
/// order work on their own copy.
#[derive(Debug, Default)]
pub struct ProviderRegistry {
	providers: Vec<Provider>,
	adapters: HashMap<String, Arc<dyn QuoteAdapter>>,
}

impl ProviderRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registry with the built-in Forismatic and FavQs adapters
	/// registered, ready to accept provider descriptors.
	pub fn with_defaults() -> AdapterResult<Self> {
		let mut registry = Self::new();
		registry.register(Arc::new(ForismaticAdapter::new()?));
		registry.register(Arc::new(FavqsAdapter::new()?));
		Ok(registry)
	}

	/// Register an adapter under its own id. A later registration with
	/// the same id replaces the earlier one.
	pub fn register(&mut self, adapter: Arc<dyn QuoteAdapter>) {
		self.adapters.insert(adapter.id().to_string(), adapter);
	}

	/// Append a provider to the catalog, keeping insertion order.
	pub fn add_provider(&mut self, provider: Provider) {
		self.providers.push(provider);
	}

	/// Providers in their canonical configured order.
	pub fn providers(&self) -> &[Provider] {
		&self.providers
	}

	pub fn adapter(&self, adapter_id: &str) -> Option<Arc<dyn QuoteAdapter>> {
		self.adapters.get(adapter_id).cloned()
	}

	pub fn adapter_count(&self) -> usize {
		self.adapters.len()
	}
}
