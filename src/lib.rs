//! quotd - a random inspirational quote server.
//!
//! Serves quotes fetched on demand from external providers (Forismatic
//! and FavQs), trying them in random order and falling back to the
//! alternate provider when the first yields nothing.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;

// Core domain types
pub use quotd_types::{
	AdapterError, AdapterResult, Provider, ProviderValidationError, Quote, QuoteAdapter,
	ResolveError, UNKNOWN_AUTHOR,
};

// Adapters
pub use quotd_adapters::{FavqsAdapter, ForismaticAdapter, ProviderRegistry};

// Service layer
pub use quotd_service::QuoteResolver;

// Config
pub use quotd_config::{load_config, LogFormat, Settings};

// API layer
pub use quotd_api::{create_router, AppState};

pub mod mocks;

/// Builder pattern for configuring the quote server
#[derive(Default)]
pub struct ServerBuilder {
	settings: Option<Settings>,
	registry: Option<ProviderRegistry>,
	providers: Vec<Provider>,
}

impl ServerBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Register a custom adapter (uses the adapter's own id).
	///
	/// The first call starts from the default registry, so the built-in
	/// adapters stay available alongside custom ones.
	/// Panics if the default adapters cannot be constructed; that is a
	/// fatal startup-time configuration error.
	pub fn with_adapter(mut self, adapter: Arc<dyn QuoteAdapter>) -> Self {
		let mut registry = match self.registry.take() {
			Some(registry) => registry,
			None => ProviderRegistry::with_defaults()
				.expect("failed to construct default adapters during startup"),
		};
		registry.register(adapter);
		self.registry = Some(registry);
		self
	}

	/// Add a provider descriptor on top of the configured ones
	pub fn with_provider(mut self, provider: Provider) -> Self {
		self.providers.push(provider);
		self
	}

	/// Build the router and shared state without binding a socket.
	///
	/// Providers come from settings (enabled entries, in order) followed
	/// by any added via [`Self::with_provider`]. Every provider is
	/// validated and must reference a registered adapter.
	pub fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.unwrap_or_default();

		let mut registry = match self.registry {
			Some(registry) => registry,
			None => ProviderRegistry::with_defaults()?,
		};

		for provider in settings.enabled_providers() {
			registry.add_provider(provider);
		}
		for provider in self.providers {
			registry.add_provider(provider);
		}

		for provider in registry.providers() {
			provider.validate()?;
			if registry.adapter(&provider.adapter_id).is_none() {
				return Err(format!(
					"provider '{}' references unknown adapter '{}'",
					provider.name, provider.adapter_id
				)
				.into());
			}
		}

		info!(
			"initialized with {} provider(s) and {} adapter(s)",
			registry.providers().len(),
			registry.adapter_count()
		);

		let resolver = Arc::new(QuoteResolver::new(Arc::new(registry)));
		let state = AppState { resolver };
		let router = create_router().with_state(state.clone());

		Ok((router, state))
	}

	/// Start the complete server with all defaults and setup handled.
	///
	/// Loads `.env`, reads the optional config file, initializes tracing
	/// from the logging settings, then binds and serves.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		dotenvy::dotenv().ok();

		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config().unwrap_or_default(),
		};

		init_tracing_from_settings(&settings)?;

		let providers = settings.enabled_providers();
		info!("Configured providers: {}", providers.len());
		for provider in &providers {
			info!(
				"  - {}: {} ({}ms timeout)",
				provider.name, provider.endpoint, provider.timeout_ms
			);
		}

		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("invalid bind address '{}': {}", bind_addr, e))?;

		self.settings = Some(settings);
		let (app, _state) = self.start()?;

		let listener = tokio::net::TcpListener::bind(addr).await?;
		info!("quotd listening on {}", bind_addr);
		info!("endpoints available:");
		info!("  GET  /");
		info!("  GET  /refresh");
		info!("  GET  /health");

		axum::serve(listener, app).await?;

		Ok(())
	}
}

/// Initialize tracing with configuration-based settings
fn init_tracing_from_settings(settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.logging.level));

	match settings.logging.format {
		LogFormat::Json => {
			let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);

			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).init();
			} else {
				subscriber.init();
			}
		},
		LogFormat::Pretty => {
			let subscriber = tracing_subscriber::fmt()
				.pretty()
				.with_env_filter(env_filter);

			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).init();
			} else {
				subscriber.init();
			}
		},
		LogFormat::Compact => {
			let subscriber = tracing_subscriber::fmt()
				.compact()
				.with_env_filter(env_filter);

			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).init();
			} else {
				subscriber.init();
			}
		},
	}

	info!(
		"logging configured: level={}, format={:?}, structured={}",
		settings.logging.level, settings.logging.format, settings.logging.structured
	);

	Ok(())
}
