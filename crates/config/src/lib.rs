//! Configuration loading for the quotd quote server.

pub mod loader;
pub mod settings;

pub use loader::load_config;
pub use settings::{
	LogFormat, LoggingSettings, ProviderConfig, ServerSettings, Settings, TimeoutSettings,
};
