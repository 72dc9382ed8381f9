//! Configuration settings structures.

use quotd_types::Provider;
use serde::{Deserialize, Serialize};

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	/// Provider catalog in canonical order.
	pub providers: Vec<ProviderConfig>,
	pub timeouts: TimeoutSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

/// Individual provider configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
	pub name: String,
	pub adapter_id: String,
	pub endpoint: String,
	/// Per-provider request timeout; falls back to `timeouts.request_ms`.
	#[serde(default)]
	pub timeout_ms: Option<u64>,
	#[serde(default = "default_enabled")]
	pub enabled: bool,
}

fn default_enabled() -> bool {
	true
}

/// Timeout configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TimeoutSettings {
	/// Request timeout in milliseconds for providers without their own.
	pub request_ms: u64,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	#[default]
	Compact,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			server: ServerSettings::default(),
			providers: default_providers(),
			timeouts: TimeoutSettings::default(),
			logging: LoggingSettings::default(),
		}
	}
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 5000,
		}
	}
}

impl Default for TimeoutSettings {
	fn default() -> Self {
		Self { request_ms: 10_000 }
	}
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::default(),
			structured: false,
		}
	}
}

fn default_providers() -> Vec<ProviderConfig> {
	vec![
		ProviderConfig {
			name: "Forismatic".to_string(),
			adapter_id: "forismatic-v1".to_string(),
			endpoint: "https://api.forismatic.com/api/1.0/".to_string(),
			timeout_ms: None,
			enabled: true,
		},
		ProviderConfig {
			name: "FavQs".to_string(),
			adapter_id: "favqs-qotd".to_string(),
			endpoint: "https://favqs.com/api/qotd".to_string(),
			timeout_ms: None,
			enabled: true,
		},
	]
}

impl Settings {
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Enabled providers converted to domain descriptors, in configured
	/// order, with the global request timeout filled in where a provider
	/// entry does not set its own.
	pub fn enabled_providers(&self) -> Vec<Provider> {
		self.providers
			.iter()
			.filter(|p| p.enabled)
			.map(|p| {
				Provider::new(p.name.clone(), p.adapter_id.clone(), p.endpoint.clone())
					.with_timeout_ms(p.timeout_ms.unwrap_or(self.timeouts.request_ms))
			})
			.collect()
	}
}
