//! Configuration loading utilities.

use crate::Settings;
use config::{Config, ConfigError, File};

/// Load configuration from the optional config file.
///
/// Missing files are not an error; any section absent from the file is
/// filled from [`Settings`]' defaults, so a bare checkout runs with the
/// built-in provider catalog.
pub fn load_config() -> Result<Settings, ConfigError> {
	let s = Config::builder()
		.add_source(File::with_name("config/config").required(false))
		.build()?;

	s.try_deserialize()
}
