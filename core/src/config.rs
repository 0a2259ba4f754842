//! Application configuration
//!
//! This module re-exports shared types from countdown-types and provides
//! persistence for `CountdownConfig`.

use std::path::{Path, PathBuf};

pub use countdown_types::{
    CountdownConfig, DEFAULT_TARGET, DEFAULT_TICK_INTERVAL_MS, Language, TerminalFrame,
    TimeZoneMode,
};

use crate::error::ConfigError;

/// confy application name
pub const APP_NAME: &str = "invite-countdown";

/// confy configuration name
pub const CONFIG_NAME: &str = "config";

/// Extension trait for CountdownConfig persistence
pub trait CountdownConfigExt: Sized {
    /// Load from the default location, creating it with defaults if absent
    fn load() -> Result<Self, ConfigError>;
    /// Load from an explicit file, which must exist
    fn load_from(path: &Path) -> Result<Self, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn save_to(&self, path: &Path) -> Result<(), ConfigError>;
    /// Where `load` and `save` read and write
    fn default_path() -> Result<PathBuf, ConfigError>;
}

impl CountdownConfigExt for CountdownConfig {
    fn load() -> Result<Self, ConfigError> {
        let config: Self = confy::load(APP_NAME, CONFIG_NAME)?;
        tracing::debug!(target_date = %config.target, "configuration loaded");
        Ok(config)
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::Missing {
                path: path.to_path_buf(),
            });
        }
        let config: Self = confy::load_path(path)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, CONFIG_NAME, self).map_err(ConfigError::Save)
    }

    fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        confy::store_path(path, self).map_err(ConfigError::Save)
    }

    fn default_path() -> Result<PathBuf, ConfigError> {
        confy::get_configuration_file_path(APP_NAME, CONFIG_NAME).map_err(ConfigError::Locate)
    }
}
