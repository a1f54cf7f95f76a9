//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SHIFT_SCRIBE_` prefix and nested values use underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use shift_scribe::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let settings = config.dialogue.to_settings().expect("Invalid timezone");
//! ```

mod dialogue;
mod error;

pub use dialogue::DialogueConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Dialogue configuration (timezone, keyboard sizing)
    #[serde(default)]
    pub dialogue: DialogueConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SHIFT_SCRIBE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SHIFT_SCRIBE__DIALOGUE__TIMEZONE=Europe/Kiev` -> `dialogue.timezone = Europe/Kiev`
    /// - `SHIFT_SCRIBE__DIALOGUE__OPERATOR_PAGE_SIZE=20` -> `dialogue.operator_page_size = 20`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SHIFT_SCRIBE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.dialogue.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("SHIFT_SCRIBE__DIALOGUE__TIMEZONE");
        env::remove_var("SHIFT_SCRIBE__DIALOGUE__OPERATOR_PAGE_SIZE");
        env::remove_var("SHIFT_SCRIBE__DIALOGUE__DATE_WINDOW_DAYS");
    }

    #[test]
    fn test_load_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.dialogue.timezone, "UTC");
        assert_eq!(config.dialogue.operator_page_size, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SHIFT_SCRIBE__DIALOGUE__TIMEZONE", "Europe/Kiev");
        env::set_var("SHIFT_SCRIBE__DIALOGUE__OPERATOR_PAGE_SIZE", "20");
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.dialogue.timezone, "Europe/Kiev");
        assert_eq!(config.dialogue.operator_page_size, 20);
    }

    #[test]
    fn test_invalid_timezone_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SHIFT_SCRIBE__DIALOGUE__TIMEZONE", "Nowhere/Void");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_err());
    }
}
