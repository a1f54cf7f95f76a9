//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Unknown IANA timezone: {0}")]
    UnknownTimezone(String),

    #[error("Operator page size must be at least 1")]
    InvalidPageSize,

    #[error("Date window must not be negative")]
    InvalidDateWindow,
}
