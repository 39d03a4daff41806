//! Configuration error types.

use std::num::ParseIntError;
use thiserror::Error;

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({source})")]
    InvalidConfiguration {
        key: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("JWT_SECRET must be set to a non-default value in production")]
    MissingProductionSecret,
    #[error("failed to read .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),
}
