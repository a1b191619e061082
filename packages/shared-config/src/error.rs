//! Errors raised while loading configuration

use thiserror::Error;

/// Failure to load or parse a configuration value
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable is not set
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A variable is set but does not parse
    #[error("invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
