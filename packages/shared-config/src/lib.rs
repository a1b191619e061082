//! Shared configuration for nosh services
//!
//! Environment-driven configuration primitives: typed env parsing, the
//! environment mode, and the database and SMTP sections consumed by the
//! API server.

mod database;
mod error;
mod smtp;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ConfigResult};
pub use smtp::SmtpConfig;

use std::env;

/// Configuration every nosh service starts from
#[derive(Debug, Clone)]
pub struct CommonConfig {
    /// Database section
    pub database: DatabaseConfig,

    /// SMTP section; `None` when outbound mail is not configured
    pub smtp: Option<SmtpConfig>,

    /// Environment mode
    pub environment: Environment,

    /// Log filter, from RUST_LOG or LOG_LEVEL
    pub log_level: String,
}

/// Which environment the service runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl std::str::FromStr for Environment {
    type Err = std::convert::Infallible;

    // Unknown values fall back to development rather than failing startup
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "staging" | "stage" => Self::Staging,
            _ => Self::Development,
        })
    }
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        })
    }
}

impl CommonConfig {
    /// Read the common sections from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Ok(Self {
            database: DatabaseConfig::from_env()?,
            smtp: SmtpConfig::from_env().ok(),
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse()
                .unwrap_or_default(),
            log_level: env::var("RUST_LOG")
                .or_else(|_| env::var("LOG_LEVEL"))
                .unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Whether outbound mail is configured
    pub fn has_smtp(&self) -> bool {
        self.smtp.is_some()
    }
}

/// Read an env var that must be present
pub fn get_required_env(name: &str) -> ConfigResult<String> {
    env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Read an env var, falling back to a default
pub fn get_env_or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Read and parse an env var into `T`, falling back to a default when unset
pub fn parse_env<T>(name: &str, default: T) -> ConfigResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .parse()
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_aliases_parse() {
        for (raw, want) in [
            ("production", Environment::Production),
            ("prod", Environment::Production),
            ("staging", Environment::Staging),
            ("stage", Environment::Staging),
            ("development", Environment::Development),
            ("dev", Environment::Development),
        ] {
            assert_eq!(raw.parse::<Environment>().unwrap(), want, "input {raw:?}");
        }
    }

    #[test]
    fn test_unknown_environment_falls_back_to_development() {
        assert_eq!(
            "kubernetes".parse::<Environment>().unwrap(),
            Environment::Development
        );
    }

    #[test]
    fn test_environment_display_round_trips() {
        for env in [
            Environment::Development,
            Environment::Staging,
            Environment::Production,
        ] {
            assert_eq!(env.to_string().parse::<Environment>().unwrap(), env);
        }
    }

    #[test]
    fn test_environment_predicates() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Production.is_development());
        assert!(Environment::Development.is_development());
        assert!(!Environment::Staging.is_production());
    }

    #[test]
    fn test_parse_env_uses_default_when_unset() {
        temp_env::with_var_unset("NOSH_TEST_PARSE_ENV", || {
            assert_eq!(parse_env("NOSH_TEST_PARSE_ENV", 42u32).unwrap(), 42);
        });
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        temp_env::with_var("NOSH_TEST_PARSE_ENV", Some("not-a-number"), || {
            assert!(matches!(
                parse_env::<u32>("NOSH_TEST_PARSE_ENV", 1),
                Err(ConfigError::InvalidValue(_, _))
            ));
        });
    }
}
