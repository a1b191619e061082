//! SMTP configuration types for outbound mail

use crate::{get_env_or_default, get_required_env, parse_env, ConfigError, ConfigResult};
use std::env;

/// SMTP server configuration
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP server hostname
    pub host: String,

    /// SMTP server port
    pub port: u16,

    /// Username for SMTP authentication (optional)
    pub username: Option<String>,

    /// Password for SMTP authentication (optional)
    pub password: Option<String>,

    /// Address outbound mail is sent from
    pub from_address: String,

    /// Display name for the sender
    pub from_name: String,

    /// Whether to use TLS when connecting
    pub tls: bool,
}

impl SmtpConfig {
    /// Load SMTP configuration from environment variables
    ///
    /// Returns an error if the required variables (host and from address)
    /// are not set. This allows consumers to call `.ok()` to get
    /// `Option<SmtpConfig>` and treat mail as an optional integration.
    pub fn from_env() -> ConfigResult<Self> {
        let host = get_required_env("SMTP_HOST")?;
        let from_address = get_required_env("SMTP_FROM_ADDRESS")?;

        if host.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "SMTP_HOST".to_string(),
                "host cannot be empty".to_string(),
            ));
        }

        if from_address.trim().is_empty() || !from_address.contains('@') {
            return Err(ConfigError::InvalidValue(
                "SMTP_FROM_ADDRESS".to_string(),
                "from address must be a valid email".to_string(),
            ));
        }

        Ok(Self {
            host,
            port: parse_env("SMTP_PORT", 587)?,
            username: env::var("SMTP_USERNAME").ok(),
            password: env::var("SMTP_PASSWORD").ok(),
            from_address,
            from_name: get_env_or_default("SMTP_FROM_NAME", "Nosh Eats"),
            tls: parse_env("SMTP_TLS", true)?,
        })
    }

    /// Check if SMTP is usable (host and sender address are set)
    pub fn is_configured(&self) -> bool {
        !self.host.trim().is_empty() && self.from_address.contains('@')
    }

    /// Create a configuration with custom host and sender (useful for testing)
    pub fn new(host: impl Into<String>, from_address: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: 587,
            username: None,
            password: None,
            from_address: from_address.into(),
            from_name: "Nosh Eats".to_string(),
            tls: true,
        }
    }

    /// Full sender mailbox, e.g. `Nosh Eats <no-reply@nosh.example>`
    pub fn from_mailbox(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config() {
        let config = SmtpConfig::new("smtp.example.com", "no-reply@example.com");
        assert_eq!(config.host, "smtp.example.com");
        assert_eq!(config.from_address, "no-reply@example.com");
        assert_eq!(config.port, 587);
        assert!(config.tls);
    }

    #[test]
    fn test_from_mailbox() {
        let config = SmtpConfig::new("smtp.example.com", "no-reply@example.com");
        assert_eq!(config.from_mailbox(), "Nosh Eats <no-reply@example.com>");
    }

    #[test]
    fn test_is_configured() {
        let config = SmtpConfig::new("smtp.example.com", "no-reply@example.com");
        assert!(config.is_configured());

        let blank_host = SmtpConfig::new("  ", "no-reply@example.com");
        assert!(!blank_host.is_configured());

        let bad_sender = SmtpConfig::new("smtp.example.com", "not-an-email");
        assert!(!bad_sender.is_configured());
    }

    #[test]
    fn test_from_env_requires_host_and_sender() {
        temp_env::with_vars_unset(["SMTP_HOST", "SMTP_FROM_ADDRESS"], || {
            assert!(SmtpConfig::from_env().is_err());
        });
    }

    #[test]
    fn test_from_env_rejects_bad_sender() {
        temp_env::with_vars(
            [
                ("SMTP_HOST", Some("smtp.example.com")),
                ("SMTP_FROM_ADDRESS", Some("not-an-email")),
            ],
            || {
                assert!(matches!(
                    SmtpConfig::from_env(),
                    Err(ConfigError::InvalidValue(_, _))
                ));
            },
        );
    }
}
