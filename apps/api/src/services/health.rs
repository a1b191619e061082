//! Dependency health probes
//!
//! Backs the `/health/ready` endpoint: checks Postgres connectivity and,
//! when mail is configured, the SMTP relay. Results are serialized
//! straight into the JSON response body.

use serde::Serialize;
use std::time::{Duration, Instant};

use nosh_shared_config::SmtpConfig;

/// Outcome of probing one dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    /// Reachable and answering
    Healthy,
    /// Unreachable or answering incorrectly
    Unhealthy,
    /// Probe not run (optional dependency not configured)
    Skipped,
}

/// Per-dependency probe result
#[derive(Debug, Clone, Serialize)]
pub struct ServiceHealth {
    pub name: &'static str,
    pub status: ServiceStatus,
    /// How long the probe took, when it ran to completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Extra probe output, e.g. the server version string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ServiceHealth {
    fn new(name: &'static str, status: ServiceStatus) -> Self {
        Self {
            name,
            status,
            response_time_ms: None,
            error: None,
            details: None,
        }
    }

    /// Successful probe
    pub fn healthy(name: &'static str, elapsed: Duration) -> Self {
        Self {
            response_time_ms: Some(elapsed.as_millis() as u64),
            ..Self::new(name, ServiceStatus::Healthy)
        }
    }

    /// Successful probe carrying extra output
    pub fn healthy_with_details(
        name: &'static str,
        elapsed: Duration,
        details: serde_json::Value,
    ) -> Self {
        Self {
            details: Some(details),
            ..Self::healthy(name, elapsed)
        }
    }

    /// Failed probe
    pub fn unhealthy(name: &'static str, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::new(name, ServiceStatus::Unhealthy)
        }
    }

    /// Failed probe that got far enough to measure a duration
    pub fn unhealthy_with_time(
        name: &'static str,
        error: impl Into<String>,
        elapsed: Duration,
    ) -> Self {
        Self {
            response_time_ms: Some(elapsed.as_millis() as u64),
            ..Self::unhealthy(name, error)
        }
    }

    /// Probe skipped because the dependency is not configured
    pub fn skipped(name: &'static str, reason: impl Into<String>) -> Self {
        Self {
            details: Some(serde_json::json!({ "reason": reason.into() })),
            ..Self::new(name, ServiceStatus::Skipped)
        }
    }
}

/// Body of the readiness response
#[derive(Debug, Clone, Serialize)]
pub struct HealthCheckResponse {
    /// Healthy only when every probe is healthy or skipped
    pub status: ServiceStatus,
    pub services: Vec<ServiceHealth>,
    pub total_time_ms: u64,
    pub version: &'static str,
}

impl HealthCheckResponse {
    pub fn new(services: Vec<ServiceHealth>, total_time: Duration) -> Self {
        let all_ok = services
            .iter()
            .all(|s| !matches!(s.status, ServiceStatus::Unhealthy));

        Self {
            status: if all_ok {
                ServiceStatus::Healthy
            } else {
                ServiceStatus::Unhealthy
            },
            services,
            total_time_ms: total_time.as_millis() as u64,
            version: env!("CARGO_PKG_VERSION"),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == ServiceStatus::Healthy
    }
}

/// Runs the dependency probes
#[derive(Debug, Default)]
pub struct HealthService;

impl HealthService {
    pub fn new() -> Self {
        Self
    }

    /// Probe Postgres: open a short-lived connection and run `SELECT 1`
    pub async fn check_database(&self, database_url: &str) -> ServiceHealth {
        let start = Instant::now();

        let pool = match sqlx::postgres::PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await
        {
            Ok(pool) => pool,
            Err(e) => {
                return ServiceHealth::unhealthy("database", format!("connection failed: {}", e))
            }
        };

        if let Err(e) = sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(&pool).await {
            return ServiceHealth::unhealthy_with_time(
                "database",
                format!("query failed: {}", e),
                start.elapsed(),
            );
        }
        let elapsed = start.elapsed();

        // Version string is nice-to-have; ignore failures
        match sqlx::query_scalar::<_, String>("SELECT version()")
            .fetch_optional(&pool)
            .await
            .ok()
            .flatten()
        {
            Some(version) => ServiceHealth::healthy_with_details(
                "database",
                elapsed,
                serde_json::json!({ "version": version }),
            ),
            None => ServiceHealth::healthy("database", elapsed),
        }
    }

    /// Probe the SMTP relay with a NOOP round trip
    pub async fn check_smtp(&self, config: &SmtpConfig) -> ServiceHealth {
        let start = Instant::now();

        let transport = match crate::services::mail::build_transport(config) {
            Ok(transport) => transport,
            Err(e) => {
                return ServiceHealth::unhealthy("smtp", format!("transport setup failed: {}", e))
            }
        };

        match transport.test_connection().await {
            Ok(true) => ServiceHealth::healthy_with_details(
                "smtp",
                start.elapsed(),
                serde_json::json!({ "host": config.host, "port": config.port }),
            ),
            Ok(false) => ServiceHealth::unhealthy_with_time(
                "smtp",
                "connection test failed",
                start.elapsed(),
            ),
            Err(e) => ServiceHealth::unhealthy_with_time(
                "smtp",
                format!("connection failed: {}", e),
                start.elapsed(),
            ),
        }
    }

    /// Run every probe concurrently and aggregate the results
    pub async fn check_all(
        &self,
        database_url: &str,
        smtp: Option<&SmtpConfig>,
    ) -> HealthCheckResponse {
        let start = Instant::now();

        let (db, mail) = tokio::join!(self.check_database(database_url), async {
            match smtp {
                Some(config) => self.check_smtp(config).await,
                None => ServiceHealth::skipped("smtp", "not configured"),
            }
        });

        HealthCheckResponse::new(vec![db, mail], start.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_healthy_probe_records_time() {
        let health = ServiceHealth::healthy("database", Duration::from_millis(50));
        assert_eq!(health.status, ServiceStatus::Healthy);
        assert_eq!(health.response_time_ms, Some(50));
        assert!(health.error.is_none());
    }

    #[test]
    fn test_unhealthy_probe_carries_error() {
        let health = ServiceHealth::unhealthy("smtp", "connection refused");
        assert_eq!(health.status, ServiceStatus::Unhealthy);
        assert!(health.response_time_ms.is_none());
        assert_eq!(health.error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_response_healthy_when_all_probes_pass() {
        let response = HealthCheckResponse::new(
            vec![
                ServiceHealth::healthy("database", Duration::from_millis(10)),
                ServiceHealth::healthy("smtp", Duration::from_millis(5)),
            ],
            Duration::from_millis(15),
        );
        assert!(response.is_healthy());
    }

    #[test]
    fn test_response_unhealthy_when_any_probe_fails() {
        let response = HealthCheckResponse::new(
            vec![
                ServiceHealth::healthy("database", Duration::from_millis(10)),
                ServiceHealth::unhealthy("smtp", "connection refused"),
            ],
            Duration::from_millis(15),
        );
        assert!(!response.is_healthy());
        assert_eq!(response.status, ServiceStatus::Unhealthy);
    }

    #[test]
    fn test_skipped_probe_does_not_fail_readiness() {
        let response = HealthCheckResponse::new(
            vec![
                ServiceHealth::healthy("database", Duration::from_millis(10)),
                ServiceHealth::skipped("smtp", "not configured"),
            ],
            Duration::from_millis(15),
        );
        assert!(response.is_healthy());
    }
}
