//! Health endpoints
//!
//! - `GET /health` answers "OK" whenever the process is serving requests
//! - `GET /health/live` is the liveness probe (no dependency checks)
//! - `GET /health/ready` probes Postgres and the SMTP relay

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use std::sync::Arc;

use crate::config::Config;
use crate::services::HealthService;

/// State shared by the health handlers
#[derive(Clone)]
pub struct HealthState {
    pub config: Arc<Config>,
    pub health_service: Arc<HealthService>,
}

impl HealthState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            health_service: Arc::new(HealthService::new()),
        }
    }
}

/// Router for the `/health` subtree
pub fn health_router(state: HealthState) -> Router {
    Router::new()
        .route("/", get(simple_health))
        .route("/live", get(liveness_probe))
        .route("/ready", get(readiness_probe))
        .with_state(state)
}

/// Plain-text check for load balancers
async fn simple_health() -> &'static str {
    "OK"
}

/// Liveness: the process is up. Dependencies are readiness's problem.
async fn liveness_probe() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Readiness: 200 when every required dependency answers, 503 otherwise
async fn readiness_probe(State(state): State<HealthState>) -> impl IntoResponse {
    let config = &state.config;

    let response = state
        .health_service
        .check_all(&config.database().url, config.smtp())
        .await;

    let status_code = if response.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_simple_health() {
        assert_eq!(simple_health().await, "OK");
    }

    #[tokio::test]
    async fn test_liveness_probe_is_ok() {
        let response = liveness_probe().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
