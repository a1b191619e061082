use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::Extension,
    http::{header, header::HeaderMap, Method},
    routing::{get, post},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod graphql;
mod models;
mod repositories;
mod routes;
mod services;

pub use error::{ApiError, ApiResult};

use graphql::{build_schema, NoshSchema};
use models::user::CurrentUser;
use repositories::UserRepository;
use routes::{health_router, HealthState};
use services::auth::{AuthConfig, AuthService};
use services::{AccountService, MailService, RestaurantService};

/// Assemble the CORS layer
///
/// With `CORS_ORIGINS` set, only the listed origins are allowed. Without
/// it, production rejects cross-origin requests entirely and development
/// runs permissive.
fn build_cors_layer(config: &config::Config) -> CorsLayer {
    let origins = config
        .cors_allowed_origins
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|origin| {
            origin.parse().ok().or_else(|| {
                tracing::warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            })
        })
        .collect::<Vec<_>>();

    if !origins.is_empty() {
        tracing::info!(count = origins.len(), "CORS restricted to configured origins");
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([
                header::AUTHORIZATION,
                header::CONTENT_TYPE,
                header::ACCEPT,
                header::ORIGIN,
            ])
            .allow_credentials(true)
            .max_age(std::time::Duration::from_secs(3600))
    } else if config.is_production() {
        tracing::warn!(
            "CORS_ORIGINS not set in production; cross-origin requests will be rejected"
        );
        CorsLayer::new()
    } else {
        tracing::warn!("CORS_ORIGINS not set; running permissive CORS for development");
        CorsLayer::permissive()
    }
}

/// Pull the bearer token out of the Authorization header
///
/// The scheme check is case-insensitive, and values with trailing junk
/// ("Bearer <token> extra") are rejected.
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())?;

    let mut parts = value.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

/// Execute a GraphQL request against the schema
///
/// When the request carries a valid bearer token, the user it names is
/// loaded and injected into the request data as [`CurrentUser`].
/// Anonymous requests run too; guarded resolvers reject them themselves.
async fn graphql_handler(
    Extension(schema): Extension<NoshSchema>,
    Extension(auth_service): Extension<AuthService>,
    Extension(user_repo): Extension<UserRepository>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();

    if let Some(token) = extract_bearer_token(&headers) {
        match auth_service.verify_token(token) {
            Ok(claims) => {
                // The token may outlive the account it names
                match user_repo.find_by_id(claims.sub).await {
                    Ok(Some(user)) => {
                        request = request.data(CurrentUser(user));
                    }
                    Ok(None) => {
                        tracing::debug!(user_id = %claims.sub, "Token names a deleted user");
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "User lookup for bearer token failed");
                    }
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "Bearer token verification failed");
            }
        }
    }

    schema.execute(request).await.into()
}

/// Serve the GraphQL Playground (non-production only)
async fn graphql_playground() -> impl axum::response::IntoResponse {
    axum::response::Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/graphql"),
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nosh_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = config::Config::from_env()?;
    tracing::info!(port = config.port, environment = %config.environment(), "Starting nosh API");

    let pool = PgPoolOptions::new()
        .max_connections(config.common.database.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(
            config.common.database.connect_timeout_secs,
        ))
        .connect(&config.common.database.url)
        .await?;
    tracing::info!("Database connection established");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let user_repo = UserRepository::new(pool.clone());

    let auth_config =
        AuthConfig::with_expiry_hours(config.jwt_secret.clone(), config.jwt_expiry_hours);
    let auth_service = AuthService::new(auth_config);

    let mail_service = MailService::new(config.smtp().cloned());
    if !mail_service.is_enabled() {
        tracing::warn!("Mail disabled; verification emails will be skipped");
    }

    let account_service = AccountService::new(pool.clone(), auth_service.clone(), mail_service);
    let restaurant_service = RestaurantService::new(pool.clone());

    let health_state = HealthState::new(config.clone());
    let cors_layer = build_cors_layer(&config);

    let schema = build_schema(pool.clone(), account_service, restaurant_service);
    tracing::info!("GraphQL schema built");

    let app = Router::new()
        .route("/", get(root))
        .route("/graphql", post(graphql_handler))
        .nest("/health", health_router(health_state));

    // Playground stays off in production
    let app = if config.is_production() {
        app
    } else {
        app.route("/graphql/playground", get(graphql_playground))
    };

    let app = app
        .layer(Extension(schema))
        .layer(Extension(user_repo))
        .layer(Extension(auth_service))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    if !config.is_production() {
        tracing::info!("Playground at http://{}/graphql/playground", addr);
    }

    axum::serve(listener, app).await?;

    Ok(())
}

async fn root() -> &'static str {
    "Welcome to nosh - Food from your neighborhood, delivered"
}
