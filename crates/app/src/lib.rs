//! Job board application composition root
//!
//! Builds the jobs domain state from configuration and composes the router.

use std::sync::Arc;

use axum::{http::HeaderValue, Router};
use jobboard_auth::{AuthBackend, AuthConfig};
use jobboard_common::{Config, PersistenceProvider};
use jobboard_jobs::{JobStore, JobStoreFactory, JobsState};
use sqlx::postgres::PgPoolOptions;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

/// Maximum accepted request body (job postings are small JSON documents)
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Build the jobs domain state from configuration.
///
/// Connects to PostgreSQL and applies migrations when that provider is
/// selected; the mock provider needs no external services.
pub async fn build_state(config: &Config) -> Result<JobsState, anyhow::Error> {
    let pool = match (config.persistence_provider, &config.database_url) {
        (PersistenceProvider::Postgres, Some(url)) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(url)
                .await
                .map_err(|e| anyhow::anyhow!("Database connection failed: {}", e))?;

            sqlx::migrate!("../../migrations")
                .run(&pool)
                .await
                .map_err(|e| anyhow::anyhow!("Database migration failed: {}", e))?;

            tracing::info!("Database connection established");
            Some(pool)
        }
        _ => None,
    };

    let jobs = JobStoreFactory::create(config.persistence_provider, pool)
        .map_err(|e| anyhow::anyhow!("Failed to create job store: {}", e))?;

    Ok(jobs_state(jobs, AuthConfig::new(config.jwt_secret.clone())))
}

/// Assemble the jobs domain state from its collaborators
pub fn jobs_state(jobs: Arc<dyn JobStore>, auth_config: AuthConfig) -> JobsState {
    JobsState {
        jobs,
        auth: AuthBackend::new(auth_config),
    }
}

/// Create the main application router with all routes
pub fn create_app(state: JobsState) -> Router {
    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "Job Board API v0.0.1-SNAPSHOT" }),
        )
        .merge(jobboard_jobs::routes().with_state(state))
}

/// Request tracing, CORS and the body size limit, as both binaries serve them.
///
/// Each layer wraps the router separately so every layer sees axum's boxed
/// `Body` as its inner response body.
pub fn apply_middleware(app: Router, cors_origins: Option<&str>) -> Router {
    app.layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(cors_origins))
        .layer(body_limit_layer())
}

/// CORS for the configured origins; permissive when none are configured
pub fn build_cors_layer(origins: Option<&str>) -> CorsLayer {
    let Some(origins) = origins else {
        return CorsLayer::permissive();
    };

    let allowed: Vec<HeaderValue> = origins
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ])
        .allow_credentials(true)
}

/// Request body size limit
pub fn body_limit_layer() -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(MAX_BODY_BYTES)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
