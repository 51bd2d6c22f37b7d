//! Job Board API - AWS Lambda Runtime

use lambda_http::{run, Error};
use tracing::info;

use jobboard_app::{apply_middleware, build_state, create_app};
use jobboard_common::Config;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config =
        Config::from_env().map_err(|e| Error::from(format!("Configuration error: {}", e)))?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.rust_log))
        .json()
        .without_time()
        .init();

    info!("Initializing Job Board API Lambda");

    let state = build_state(&config)
        .await
        .map_err(|e| Error::from(format!("App initialization error: {}", e)))?;

    let app = apply_middleware(create_app(state), config.cors_allowed_origins.as_deref());

    info!("Job Board API Lambda ready to serve requests");

    run(app).await
}
