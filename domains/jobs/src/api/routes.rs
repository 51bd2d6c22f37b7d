//! Route definitions for Jobs domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::jobs;
use super::middleware::JobsState;

/// Create all Jobs domain API routes
pub fn routes() -> Router<JobsState> {
    Router::new()
        .route("/api/v1/job/post", post(jobs::create_job))
        .route("/api/v1/job/get", get(jobs::list_jobs))
        .route("/api/v1/job/get/{id}", get(jobs::get_job))
        .route("/api/v1/job/getadminjobs", get(jobs::list_admin_jobs))
        .route("/jobs", get(jobs::list_jobs).post(jobs::create_job))
        .route("/jobs/admin", get(jobs::list_admin_jobs))
        .route("/jobs/{id}", get(jobs::get_job))
}
