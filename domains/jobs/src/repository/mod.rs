//! Persistence for the Jobs domain
//!
//! Handlers talk to a `JobStore`; PostgreSQL backs it in production and an
//! in-memory store backs tests and the `mock` provider.

pub mod jobs;
pub mod mock;

use std::sync::Arc;

use async_trait::async_trait;
use jobboard_common::{PersistenceProvider, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Job, JobWithApplications, JobWithCompany};

pub use jobs::JobRepository;
pub use mock::MockJobStore;

/// Message for inserts whose company reference does not resolve
pub const COMPANY_NOT_FOUND: &str = "Company not found.";

/// Job persistence operations
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Insert a new job; an unknown company is a validation error
    async fn create(&self, job: &Job) -> Result<Job>;

    /// Jobs whose title or description contains `keyword` (case-insensitive),
    /// joined with their company, newest first
    async fn search(&self, keyword: &str) -> Result<Vec<JobWithCompany>>;

    /// A single job joined with its applications
    async fn find_with_applications(&self, id: Uuid) -> Result<Option<JobWithApplications>>;

    /// Jobs created by `user_id`, joined with their company, newest first
    async fn list_by_creator(&self, user_id: Uuid) -> Result<Vec<JobWithCompany>>;
}

/// Factory for creating JobStore implementations.
pub struct JobStoreFactory;

impl JobStoreFactory {
    /// Create a JobStore for the configured provider.
    pub fn create(
        provider: PersistenceProvider,
        pool: Option<PgPool>,
    ) -> Result<Arc<dyn JobStore>> {
        match (provider, pool) {
            (PersistenceProvider::Postgres, Some(pool)) => {
                tracing::info!("Creating PostgreSQL job store");
                Ok(Arc::new(JobRepository::new(pool)))
            }
            (PersistenceProvider::Postgres, None) => Err(jobboard_common::Error::Internal(
                "PostgreSQL job store requires a connection pool".to_string(),
            )),
            (PersistenceProvider::Mock, _) => {
                tracing::info!("Creating in-memory job store");
                Ok(Arc::new(MockJobStore::new()))
            }
        }
    }
}
