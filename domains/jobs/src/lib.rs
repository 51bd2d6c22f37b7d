//! Jobs domain: job postings, search, and per-recruiter listings

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
pub use domain::validation::JobValidationError;
// Re-export repository types
pub use repository::{JobRepository, JobStore, JobStoreFactory, MockJobStore};

// Re-export API types
pub use api::routes;
pub use api::JobsState;
