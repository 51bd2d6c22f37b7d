//! In-memory job store
//!
//! Mirrors the PostgreSQL repository's semantics (company reference check,
//! newest-first ordering, joins) for tests and the `mock` provider.
//! Thread-safe via `Arc<Mutex<>>`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use jobboard_common::{Error, RepositoryError, Result};
use uuid::Uuid;

use super::{JobStore, COMPANY_NOT_FOUND};
use crate::domain::entities::{Application, Company, Job, JobWithApplications, JobWithCompany};

#[derive(Debug, Default)]
struct MockData {
    jobs: Vec<Job>,
    companies: HashMap<Uuid, Company>,
    applications: Vec<Application>,
    fail_next: Option<String>,
}

/// In-memory job store that records writes for test assertions.
#[derive(Debug, Clone, Default)]
pub struct MockJobStore {
    data: Arc<Mutex<MockData>>,
}

impl MockJobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, MockData>> {
        self.data
            .lock()
            .map_err(|e| Error::Internal(format!("mock store lock poisoned: {e}")))
    }

    fn lock_for_test(&self) -> MutexGuard<'_, MockData> {
        self.data
            .lock()
            .expect("mock store lock poisoned by a panicked test")
    }

    /// Make the next store call fail with a database error.
    pub fn fail_next(&self, message: impl Into<String>) {
        self.lock_for_test().fail_next = Some(message.into());
    }

    /// Add a company that jobs can reference.
    pub fn insert_company(&self, company: Company) {
        self.lock_for_test().companies.insert(company.id, company);
    }

    /// Add an application to a job.
    pub fn insert_application(&self, application: Application) {
        self.lock_for_test().applications.push(application);
    }

    /// Add a job directly, bypassing the company reference check.
    pub fn insert_job(&self, job: Job) {
        self.lock_for_test().jobs.push(job);
    }

    /// All stored jobs in insertion order.
    pub fn stored_jobs(&self) -> Vec<Job> {
        self.lock_for_test().jobs.clone()
    }

    /// Remove every record.
    pub fn reset(&self) {
        *self.lock_for_test() = MockData::default();
    }
}

impl MockData {
    fn take_failure(&mut self) -> Result<()> {
        match self.fail_next.take() {
            Some(message) => Err(Error::Database(sqlx::Error::Protocol(message))),
            None => Ok(()),
        }
    }

    fn application_ids(&self, job_id: Uuid) -> Vec<Uuid> {
        self.applications_for(job_id).into_iter().map(|a| a.id).collect()
    }

    fn applications_for(&self, job_id: Uuid) -> Vec<Application> {
        let mut applications: Vec<Application> = self
            .applications
            .iter()
            .filter(|a| a.job_id == job_id)
            .cloned()
            .collect();
        applications.sort_by_key(|a| a.created_at);
        applications
    }

    /// Matching jobs joined with their company, newest first. Ties keep the
    /// most recently inserted job first.
    fn listing(&self, predicate: impl Fn(&Job) -> bool) -> Vec<JobWithCompany> {
        let mut jobs: Vec<&Job> = self.jobs.iter().rev().filter(|j| predicate(j)).collect();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        jobs.into_iter()
            .map(|job| JobWithCompany {
                job: job.clone(),
                company: self.companies.get(&job.company_id).cloned(),
                application_ids: self.application_ids(job.id),
            })
            .collect()
    }
}

#[async_trait]
impl JobStore for MockJobStore {
    async fn create(&self, job: &Job) -> Result<Job> {
        let mut data = self.lock()?;
        data.take_failure()?;

        if !data.companies.contains_key(&job.company_id) {
            return Err(RepositoryError::InvalidData(COMPANY_NOT_FOUND.to_string()).into());
        }

        tracing::debug!(job_id = %job.id, "Mock store: recording job");
        data.jobs.push(job.clone());
        Ok(job.clone())
    }

    async fn search(&self, keyword: &str) -> Result<Vec<JobWithCompany>> {
        let mut data = self.lock()?;
        data.take_failure()?;
        Ok(data.listing(|job| job.matches_keyword(keyword)))
    }

    async fn find_with_applications(&self, id: Uuid) -> Result<Option<JobWithApplications>> {
        let mut data = self.lock()?;
        data.take_failure()?;

        Ok(data
            .jobs
            .iter()
            .find(|job| job.id == id)
            .cloned()
            .map(|job| JobWithApplications {
                applications: data.applications_for(job.id),
                job,
            }))
    }

    async fn list_by_creator(&self, user_id: Uuid) -> Result<Vec<JobWithCompany>> {
        let mut data = self.lock()?;
        data.take_failure()?;
        Ok(data.listing(|job| job.created_by == user_id))
    }
}
