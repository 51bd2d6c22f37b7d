//! Job repository (PostgreSQL)

use async_trait::async_trait;
use jobboard_common::{classify_write_error, RepositoryError, Result};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use super::{JobStore, COMPANY_NOT_FOUND};
use crate::domain::entities::{Application, Company, Job, JobWithApplications, JobWithCompany};

/// Column list shared by every query returning a `Job`
pub(crate) const JOB_COLUMNS: &str = "id, title, description, requirements, salary, location, \
     job_type, experience_level, position, company_id, created_by, created_at, updated_at";

/// Same columns qualified with the `j` alias for joined queries
const JOB_COLUMNS_QUALIFIED: &str = "j.id, j.title, j.description, j.requirements, j.salary, \
     j.location, j.job_type, j.experience_level, j.position, j.company_id, j.created_by, \
     j.created_at, j.updated_at";

/// Listing row: job columns plus the joined company and application ids
#[derive(sqlx::FromRow)]
struct JobCompanyRow {
    #[sqlx(flatten)]
    job: Job,
    company: Option<Json<Company>>,
    application_ids: Vec<Uuid>,
}

impl From<JobCompanyRow> for JobWithCompany {
    fn from(row: JobCompanyRow) -> Self {
        Self {
            job: row.job,
            company: row.company.map(|c| c.0),
            application_ids: row.application_ids,
        }
    }
}

/// Escape LIKE metacharacters so the keyword matches literally
pub(crate) fn like_pattern(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len() + 2);
    escaped.push('%');
    for ch in keyword.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

#[derive(Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Listing query with an arbitrary WHERE clause; `$1` is the only bind
    fn listing_query(filter: &str) -> String {
        format!(
            "SELECT {JOB_COLUMNS_QUALIFIED}, \
                    to_jsonb(c) AS company, \
                    ARRAY(SELECT a.id FROM applications a WHERE a.job_id = j.id \
                          ORDER BY a.created_at ASC) AS application_ids \
             FROM jobs j \
             LEFT JOIN companies c ON c.id = j.company_id \
             WHERE {filter} \
             ORDER BY j.created_at DESC"
        )
    }
}

/// A job's only foreign key is its company; CHECK violations keep their message
fn insert_rejection(err: RepositoryError) -> RepositoryError {
    match err {
        RepositoryError::MissingReference(_) => {
            RepositoryError::InvalidData(COMPANY_NOT_FOUND.to_string())
        }
        other => other,
    }
}

#[async_trait]
impl JobStore for JobRepository {
    async fn create(&self, job: &Job) -> Result<Job> {
        let query = format!(
            "INSERT INTO jobs ({JOB_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {JOB_COLUMNS}"
        );
        let row = sqlx::query_as::<_, Job>(&query)
            .bind(job.id)
            .bind(&job.title)
            .bind(&job.description)
            .bind(&job.requirements)
            .bind(job.salary)
            .bind(&job.location)
            .bind(&job.job_type)
            .bind(&job.experience_level)
            .bind(job.position)
            .bind(job.company_id)
            .bind(job.created_by)
            .bind(job.created_at)
            .bind(job.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                let err = insert_rejection(classify_write_error(e));
                if let RepositoryError::InvalidData(detail) = &err {
                    tracing::debug!(job_id = %job.id, company_id = %job.company_id, %detail, "Job insert rejected");
                }
                err
            })?;
        Ok(row)
    }

    async fn search(&self, keyword: &str) -> Result<Vec<JobWithCompany>> {
        let query = Self::listing_query(
            r"(j.title ILIKE $1 ESCAPE '\' OR j.description ILIKE $1 ESCAPE '\')",
        );
        let rows = sqlx::query_as::<_, JobCompanyRow>(&query)
            .bind(like_pattern(keyword))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_with_applications(&self, id: Uuid) -> Result<Option<JobWithApplications>> {
        let query = format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1");
        let Some(job) = sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
        else {
            return Ok(None);
        };

        let applications = sqlx::query_as::<_, Application>(
            r#"
            SELECT id, job_id, applicant_id, status, created_at, updated_at
            FROM applications WHERE job_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(JobWithApplications { job, applications }))
    }

    async fn list_by_creator(&self, user_id: Uuid) -> Result<Vec<JobWithCompany>> {
        let query = Self::listing_query("j.created_by = $1");
        let rows = sqlx::query_as::<_, JobCompanyRow>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
