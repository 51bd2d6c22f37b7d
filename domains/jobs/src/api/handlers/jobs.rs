//! Job posting API handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use jobboard_auth::AuthUser;
use jobboard_common::{ApiJson, Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::api::middleware::JobsState;
use crate::domain::entities::{
    Application, ApplicationStatus, Company, Job, JobWithApplications, JobWithCompany,
    NewJobInput,
};

/// A stored reference, rendered as the bare id or as the joined record
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Populated<T> {
    Id(Uuid),
    Record(T),
}

/// Company response DTO
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub logo: Option<String>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Company> for CompanyResponse {
    fn from(c: Company) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            website: c.website,
            location: c.location,
            logo: c.logo,
            user_id: c.user_id,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Application response DTO
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub job: Uuid,
    pub applicant: Uuid,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Application> for ApplicationResponse {
    fn from(a: Application) -> Self {
        Self {
            id: a.id,
            job: a.job_id,
            applicant: a.applicant_id,
            status: a.status,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

/// Job response DTO
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub salary: f64,
    pub location: String,
    pub job_type: String,
    pub experience_level: String,
    pub position: i32,
    pub company: Populated<CompanyResponse>,
    #[serde(rename = "created_by")]
    pub created_by: Uuid,
    pub applications: Vec<Populated<ApplicationResponse>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobResponse {
    fn build(
        j: Job,
        company: Populated<CompanyResponse>,
        applications: Vec<Populated<ApplicationResponse>>,
    ) -> Self {
        Self {
            id: j.id,
            title: j.title,
            description: j.description,
            requirements: j.requirements,
            salary: j.salary,
            location: j.location,
            job_type: j.job_type,
            experience_level: j.experience_level,
            position: j.position,
            company,
            created_by: j.created_by,
            applications,
            created_at: j.created_at,
            updated_at: j.updated_at,
        }
    }
}

impl From<Job> for JobResponse {
    fn from(j: Job) -> Self {
        let company = Populated::Id(j.company_id);
        Self::build(j, company, Vec::new())
    }
}

impl From<JobWithCompany> for JobResponse {
    fn from(row: JobWithCompany) -> Self {
        let company = match row.company {
            Some(c) => Populated::Record(c.into()),
            None => Populated::Id(row.job.company_id),
        };
        let applications = row.application_ids.into_iter().map(Populated::Id).collect();
        Self::build(row.job, company, applications)
    }
}

impl From<JobWithApplications> for JobResponse {
    fn from(row: JobWithApplications) -> Self {
        let company = Populated::Id(row.job.company_id);
        let applications = row
            .applications
            .into_iter()
            .map(|a| Populated::Record(a.into()))
            .collect();
        Self::build(row.job, company, applications)
    }
}

/// Accept a JSON string or number (and `true`, as text).
///
/// `null`, `false` and numeric zero count as absent; the string `"0"` does not.
fn text_or_number<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) | Some(serde_json::Value::Bool(false)) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(None),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(serde_json::Value::Bool(true)) => Ok(Some(true.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected text or number, found {}",
            other
        ))),
    }
}

/// Request for posting a job
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    #[serde(default, deserialize_with = "text_or_number")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub description: Option<String>,
    /// Comma-delimited list
    #[serde(default, deserialize_with = "text_or_number")]
    pub requirements: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub salary: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub job_type: Option<String>,
    /// Years of experience, e.g. "0" or "2-4"; stored as `experienceLevel`
    #[serde(default, deserialize_with = "text_or_number")]
    pub experience: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub company_id: Option<String>,
}

impl From<CreateJobRequest> for NewJobInput {
    fn from(req: CreateJobRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            requirements: req.requirements,
            salary: req.salary,
            location: req.location,
            job_type: req.job_type,
            experience: req.experience,
            position: req.position,
            company_id: req.company_id,
        }
    }
}

/// Query parameters for listing jobs
#[derive(Debug, Default, Deserialize)]
pub struct ListJobsParams {
    #[serde(default)]
    pub keyword: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateJobResponse {
    pub message: String,
    pub job: JobResponse,
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobResponse>,
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct JobDetailResponse {
    pub job: JobResponse,
    pub success: bool,
}

/// Post a new job on behalf of the acting user
///
/// **POST /api/v1/job/post**
pub async fn create_job(
    AuthUser(ctx): AuthUser,
    State(state): State<JobsState>,
    ApiJson(req): ApiJson<CreateJobRequest>,
) -> Result<(StatusCode, Json<CreateJobResponse>)> {
    let job = Job::new(req.into(), ctx.user_id)?;

    let created = state.jobs.create(&job).await?;

    tracing::info!(
        job_id = %created.id,
        created_by = %created.created_by,
        company_id = %created.company_id,
        "Job created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateJobResponse {
            message: "New job created successfully.".to_string(),
            job: created.into(),
            success: true,
        }),
    ))
}

/// Search jobs by keyword, newest first
///
/// **GET /api/v1/job/get?keyword=**
pub async fn list_jobs(
    AuthUser(_ctx): AuthUser,
    State(state): State<JobsState>,
    Query(params): Query<ListJobsParams>,
) -> Result<Json<JobListResponse>> {
    let keyword = params.keyword.unwrap_or_default();

    let jobs = state.jobs.search(&keyword).await?;
    tracing::debug!(keyword = %keyword, count = jobs.len(), "Listed jobs");

    Ok(Json(JobListResponse {
        jobs: jobs.into_iter().map(Into::into).collect(),
        success: true,
    }))
}

/// Get a single job with its applications
///
/// **GET /api/v1/job/get/{id}**
pub async fn get_job(
    AuthUser(_ctx): AuthUser,
    State(state): State<JobsState>,
    Path(id): Path<String>,
) -> Result<Json<JobDetailResponse>> {
    let not_found = || Error::NotFound("Job not found.".to_string());

    // A malformed id cannot name a stored job
    let id = Uuid::parse_str(&id).map_err(|_| not_found())?;

    let job = state
        .jobs
        .find_with_applications(id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(JobDetailResponse {
        job: job.into(),
        success: true,
    }))
}

/// List jobs posted by the acting user, newest first
///
/// **GET /api/v1/job/getadminjobs**
pub async fn list_admin_jobs(
    AuthUser(ctx): AuthUser,
    State(state): State<JobsState>,
) -> Result<Json<JobListResponse>> {
    let jobs = state.jobs.list_by_creator(ctx.user_id).await?;
    tracing::debug!(user_id = %ctx.user_id, count = jobs.len(), "Listed admin jobs");

    Ok(Json(JobListResponse {
        jobs: jobs.into_iter().map(Into::into).collect(),
        success: true,
    }))
}
