//! Job domain entities
//!
//! `Job` is the only entity written by this domain. `Company` and
//! `Application` are read models joined into job views; their rows are owned
//! elsewhere.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::validation::{
    parse_position, parse_salary, present, split_requirements, validate_experience,
    JobValidationError,
};

/// Job posting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub salary: f64,
    pub location: String,
    pub job_type: String,
    pub experience_level: String,
    pub position: i32,
    pub company_id: Uuid,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Raw job fields as submitted by a client, before validation
#[derive(Debug, Clone, Default)]
pub struct NewJobInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub salary: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub experience: Option<String>,
    pub position: Option<String>,
    pub company_id: Option<String>,
}

impl Job {
    /// Build a new job from client input.
    ///
    /// Checks run in a fixed order: every field present, then salary,
    /// experience range, position, company id. Nothing is persisted here.
    pub fn new(input: NewJobInput, created_by: Uuid) -> Result<Self, JobValidationError> {
        let (
            Some(title),
            Some(description),
            Some(requirements),
            Some(salary),
            Some(location),
            Some(job_type),
            Some(experience),
            Some(position),
            Some(company_id),
        ) = (
            present(&input.title),
            present(&input.description),
            present(&input.requirements),
            present(&input.salary),
            present(&input.location),
            present(&input.job_type),
            present(&input.experience),
            present(&input.position),
            present(&input.company_id),
        )
        else {
            return Err(JobValidationError::MissingFields);
        };

        let requirements = split_requirements(requirements);
        if requirements.is_empty() {
            return Err(JobValidationError::MissingFields);
        }

        let salary = parse_salary(salary).ok_or(JobValidationError::InvalidSalary)?;

        // Presence is judged on trimmed text; stored text is kept as sent
        let raw_experience = input.experience.as_deref().unwrap_or(experience);
        if !validate_experience(raw_experience) {
            return Err(JobValidationError::InvalidExperienceFormat);
        }

        let position = parse_position(position).ok_or(JobValidationError::InvalidPosition)?;

        let company_id =
            Uuid::parse_str(company_id).map_err(|_| JobValidationError::InvalidCompanyId)?;

        let now = Utc::now();
        Ok(Job {
            id: Uuid::new_v4(),
            title: input.title.as_deref().unwrap_or(title).to_string(),
            description: input.description.as_deref().unwrap_or(description).to_string(),
            requirements,
            salary,
            location: input.location.as_deref().unwrap_or(location).to_string(),
            job_type: input.job_type.as_deref().unwrap_or(job_type).to_string(),
            experience_level: raw_experience.to_string(),
            position,
            company_id,
            created_by,
            created_at: now,
            updated_at: now,
        })
    }

    /// Case-insensitive substring match against title or description.
    /// An empty keyword matches every job.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        if keyword.is_empty() {
            return true;
        }
        let needle = keyword.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

/// Company read model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Company {
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

/// Application status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "application_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

/// Application read model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Application {
    pub id: Uuid,
    pub job_id: Uuid,
    pub applicant_id: Uuid,
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Job joined with its company, as returned by listings
#[derive(Debug, Clone, PartialEq)]
pub struct JobWithCompany {
    pub job: Job,
    /// `None` when the referenced company row no longer exists
    pub company: Option<Company>,
    pub application_ids: Vec<Uuid>,
}

/// Job joined with its applications, as returned by the detail view
#[derive(Debug, Clone, PartialEq)]
pub struct JobWithApplications {
    pub job: Job,
    pub applications: Vec<Application>,
}
