//! Validation rules for job postings

use regex::Regex;
use thiserror::Error;

use jobboard_common::Error;

lazy_static::lazy_static! {
    /// Experience range: one or two non-negative integers joined by a hyphen
    /// ("0", "3", "2-4"). ASCII digits only.
    pub static ref EXPERIENCE_REGEX: Regex = Regex::new(r"^[0-9]+(-[0-9]+)?$").unwrap();
}

/// Client-input errors raised while building a job from request fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobValidationError {
    #[error("Something is missing.")]
    MissingFields,

    #[error("Invalid salary value.")]
    InvalidSalary,

    #[error("Invalid experience format. Use formats like '0-1', '2-4', etc.")]
    InvalidExperienceFormat,

    #[error("Invalid position value.")]
    InvalidPosition,

    #[error("Invalid company id.")]
    InvalidCompanyId,
}

impl From<JobValidationError> for Error {
    fn from(err: JobValidationError) -> Self {
        Error::Validation(err.to_string())
    }
}

/// A field counts as present when it has non-whitespace content
pub fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Validate an experience range
pub fn validate_experience(experience: &str) -> bool {
    EXPERIENCE_REGEX.is_match(experience)
}

/// Parse a salary into a finite number
pub fn parse_salary(salary: &str) -> Option<f64> {
    salary
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parse a count of open positions
pub fn parse_position(position: &str) -> Option<i32> {
    position.trim().parse::<i32>().ok().filter(|p| *p >= 0)
}

/// Split comma-delimited requirements into trimmed tokens, dropping empty ones
pub fn split_requirements(requirements: &str) -> Vec<String> {
    requirements
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
