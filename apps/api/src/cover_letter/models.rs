//! Wire types for `POST /api/generate`.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Job title and description are required";

/// Request body for cover letter generation. Every field is optional on the
/// wire; `job_title` and `job_description` are enforced by `validate`.
/// Unknown fields are ignored and `null` reads as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub job_title: Option<String>,
    pub experience_level: Option<String>,
    pub skills: Option<String>,
    pub years_of_experience: Option<String>,
    pub achievements: Option<String>,
    pub soft_skills: Option<String>,
    pub motivation: Option<String>,
    pub job_description: Option<String>,
}

/// A request whose required fields are known to be present and non-empty.
/// The only way to obtain one is `GenerationRequest::validate`.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedRequest<'a> {
    pub job_title: &'a str,
    pub job_description: &'a str,
    pub fields: &'a GenerationRequest,
}

impl GenerationRequest {
    /// Checks the two required fields. Whitespace is not trimmed: `" "` passes.
    pub fn validate(&self) -> Result<ValidatedRequest<'_>, AppError> {
        match (non_empty(&self.job_title), non_empty(&self.job_description)) {
            (Some(job_title), Some(job_description)) => Ok(ValidatedRequest {
                job_title,
                job_description,
                fields: self,
            }),
            _ => Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())),
        }
    }
}

/// Treats `None` and `""` alike.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub cover_letter: String,
}
