use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_URL_LEN: usize = 512;
pub const MAX_NOTES_LEN: usize = 2048;

/// Domain model for a final deliverable submission. Rows are append-only;
/// the newest row for a project is the effective deliverable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub project_id: String,
    pub week: u32,
    pub repo_url: String,
    pub demo_url: Option<String>,
    pub notes: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Generate a unique ID for a submission
    pub fn generate_id() -> String {
        format!("submission::{}", Uuid::new_v4())
    }

    pub fn validate(
        repo_url: &str,
        notes: Option<&str>,
    ) -> Result<(), SubmissionValidationError> {
        if repo_url.trim().is_empty() {
            return Err(SubmissionValidationError::EmptyRepoUrl);
        }
        if repo_url.len() > MAX_URL_LEN {
            return Err(SubmissionValidationError::RepoUrlTooLong);
        }
        if let Some(notes) = notes {
            if notes.len() > MAX_NOTES_LEN {
                return Err(SubmissionValidationError::NotesTooLong);
            }
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SubmissionValidationError {
    #[error("Repository URL cannot be empty")]
    EmptyRepoUrl,
    #[error("Repository URL cannot exceed {MAX_URL_LEN} characters")]
    RepoUrlTooLong,
    #[error("Submission notes cannot exceed {MAX_NOTES_LEN} characters")]
    NotesTooLong,
}

/// Rejections raised when an operation falls outside its program window.
/// These carry the derived timeline facts so callers can render countdowns.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum WindowViolation {
    #[error("Roadmap is locked after week 4 (currently week {current_week})")]
    RoadmapLocked { current_week: u32 },
    #[error("Submission window has not opened yet ({days_until_open} days to go)")]
    SubmissionNotOpen { days_until_open: i64 },
    #[error("Submission deadline has passed")]
    SubmissionClosed,
    #[error("Program is over; progress updates are closed")]
    ProgramOver,
}
