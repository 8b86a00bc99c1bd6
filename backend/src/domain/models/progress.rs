use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_BODY_LEN: usize = 2048;

/// Domain model for a weekly progress note. The week number is stamped
/// from the program timeline when the note is posted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub id: String,
    pub project_id: String,
    pub week: u32,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl ProgressUpdate {
    /// Generate a unique ID for a progress update
    pub fn generate_id() -> String {
        format!("update::{}", Uuid::new_v4())
    }

    pub fn validate_body(body: &str) -> Result<(), ProgressValidationError> {
        if body.trim().is_empty() {
            return Err(ProgressValidationError::EmptyBody);
        }
        if body.len() > MAX_BODY_LEN {
            return Err(ProgressValidationError::BodyTooLong);
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ProgressValidationError {
    #[error("Progress update cannot be empty")]
    EmptyBody,
    #[error("Progress update cannot exceed {MAX_BODY_LEN} characters")]
    BodyTooLong,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_body() {
        assert_eq!(
            ProgressUpdate::validate_body("  "),
            Err(ProgressValidationError::EmptyBody)
        );
        assert_eq!(
            ProgressUpdate::validate_body(&"x".repeat(2049)),
            Err(ProgressValidationError::BodyTooLong)
        );
        assert!(ProgressUpdate::validate_body("Shipped the indexer MVP").is_ok());
    }
}
