use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Domain model for a hackathon. The end date anchors every program
/// timeline derived for the hackathon's finalist projects; it is absent
/// while the event is still being scheduled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hackathon {
    pub id: String,
    pub name: String,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Hackathon {
    /// Generate a unique ID for a hackathon
    pub fn generate_id() -> String {
        format!("hackathon::{}", Uuid::new_v4())
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum HackathonValidationError {
    #[error("Hackathon name cannot be empty")]
    EmptyName,
    #[error("Hackathon name cannot exceed 128 characters")]
    NameTooLong,
}

impl Hackathon {
    /// Validate the fields supplied when creating a hackathon
    pub fn validate_name(name: &str) -> Result<(), HackathonValidationError> {
        if name.trim().is_empty() {
            return Err(HackathonValidationError::EmptyName);
        }
        if name.len() > 128 {
            return Err(HackathonValidationError::NameTooLong);
        }
        Ok(())
    }
}
