use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::ProjectStatus;
use uuid::Uuid;

pub const MAX_NAME_LEN: usize = 128;
pub const MAX_ROADMAP_LEN: usize = 4096;

/// Domain model for a finalist team's project tracked through the
/// accelerator. The lifecycle status moves Building -> UnderReview when the
/// final deliverable lands, and UnderReview -> Completed by curator action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub hackathon_id: Option<String>,
    pub name: String,
    pub team_name: String,
    pub status: ProjectStatus,
    pub roadmap: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Generate a unique ID for a project
    pub fn generate_id() -> String {
        format!("project::{}", Uuid::new_v4())
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ProjectValidationError {
    #[error("Project name cannot be empty")]
    EmptyName,
    #[error("Project name cannot exceed {MAX_NAME_LEN} characters")]
    NameTooLong,
    #[error("Team name cannot be empty")]
    EmptyTeamName,
    #[error("Team name cannot exceed {MAX_NAME_LEN} characters")]
    TeamNameTooLong,
    #[error("Roadmap cannot be empty")]
    EmptyRoadmap,
    #[error("Roadmap cannot exceed {MAX_ROADMAP_LEN} characters")]
    RoadmapTooLong,
}

impl Project {
    pub fn validate_names(name: &str, team_name: &str) -> Result<(), ProjectValidationError> {
        if name.trim().is_empty() {
            return Err(ProjectValidationError::EmptyName);
        }
        if name.len() > MAX_NAME_LEN {
            return Err(ProjectValidationError::NameTooLong);
        }
        if team_name.trim().is_empty() {
            return Err(ProjectValidationError::EmptyTeamName);
        }
        if team_name.len() > MAX_NAME_LEN {
            return Err(ProjectValidationError::TeamNameTooLong);
        }
        Ok(())
    }

    pub fn validate_roadmap(roadmap: &str) -> Result<(), ProjectValidationError> {
        if roadmap.trim().is_empty() {
            return Err(ProjectValidationError::EmptyRoadmap);
        }
        if roadmap.len() > MAX_ROADMAP_LEN {
            return Err(ProjectValidationError::RoadmapTooLong);
        }
        Ok(())
    }
}
