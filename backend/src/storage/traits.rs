//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::hackathon::Hackathon;
use crate::domain::models::payout::Payout;
use crate::domain::models::progress::ProgressUpdate;
use crate::domain::models::project::Project;
use crate::domain::models::submission::Submission;

/// Trait defining the interface for hackathon storage operations
#[async_trait]
pub trait HackathonStorage: Send + Sync {
    /// Store a new hackathon
    async fn store_hackathon(&self, hackathon: &Hackathon) -> Result<()>;

    /// Retrieve a specific hackathon by ID
    async fn get_hackathon(&self, hackathon_id: &str) -> Result<Option<Hackathon>>;

    /// List all hackathons, newest first
    async fn list_hackathons(&self) -> Result<Vec<Hackathon>>;
}

/// Trait defining the interface for project storage operations
#[async_trait]
pub trait ProjectStorage: Send + Sync {
    /// Store a new project
    async fn store_project(&self, project: &Project) -> Result<()>;

    /// Retrieve a specific project by ID
    async fn get_project(&self, project_id: &str) -> Result<Option<Project>>;

    /// List all projects, newest first
    async fn list_projects(&self) -> Result<Vec<Project>>;

    /// Update an existing project (status, roadmap, updated_at)
    async fn update_project(&self, project: &Project) -> Result<()>;
}

/// Trait defining the interface for progress update storage operations
#[async_trait]
pub trait ProgressStorage: Send + Sync {
    /// Store a new progress update (append-only)
    async fn store_update(&self, update: &ProgressUpdate) -> Result<()>;

    /// List a project's progress updates, newest first
    async fn list_updates(&self, project_id: &str) -> Result<Vec<ProgressUpdate>>;
}

/// Trait defining the interface for submission storage operations
///
/// Submissions are append-only; the newest row for a project is the
/// effective deliverable.
#[async_trait]
pub trait SubmissionStorage: Send + Sync {
    /// Store a new submission (append-only)
    async fn store_submission(&self, submission: &Submission) -> Result<()>;

    /// Get the effective (newest) submission for a project
    async fn get_latest_submission(&self, project_id: &str) -> Result<Option<Submission>>;

    /// List a project's submissions, newest first
    async fn list_submissions(&self, project_id: &str) -> Result<Vec<Submission>>;
}

/// Trait defining the interface for payout record storage operations
#[async_trait]
pub trait PayoutStorage: Send + Sync {
    /// Store a new payout record
    async fn store_payout(&self, payout: &Payout) -> Result<()>;

    /// List a project's payout records, newest first
    async fn list_payouts(&self, project_id: &str) -> Result<Vec<Payout>>;
}
