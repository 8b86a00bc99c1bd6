//! Project service domain logic.
//!
//! This module contains the core business logic for tracked projects,
//! including registration, dashboard listings, and the timeline derivation
//! that ties a project to its hackathon's program clock.
//!
//! ## Key Responsibilities
//!
//! - **Project CRUD**: Registering projects and overriding lifecycle status
//! - **Timeline Derivation**: Resolving project -> hackathon -> end date and
//!   computing the program timeline for every read
//! - **Schedule Generation**: The six-week calendar blocks for the timeline
//!   view
//!
//! Timelines are derived snapshots: they are computed fresh on every read
//! and never persisted.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::project::{
    CreateProjectCommand, ProjectDetailResult, ProjectListResult, ProjectOverview,
    ProjectResult, ProjectScheduleResult, UpdateStatusCommand,
};
use crate::domain::models::hackathon::Hackathon;
use crate::domain::models::project::Project;
use crate::domain::timeline::{ProgramTimeline, TimelineService};
use crate::storage::repositories::{HackathonRepository, ProjectRepository};
use crate::storage::{DbConnection, HackathonStorage, ProjectStorage};

/// Service for managing projects and their derived timelines
#[derive(Clone)]
pub struct ProjectService {
    project_repository: ProjectRepository,
    hackathon_repository: HackathonRepository,
    timeline_service: TimelineService,
}

impl ProjectService {
    /// Create a new ProjectService
    pub fn new(db: Arc<DbConnection>, timeline_service: TimelineService) -> Self {
        Self {
            project_repository: ProjectRepository::new((*db).clone()),
            hackathon_repository: HackathonRepository::new((*db).clone()),
            timeline_service,
        }
    }

    /// Register a new finalist project
    pub async fn create_project(&self, command: CreateProjectCommand) -> Result<ProjectResult> {
        info!("Creating project: {:?}", command);

        Project::validate_names(&command.name, &command.team_name)?;

        // A dangling hackathon link would silently degrade every timeline
        // read to the fallback, so reject it up front.
        if let Some(hackathon_id) = &command.hackathon_id {
            if self
                .hackathon_repository
                .get_hackathon(hackathon_id)
                .await?
                .is_none()
            {
                return Err(anyhow::anyhow!("Hackathon not found: {}", hackathon_id));
            }
        }

        let now = Utc::now();
        let project = Project {
            id: Project::generate_id(),
            hackathon_id: command.hackathon_id,
            name: command.name.trim().to_string(),
            team_name: command.team_name.trim().to_string(),
            status: shared::ProjectStatus::Building,
            roadmap: None,
            created_at: now,
            updated_at: now,
        };

        self.project_repository.store_project(&project).await?;

        info!("Successfully created project: {}", project.id);

        Ok(ProjectResult {
            project,
            success_message: "Project registered successfully".to_string(),
        })
    }

    /// List all projects with their derived timelines, newest first
    pub async fn list_projects(&self) -> Result<ProjectListResult> {
        let now = Utc::now();
        let mut overviews = Vec::new();

        for project in self.project_repository.list_projects().await? {
            let timeline = self.timeline_for_project(&project, now).await?;
            overviews.push(ProjectOverview { project, timeline });
        }

        Ok(ProjectListResult {
            projects: overviews,
        })
    }

    /// Get a project by ID
    pub async fn get_project(&self, project_id: &str) -> Result<Project> {
        self.project_repository
            .get_project(project_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Project not found: {}", project_id))
    }

    /// Get a project together with its hackathon and derived timeline
    pub async fn get_project_detail(&self, project_id: &str) -> Result<ProjectDetailResult> {
        let project = self.get_project(project_id).await?;
        let hackathon = self.hackathon_for_project(&project).await?;
        let end_date = hackathon.as_ref().and_then(|h| h.end_date);
        let timeline = self.timeline_service.calculate_timeline(end_date, Utc::now());

        Ok(ProjectDetailResult {
            project,
            hackathon,
            timeline,
        })
    }

    /// Get a project's timeline together with its six-week schedule.
    /// The schedule is empty until the linked hackathon has an end date.
    pub async fn project_schedule(&self, project_id: &str) -> Result<ProjectScheduleResult> {
        let project = self.get_project(project_id).await?;
        let now = Utc::now();
        let end_date = self.end_date_for_project(&project).await?;

        let timeline = self.timeline_service.calculate_timeline(end_date, now);
        let weeks = end_date
            .map(|end| self.timeline_service.program_schedule(end, now))
            .unwrap_or_default();

        Ok(ProjectScheduleResult { timeline, weeks })
    }

    /// Override a project's lifecycle status
    pub async fn update_status(&self, command: UpdateStatusCommand) -> Result<ProjectResult> {
        info!("Updating project status: {:?}", command);

        let mut project = self.get_project(&command.project_id).await?;
        project.status = command.status;
        project.updated_at = Utc::now();

        self.project_repository.update_project(&project).await?;

        let success_message =
            format!("Project status updated to {}", command.status.as_str());
        Ok(ProjectResult {
            project,
            success_message,
        })
    }

    /// Derive the program timeline for a project at the given instant
    pub async fn timeline_for_project(
        &self,
        project: &Project,
        now: DateTime<Utc>,
    ) -> Result<ProgramTimeline> {
        let end_date = self.end_date_for_project(project).await?;
        Ok(self.timeline_service.calculate_timeline(end_date, now))
    }

    async fn hackathon_for_project(&self, project: &Project) -> Result<Option<Hackathon>> {
        let Some(hackathon_id) = &project.hackathon_id else {
            return Ok(None);
        };
        let hackathon = self.hackathon_repository.get_hackathon(hackathon_id).await?;
        if hackathon.is_none() {
            // Links are validated at registration, so this means the record
            // went away underneath us. Degrade to the fallback timeline
            // rather than failing the whole read.
            warn!(
                "Project {} references missing hackathon {}",
                project.id, hackathon_id
            );
        }
        Ok(hackathon)
    }

    async fn end_date_for_project(&self, project: &Project) -> Result<Option<NaiveDate>> {
        Ok(self
            .hackathon_for_project(project)
            .await?
            .and_then(|h| h.end_date))
    }
}
