//! Submission service domain logic.
//!
//! This module owns the team-facing actions that are gated by the program
//! clock: roadmap edits, weekly progress notes, and the final deliverable
//! submission. Every gate is enforced here against the derived timeline,
//! not in the presentation layer.
//!
//! ## Business Rules
//!
//! - Roadmaps are editable during weeks 1-4 only (the building phase)
//! - Progress notes can be posted until the deadline passes, and are
//!   stamped with the program week they landed in
//! - Deliverables can be submitted during weeks 5-6 only; submissions are
//!   append-only and the newest one is the effective deliverable
//! - A first submission moves the project from Building to UnderReview;
//!   later lifecycle changes are curator actions

use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::progress::{
    ProgressListResult, RecordProgressCommand, RecordProgressResult,
};
use crate::domain::commands::project::ProjectResult;
use crate::domain::commands::submission::{
    CurrentSubmissionResult, SubmitDeliverableCommand, SubmitDeliverableResult,
    UpdateRoadmapCommand,
};
use crate::domain::models::progress::ProgressUpdate;
use crate::domain::models::project::Project;
use crate::domain::models::submission::{Submission, WindowViolation};
use crate::domain::project_service::ProjectService;
use crate::storage::repositories::{ProgressRepository, ProjectRepository, SubmissionRepository};
use crate::storage::{DbConnection, ProgressStorage, ProjectStorage, SubmissionStorage};

/// Service for the window-gated team actions
#[derive(Clone)]
pub struct SubmissionService {
    submission_repository: SubmissionRepository,
    progress_repository: ProgressRepository,
    project_repository: ProjectRepository,
    project_service: ProjectService,
}

impl SubmissionService {
    /// Create a new SubmissionService
    pub fn new(db: Arc<DbConnection>, project_service: ProjectService) -> Self {
        Self {
            submission_repository: SubmissionRepository::new((*db).clone()),
            progress_repository: ProgressRepository::new((*db).clone()),
            project_repository: ProjectRepository::new((*db).clone()),
            project_service,
        }
    }

    /// Replace a project's roadmap. Allowed during weeks 1-4 only.
    pub async fn update_roadmap(&self, command: UpdateRoadmapCommand) -> Result<ProjectResult> {
        info!("Updating roadmap for project {}", command.project_id);

        Project::validate_roadmap(&command.roadmap)?;

        let mut project = self.project_service.get_project(&command.project_id).await?;
        let now = Utc::now();
        let timeline = self
            .project_service
            .timeline_for_project(&project, now)
            .await?;

        if !timeline.can_edit_roadmap {
            warn!(
                "Roadmap edit rejected for {} in week {}",
                project.id, timeline.current_week
            );
            return Err(WindowViolation::RoadmapLocked {
                current_week: timeline.current_week,
            }
            .into());
        }

        project.roadmap = Some(command.roadmap.trim().to_string());
        project.updated_at = now;
        self.project_repository.update_project(&project).await?;

        Ok(ProjectResult {
            project,
            success_message: "Roadmap updated successfully".to_string(),
        })
    }

    /// Post a weekly progress note. Allowed until the deadline passes; the
    /// stored note is stamped with the current program week.
    pub async fn record_progress(
        &self,
        command: RecordProgressCommand,
    ) -> Result<RecordProgressResult> {
        info!("Recording progress for project {}", command.project_id);

        ProgressUpdate::validate_body(&command.body)?;

        let project = self.project_service.get_project(&command.project_id).await?;
        let now = Utc::now();
        let timeline = self
            .project_service
            .timeline_for_project(&project, now)
            .await?;

        if timeline.is_past_deadline {
            warn!("Progress note rejected for {}: program over", project.id);
            return Err(WindowViolation::ProgramOver.into());
        }

        let update = ProgressUpdate {
            id: ProgressUpdate::generate_id(),
            project_id: project.id,
            week: timeline.current_week,
            body: command.body.trim().to_string(),
            created_at: now,
        };
        self.progress_repository.store_update(&update).await?;

        Ok(RecordProgressResult {
            update,
            success_message: "Progress update posted".to_string(),
        })
    }

    /// List a project's progress notes, newest first
    pub async fn list_progress(&self, project_id: &str) -> Result<ProgressListResult> {
        // Resolve the project first so unknown IDs read as 404, not an
        // empty list.
        let project = self.project_service.get_project(project_id).await?;
        let updates = self.progress_repository.list_updates(&project.id).await?;
        Ok(ProgressListResult { updates })
    }

    /// Submit the final deliverable. Allowed during weeks 5-6 only; a first
    /// submission moves the project to under review.
    pub async fn submit_deliverable(
        &self,
        command: SubmitDeliverableCommand,
    ) -> Result<SubmitDeliverableResult> {
        info!("Submitting deliverable for project {}", command.project_id);

        Submission::validate(&command.repo_url, command.notes.as_deref())?;

        let mut project = self.project_service.get_project(&command.project_id).await?;
        let now = Utc::now();
        let timeline = self
            .project_service
            .timeline_for_project(&project, now)
            .await?;

        if !timeline.can_submit {
            let violation = if timeline.is_past_deadline {
                WindowViolation::SubmissionClosed
            } else {
                WindowViolation::SubmissionNotOpen {
                    days_until_open: timeline.days_until_submission_opens,
                }
            };
            warn!("Submission rejected for {}: {}", project.id, violation);
            return Err(violation.into());
        }

        let submission = Submission {
            id: Submission::generate_id(),
            project_id: project.id.clone(),
            week: timeline.current_week,
            repo_url: command.repo_url.trim().to_string(),
            demo_url: command.demo_url,
            notes: command.notes,
            submitted_at: now,
        };
        self.submission_repository
            .store_submission(&submission)
            .await?;

        // First deliverable moves the project into review. Resubmissions
        // keep whatever state the curators have set since.
        if project.status == shared::ProjectStatus::Building {
            project.status = shared::ProjectStatus::UnderReview;
            project.updated_at = now;
            self.project_repository.update_project(&project).await?;
            info!("Project {} moved to under review", project.id);
        }

        Ok(SubmitDeliverableResult {
            submission,
            project,
            success_message: "Deliverable submitted successfully".to_string(),
        })
    }

    /// Get the effective (newest) submission for a project
    pub async fn get_current_submission(
        &self,
        project_id: &str,
    ) -> Result<CurrentSubmissionResult> {
        let project = self.project_service.get_project(project_id).await?;
        let submission = self
            .submission_repository
            .get_latest_submission(&project.id)
            .await?;
        Ok(CurrentSubmissionResult { submission })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::hackathon::CreateHackathonCommand;
    use crate::domain::commands::project::CreateProjectCommand;
    use crate::domain::hackathon_service::HackathonService;
    use crate::domain::timeline::TimelineService;
    use chrono::Duration;

    struct TestContext {
        hackathon_service: HackathonService,
        project_service: ProjectService,
        submission_service: SubmissionService,
    }

    async fn create_test_context() -> TestContext {
        let db = Arc::new(DbConnection::init_test().await.expect("init test db"));
        let hackathon_service = HackathonService::new(db.clone(), TimelineService::new());
        let project_service = ProjectService::new(db.clone(), TimelineService::new());
        let submission_service = SubmissionService::new(db, project_service.clone());
        TestContext {
            hackathon_service,
            project_service,
            submission_service,
        }
    }

    /// Create a project in a program whose hackathon ended `days_ago` days
    /// before today. `None` creates a project with no hackathon link.
    async fn seed_project(ctx: &TestContext, days_ago: Option<i64>) -> String {
        let hackathon_id = match days_ago {
            Some(days) => {
                let end = Utc::now().date_naive() - Duration::days(days);
                let result = ctx
                    .hackathon_service
                    .create_hackathon(CreateHackathonCommand {
                        name: "Test Hackathon".to_string(),
                        end_date: Some(end.format("%Y-%m-%d").to_string()),
                    })
                    .await
                    .expect("seed hackathon");
                Some(result.hackathon.id)
            }
            None => None,
        };

        let result = ctx
            .project_service
            .create_project(CreateProjectCommand {
                name: "Bridge Monitor".to_string(),
                team_name: "Team Rocket".to_string(),
                hackathon_id,
            })
            .await
            .expect("seed project");
        result.project.id
    }

    #[tokio::test]
    async fn test_roadmap_editable_during_building_weeks() {
        let ctx = create_test_context().await;
        // 7 days in: week 2, building phase.
        let project_id = seed_project(&ctx, Some(7)).await;

        let result = ctx
            .submission_service
            .update_roadmap(UpdateRoadmapCommand {
                project_id: project_id.clone(),
                roadmap: "Week 1: indexer. Week 2: alerts UI.".to_string(),
            })
            .await
            .expect("update roadmap");
        assert_eq!(
            result.project.roadmap.as_deref(),
            Some("Week 1: indexer. Week 2: alerts UI.")
        );

        let reloaded = ctx
            .project_service
            .get_project(&project_id)
            .await
            .expect("reload");
        assert!(reloaded.roadmap.is_some());
    }

    #[tokio::test]
    async fn test_roadmap_locked_once_submission_window_opens() {
        let ctx = create_test_context().await;
        // 30 days in: week 5.
        let project_id = seed_project(&ctx, Some(30)).await;

        let err = ctx
            .submission_service
            .update_roadmap(UpdateRoadmapCommand {
                project_id,
                roadmap: "Too late".to_string(),
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Roadmap is locked"));
        assert!(err.to_string().contains("week 5"));
    }

    #[tokio::test]
    async fn test_roadmap_editable_before_program_starts() {
        let ctx = create_test_context().await;
        // No hackathon link: the fallback timeline keeps the roadmap open.
        let project_id = seed_project(&ctx, None).await;

        let result = ctx
            .submission_service
            .update_roadmap(UpdateRoadmapCommand {
                project_id,
                roadmap: "Planning ahead".to_string(),
            })
            .await
            .expect("update roadmap");
        assert!(result.success_message.contains("updated"));
    }

    #[tokio::test]
    async fn test_progress_notes_are_stamped_with_the_week() {
        let ctx = create_test_context().await;
        let project_id = seed_project(&ctx, Some(30)).await;

        let first = ctx
            .submission_service
            .record_progress(RecordProgressCommand {
                project_id: project_id.clone(),
                body: "Deployed the staging indexer".to_string(),
            })
            .await
            .expect("record");
        assert_eq!(first.update.week, 5);

        ctx.submission_service
            .record_progress(RecordProgressCommand {
                project_id: project_id.clone(),
                body: "Integrated alert webhooks".to_string(),
            })
            .await
            .expect("record second");

        let listed = ctx
            .submission_service
            .list_progress(&project_id)
            .await
            .expect("list");
        assert_eq!(listed.updates.len(), 2);
        assert_eq!(listed.updates[0].body, "Integrated alert webhooks");
    }

    #[tokio::test]
    async fn test_progress_closed_after_the_deadline() {
        let ctx = create_test_context().await;
        // 45 days in: past the deadline.
        let project_id = seed_project(&ctx, Some(45)).await;

        let err = ctx
            .submission_service
            .record_progress(RecordProgressCommand {
                project_id,
                body: "Too late".to_string(),
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Program is over"));
    }

    #[tokio::test]
    async fn test_submission_rejected_before_the_window_opens() {
        let ctx = create_test_context().await;
        // 7 days in: week 2, window opens at week 5.
        let project_id = seed_project(&ctx, Some(7)).await;

        let err = ctx
            .submission_service
            .submit_deliverable(SubmitDeliverableCommand {
                project_id,
                repo_url: "https://github.com/team/repo".to_string(),
                demo_url: None,
                notes: None,
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("has not opened yet"));
    }

    #[tokio::test]
    async fn test_unlinked_project_cannot_submit() {
        let ctx = create_test_context().await;
        let project_id = seed_project(&ctx, None).await;

        let err = ctx
            .submission_service
            .submit_deliverable(SubmitDeliverableCommand {
                project_id,
                repo_url: "https://github.com/team/repo".to_string(),
                demo_url: None,
                notes: None,
            })
            .await
            .unwrap_err();
        // The fallback timeline sits at the start of week 1.
        assert!(err.to_string().contains("28 days"));
    }

    #[tokio::test]
    async fn test_submission_in_window_moves_project_to_review() {
        let ctx = create_test_context().await;
        let project_id = seed_project(&ctx, Some(30)).await;

        let result = ctx
            .submission_service
            .submit_deliverable(SubmitDeliverableCommand {
                project_id: project_id.clone(),
                repo_url: "https://github.com/team/repo".to_string(),
                demo_url: Some("https://demo.example.com".to_string()),
                notes: Some("Video walkthrough in the README".to_string()),
            })
            .await
            .expect("submit");

        assert_eq!(result.submission.week, 5);
        assert_eq!(result.project.status, shared::ProjectStatus::UnderReview);

        // Resubmission inside the window appends a new effective deliverable.
        let second = ctx
            .submission_service
            .submit_deliverable(SubmitDeliverableCommand {
                project_id: project_id.clone(),
                repo_url: "https://github.com/team/repo-v2".to_string(),
                demo_url: None,
                notes: None,
            })
            .await
            .expect("resubmit");
        assert_eq!(second.project.status, shared::ProjectStatus::UnderReview);

        let current = ctx
            .submission_service
            .get_current_submission(&project_id)
            .await
            .expect("current");
        assert_eq!(
            current.submission.expect("submission").repo_url,
            "https://github.com/team/repo-v2"
        );
    }

    #[tokio::test]
    async fn test_submission_rejected_after_the_deadline() {
        let ctx = create_test_context().await;
        let project_id = seed_project(&ctx, Some(45)).await;

        let err = ctx
            .submission_service
            .submit_deliverable(SubmitDeliverableCommand {
                project_id,
                repo_url: "https://github.com/team/repo".to_string(),
                demo_url: None,
                notes: None,
            })
            .await
            .unwrap_err();
        assert!(err.to_string().contains("deadline has passed"));
    }

    #[tokio::test]
    async fn test_current_submission_for_fresh_project_is_none() {
        let ctx = create_test_context().await;
        let project_id = seed_project(&ctx, Some(30)).await;

        let current = ctx
            .submission_service
            .get_current_submission(&project_id)
            .await
            .expect("current");
        assert!(current.submission.is_none());
    }
}
