use crate::domain::commands::progress::{ProgressListResult, RecordProgressResult};
use crate::domain::commands::submission::{CurrentSubmissionResult, SubmitDeliverableResult};
use crate::domain::models::progress::ProgressUpdate;
use crate::domain::models::submission::Submission;

pub struct SubmissionMapper;

impl SubmissionMapper {
    /// Convert a domain Submission to the shared DTO
    pub fn to_dto(submission: Submission) -> shared::Submission {
        shared::Submission {
            id: submission.id,
            project_id: submission.project_id,
            week: submission.week,
            repo_url: submission.repo_url,
            demo_url: submission.demo_url,
            notes: submission.notes,
            submitted_at: submission.submitted_at.to_rfc3339(),
        }
    }

    /// Convert a domain ProgressUpdate to the shared DTO
    pub fn progress_to_dto(update: ProgressUpdate) -> shared::ProgressUpdate {
        shared::ProgressUpdate {
            id: update.id,
            project_id: update.project_id,
            week: update.week,
            body: update.body,
            created_at: update.created_at.to_rfc3339(),
        }
    }

    /// Convert a submit result to the shared response
    pub fn to_submission_response(result: SubmitDeliverableResult) -> shared::SubmissionResponse {
        shared::SubmissionResponse {
            submission: Self::to_dto(result.submission),
            success_message: result.success_message,
        }
    }

    /// Convert the effective-submission result to the shared response
    pub fn to_current_response(result: CurrentSubmissionResult) -> shared::CurrentSubmissionResponse {
        shared::CurrentSubmissionResponse {
            submission: result.submission.map(Self::to_dto),
        }
    }

    /// Convert a record-progress result to the shared response
    pub fn to_progress_response(result: RecordProgressResult) -> shared::ProgressResponse {
        shared::ProgressResponse {
            update: Self::progress_to_dto(result.update),
            success_message: result.success_message,
        }
    }

    /// Convert a progress list result to the shared response
    pub fn to_progress_list_response(result: ProgressListResult) -> shared::ProgressListResponse {
        shared::ProgressListResponse {
            updates: result
                .updates
                .into_iter()
                .map(Self::progress_to_dto)
                .collect(),
        }
    }
}
