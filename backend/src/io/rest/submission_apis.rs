//! # REST API for Window-Gated Team Actions
//!
//! Roadmap edits, weekly progress notes, and the final deliverable
//! submission. The window rules are enforced in the domain layer; this
//! layer translates the rejections to 403s so clients can distinguish
//! "closed window" from bad input.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, put},
    Router,
};
use tracing::{error, info};

use crate::domain::commands::progress::RecordProgressCommand;
use crate::domain::commands::submission::{SubmitDeliverableCommand, UpdateRoadmapCommand};
use crate::io::rest::mappers::project_mapper::ProjectMapper;
use crate::io::rest::mappers::submission_mapper::SubmissionMapper;
use crate::AppState;
use shared::{RecordProgressRequest, SubmitDeliverableRequest, UpdateRoadmapRequest};

/// Create a router for the window-gated team action APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/:project_id/roadmap", put(update_roadmap))
        .route("/:project_id/progress", get(list_progress).post(record_progress))
        .route(
            "/:project_id/submission",
            get(get_current_submission).post(submit_deliverable),
        )
}

/// Pick the HTTP status for a rejected team action.
fn rejection_status(message: &str) -> StatusCode {
    if message.contains("not found") {
        StatusCode::NOT_FOUND
    } else if message.contains("Roadmap is locked")
        || message.contains("has not opened yet")
        || message.contains("deadline has passed")
        || message.contains("Program is over")
    {
        StatusCode::FORBIDDEN
    } else if message.contains("cannot be empty") || message.contains("cannot exceed") {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Replace a project's roadmap (weeks 1-4 only)
pub async fn update_roadmap(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Json(request): Json<UpdateRoadmapRequest>,
) -> impl IntoResponse {
    info!("PUT /api/projects/{}/roadmap", project_id);

    let command = UpdateRoadmapCommand {
        project_id,
        roadmap: request.roadmap,
    };

    match state.submission_service.update_roadmap(command).await {
        Ok(result) => {
            let response = ProjectMapper::to_project_response(result);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to update roadmap: {}", e);
            (rejection_status(&e.to_string()), e.to_string()).into_response()
        }
    }
}

/// List a project's progress notes
pub async fn list_progress(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/projects/{}/progress", project_id);

    match state.submission_service.list_progress(&project_id).await {
        Ok(result) => {
            let response = SubmissionMapper::to_progress_list_response(result);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to list progress: {}", e);
            (rejection_status(&e.to_string()), e.to_string()).into_response()
        }
    }
}

/// Post a weekly progress note (until the deadline)
pub async fn record_progress(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Json(request): Json<RecordProgressRequest>,
) -> impl IntoResponse {
    info!("POST /api/projects/{}/progress", project_id);

    let command = RecordProgressCommand {
        project_id,
        body: request.body,
    };

    match state.submission_service.record_progress(command).await {
        Ok(result) => {
            let response = SubmissionMapper::to_progress_response(result);
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to record progress: {}", e);
            (rejection_status(&e.to_string()), e.to_string()).into_response()
        }
    }
}

/// Get the effective (newest) submission
pub async fn get_current_submission(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/projects/{}/submission", project_id);

    match state
        .submission_service
        .get_current_submission(&project_id)
        .await
    {
        Ok(result) => {
            let response = SubmissionMapper::to_current_response(result);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to get submission: {}", e);
            (rejection_status(&e.to_string()), e.to_string()).into_response()
        }
    }
}

/// Submit the final deliverable (weeks 5-6 only)
pub async fn submit_deliverable(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Json(request): Json<SubmitDeliverableRequest>,
) -> impl IntoResponse {
    info!("POST /api/projects/{}/submission", project_id);

    let command = SubmitDeliverableCommand {
        project_id,
        repo_url: request.repo_url,
        demo_url: request.demo_url,
        notes: request.notes,
    };

    match state.submission_service.submit_deliverable(command).await {
        Ok(result) => {
            let response = SubmissionMapper::to_submission_response(result);
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to submit deliverable: {}", e);
            (rejection_status(&e.to_string()), e.to_string()).into_response()
        }
    }
}
