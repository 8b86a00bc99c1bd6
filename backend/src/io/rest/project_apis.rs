//! # REST API for Project Tracking
//!
//! Endpoints for registering projects and reading their derived program
//! state: dashboard listings, detail views, timelines, and schedules.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, put},
    Router,
};
use tracing::{error, info};

use crate::domain::commands::project::{CreateProjectCommand, UpdateStatusCommand};
use crate::io::rest::mappers::project_mapper::ProjectMapper;
use crate::io::rest::mappers::timeline_mapper::TimelineMapper;
use crate::AppState;
use shared::{CreateProjectRequest, UpdateProjectStatusRequest};

/// Create a router for project related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_projects).post(create_project))
        .route("/:project_id", get(get_project))
        .route("/:project_id/status", put(update_status))
        .route("/:project_id/timeline", get(get_project_timeline))
        .route("/:project_id/schedule", get(get_project_schedule))
}

/// List all projects with their derived timelines
pub async fn list_projects(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/projects");

    match state.project_service.list_projects().await {
        Ok(result) => {
            let response = ProjectMapper::to_list_response(result);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to list projects: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing projects").into_response()
        }
    }
}

/// Register a new finalist project
pub async fn create_project(
    State(state): State<AppState>,
    Json(request): Json<CreateProjectRequest>,
) -> impl IntoResponse {
    info!("POST /api/projects - request: {:?}", request);

    let command = CreateProjectCommand {
        name: request.name,
        team_name: request.team_name,
        hackathon_id: request.hackathon_id,
    };

    match state.project_service.create_project(command).await {
        Ok(result) => {
            let response = ProjectMapper::to_project_response(result);
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to create project: {}", e);
            let status = if e.to_string().contains("not found") {
                StatusCode::NOT_FOUND
            } else if e.to_string().contains("cannot be empty")
                || e.to_string().contains("cannot exceed")
            {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, e.to_string()).into_response()
        }
    }
}

/// Get a project with its hackathon and timeline
pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/projects/{}", project_id);

    match state.project_service.get_project_detail(&project_id).await {
        Ok(result) => {
            let response = ProjectMapper::to_detail_response(result);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to get project: {}", e);
            let status = if e.to_string().contains("not found") {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, e.to_string()).into_response()
        }
    }
}

/// Override a project's lifecycle status
pub async fn update_status(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Json(request): Json<UpdateProjectStatusRequest>,
) -> impl IntoResponse {
    info!(
        "PUT /api/projects/{}/status - request: {:?}",
        project_id, request
    );

    let command = UpdateStatusCommand {
        project_id,
        status: request.status,
    };

    match state.project_service.update_status(command).await {
        Ok(result) => {
            let response = ProjectMapper::to_project_response(result);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to update project status: {}", e);
            let status = if e.to_string().contains("not found") {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, e.to_string()).into_response()
        }
    }
}

/// Get a project's derived program timeline
pub async fn get_project_timeline(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/projects/{}/timeline", project_id);

    match state.project_service.get_project_detail(&project_id).await {
        Ok(result) => {
            let response = TimelineMapper::to_dto(result.timeline);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to get project timeline: {}", e);
            let status = if e.to_string().contains("not found") {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, e.to_string()).into_response()
        }
    }
}

/// Get a project's timeline with its six-week schedule
pub async fn get_project_schedule(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/projects/{}/schedule", project_id);

    match state.project_service.project_schedule(&project_id).await {
        Ok(result) => {
            let response = TimelineMapper::to_schedule_response(result);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to get project schedule: {}", e);
            let status = if e.to_string().contains("not found") {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, e.to_string()).into_response()
        }
    }
}
