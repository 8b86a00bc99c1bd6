//! # REST API for Hackathon Records
//!
//! Endpoints for registering and reading the hackathons that anchor
//! program timelines.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tracing::{error, info};

use crate::domain::commands::hackathon::CreateHackathonCommand;
use crate::io::rest::mappers::hackathon_mapper::HackathonMapper;
use crate::AppState;
use shared::CreateHackathonRequest;

/// Create a router for hackathon related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_hackathons).post(create_hackathon))
        .route("/:hackathon_id", get(get_hackathon))
}

/// List all hackathons
pub async fn list_hackathons(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/hackathons");

    match state.hackathon_service.list_hackathons().await {
        Ok(result) => {
            let response = HackathonMapper::to_list_response(result);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to list hackathons: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error listing hackathons").into_response()
        }
    }
}

/// Register a new hackathon
pub async fn create_hackathon(
    State(state): State<AppState>,
    Json(request): Json<CreateHackathonRequest>,
) -> impl IntoResponse {
    info!("POST /api/hackathons - request: {:?}", request);

    let command = CreateHackathonCommand {
        name: request.name,
        end_date: request.end_date,
    };

    match state.hackathon_service.create_hackathon(command).await {
        Ok(result) => {
            let response = HackathonMapper::to_create_response(result);
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to create hackathon: {}", e);
            let status = if e.to_string().contains("Unrecognized end date") {
                StatusCode::UNPROCESSABLE_ENTITY
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

/// Get a hackathon by ID
pub async fn get_hackathon(
    State(state): State<AppState>,
    Path(hackathon_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/hackathons/{}", hackathon_id);

    match state.hackathon_service.get_hackathon(&hackathon_id).await {
        Ok(hackathon) => {
            (StatusCode::OK, Json(HackathonMapper::to_dto(hackathon))).into_response()
        }
        Err(e) => {
            error!("Failed to get hackathon: {}", e);
            let status = if e.to_string().contains("not found") {
                StatusCode::NOT_FOUND
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, e.to_string()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_app_state;
    use crate::storage::DbConnection;
    use std::sync::Arc;

    async fn setup_test_app_state() -> AppState {
        let db = Arc::new(DbConnection::init_test().await.expect("init test db"));
        create_app_state(db)
    }

    #[tokio::test]
    async fn test_create_hackathon_api() {
        let app_state = setup_test_app_state().await;

        let request = CreateHackathonRequest {
            name: "Polkadot Winter Hackathon".to_string(),
            end_date: Some("2025-11-19".to_string()),
        };
        let response = create_hackathon(State(app_state), Json(request))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_create_hackathon_api_rejects_bad_date() {
        let app_state = setup_test_app_state().await;

        let request = CreateHackathonRequest {
            name: "Winter Hackathon".to_string(),
            end_date: Some("soon".to_string()),
        };
        let response = create_hackathon(State(app_state), Json(request))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_get_hackathon_api_unknown_id_is_404() {
        let app_state = setup_test_app_state().await;

        let response = get_hackathon(State(app_state), Path("hackathon::missing".to_string()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
