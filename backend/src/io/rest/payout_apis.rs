//! # REST API for Milestone Payouts
//!
//! Curator-side endpoints that record M1/M2 payments against a project
//! and list what has been paid so far.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tracing::{error, info};

use crate::domain::commands::payout::RecordPayoutCommand;
use crate::io::rest::mappers::payout_mapper::PayoutMapper;
use crate::AppState;
use shared::RecordPayoutRequest;

/// Create a router for the payout APIs
pub fn router() -> Router<AppState> {
    Router::new().route("/:project_id/payouts", get(list_payouts).post(record_payout))
}

/// Record a milestone payout for a project
pub async fn record_payout(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    Json(request): Json<RecordPayoutRequest>,
) -> impl IntoResponse {
    info!("POST /api/projects/{}/payouts", project_id);

    let command = RecordPayoutCommand {
        project_id,
        milestone: request.milestone,
        amount: request.amount,
        multisig_address: request.multisig_address,
        tx_hash: request.tx_hash,
    };

    match state.payout_service.record_payout(command).await {
        Ok(result) => {
            let response = PayoutMapper::to_record_response(result);
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to record payout: {}", e);
            let message = e.to_string();
            let status = if message.contains("not found") {
                StatusCode::NOT_FOUND
            } else if message.contains("must be positive")
                || message.contains("cannot be empty")
                || message.contains("cannot exceed")
            {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (status, message).into_response()
        }
    }
}

/// List a project's payouts with the running total
pub async fn list_payouts(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /api/projects/{}/payouts", project_id);

    match state.payout_service.list_payouts(&project_id).await {
        Ok(result) => {
            let response = PayoutMapper::to_list_response(result);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("Failed to list payouts: {}", e);
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
    use crate::domain::commands::project::CreateProjectCommand;
    use crate::storage::DbConnection;
    use shared::Milestone;
    use std::sync::Arc;

    async fn setup_test_app_state() -> AppState {
        let db = Arc::new(DbConnection::init_test().await.expect("init test db"));
        create_app_state(db)
    }

    async fn seed_project(app_state: &AppState) -> String {
        let project = app_state
            .project_service
            .create_project(CreateProjectCommand {
                name: "Bridge Monitor".to_string(),
                team_name: "Team Rocket".to_string(),
                hackathon_id: None,
            })
            .await
            .expect("seed project");
        project.project.id
    }

    #[tokio::test]
    async fn test_record_and_list_payouts_api() {
        let app_state = setup_test_app_state().await;
        let project_id = seed_project(&app_state).await;

        let request = RecordPayoutRequest {
            milestone: Milestone::M1,
            amount: 3000.0,
            multisig_address: "14GcE3YvC3YEF1bYxFHDoYntoeWSXWogLWyxcWLFB6QnjGUZ".to_string(),
            tx_hash: None,
        };
        let response = record_payout(
            State(app_state.clone()),
            Path(project_id.clone()),
            Json(request),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);

        let listed = list_payouts(State(app_state), Path(project_id))
            .await
            .into_response();
        assert_eq!(listed.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_record_payout_api_rejects_bad_amount() {
        let app_state = setup_test_app_state().await;
        let project_id = seed_project(&app_state).await;

        let request = RecordPayoutRequest {
            milestone: Milestone::M2,
            amount: 0.0,
            multisig_address: "14GcE3YvC3YEF1bYxFHDoYntoeWSXWogLWyxcWLFB6QnjGUZ".to_string(),
            tx_hash: None,
        };
        let response = record_payout(State(app_state), Path(project_id), Json(request))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_record_payout_api_unknown_project_is_404() {
        let app_state = setup_test_app_state().await;

        let request = RecordPayoutRequest {
            milestone: Milestone::M1,
            amount: 3000.0,
            multisig_address: "14GcE3YvC3YEF1bYxFHDoYntoeWSXWogLWyxcWLFB6QnjGUZ".to_string(),
            tx_hash: None,
        };
        let response = record_payout(
            State(app_state),
            Path("project::missing".to_string()),
            Json(request),
        )
        .await
        .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
