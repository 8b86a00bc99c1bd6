//! # REST API for the Program Timeline
//!
//! Direct calculator surface: derives a timeline from a raw end date
//! without touching any stored records.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use tracing::{error, info};

use crate::io::rest::mappers::timeline_mapper::TimelineMapper;
use crate::AppState;
use shared::TimelineQuery;

/// Derive a program timeline from an optional query-string end date
pub async fn get_timeline(
    State(state): State<AppState>,
    Query(query): Query<TimelineQuery>,
) -> impl IntoResponse {
    info!("GET /api/timeline - query: {:?}", query);

    match state
        .timeline_service
        .timeline_from_str(query.end_date.as_deref(), Utc::now())
    {
        Ok(timeline) => (StatusCode::OK, Json(TimelineMapper::to_dto(timeline))).into_response(),
        Err(e) => {
            error!("Failed to derive timeline: {}", e);
            (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()).into_response()
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
    async fn test_get_timeline_without_end_date_returns_fallback() {
        let app_state = setup_test_app_state().await;

        let response = get_timeline(State(app_state), Query(TimelineQuery::default()))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_timeline_rejects_malformed_end_date() {
        let app_state = setup_test_app_state().await;

        let query = TimelineQuery {
            end_date: Some("next thursday".to_string()),
        };
        let response = get_timeline(State(app_state), Query(query))
            .await
            .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
