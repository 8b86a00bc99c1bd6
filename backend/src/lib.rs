//! # Stadium Backend
//!
//! Contains all non-UI logic for the Blockspace Stadium program tracker.
//!
//! This crate serves as the orchestration layer that brings together:
//! - **Domain**: Business logic for the program clock, windows, and records
//! - **Storage**: Data persistence mechanisms (SQLite database)
//! - **IO**: Interface layer that exposes functionality over HTTP
//!
//! The backend is designed to be UI-agnostic, meaning it could support
//! different frontend frameworks or even CLI interfaces without modification.
//!
//! ## Architecture
//!
//! The backend follows a layered architecture:
//! ```text
//! UI Layer (web frontend)
//!     ↓
//! IO Layer (REST API, handlers)
//!     ↓
//! Domain Layer (Business logic, services)
//!     ↓
//! Storage Layer (Database, persistence)
//! ```
//!
//! ## Key Responsibilities
//!
//! - Initialize and configure the application state
//! - Set up the REST API router with proper CORS configuration
//! - Coordinate between domain logic and data persistence
//! - Provide a clean separation of concerns for maintainability

pub mod domain;
pub mod io;
pub mod storage;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use anyhow::Result;
use tracing::info;

use crate::domain::{
    HackathonService, PayoutService, ProjectService, SubmissionService, TimelineService,
};
use crate::storage::DbConnection;

pub use domain::*;
pub use io::*;
pub use storage::*;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub timeline_service: TimelineService,
    pub hackathon_service: HackathonService,
    pub project_service: ProjectService,
    pub submission_service: SubmissionService,
    pub payout_service: PayoutService,
}

/// Wire up all services against an initialized database connection
pub fn create_app_state(db: Arc<DbConnection>) -> AppState {
    let timeline_service = TimelineService::new();
    let hackathon_service = HackathonService::new(db.clone(), timeline_service.clone());
    let project_service = ProjectService::new(db.clone(), timeline_service.clone());
    let submission_service = SubmissionService::new(db.clone(), project_service.clone());
    let payout_service = PayoutService::new(db, project_service.clone());

    AppState {
        timeline_service,
        hackathon_service,
        project_service,
        submission_service,
        payout_service,
    }
}

/// Initialize the backend with all required services
pub async fn initialize_backend() -> Result<AppState> {
    info!("Setting up database");
    let db_conn = Arc::new(DbConnection::init().await?);

    info!("Setting up application state");
    Ok(create_app_state(db_conn))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // CORS setup to allow frontend to make requests
    let cors = CorsLayer::new()
        .allow_origin("http://localhost:8080".parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    // Set up our application routes
    let api_routes = Router::new()
        .route("/timeline", get(io::rest::timeline_apis::get_timeline))
        .nest("/hackathons", io::rest::hackathon_apis::router())
        .nest(
            "/projects",
            io::rest::project_apis::router()
                .merge(io::rest::submission_apis::router())
                .merge(io::rest::payout_apis::router()),
        );

    // Define our main application router
    Router::new()
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(app_state)
}
