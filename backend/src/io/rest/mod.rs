//! # REST API Interface Layer
//!
//! Provides HTTP REST endpoints for the stadium backend.
//! This layer handles:
//! - HTTP request/response serialization and deserialization
//! - Error translation from domain to HTTP status codes
//! - CORS configuration for frontend integration
//! - Request logging and monitoring
//!
//! ## Key Responsibilities
//!
//! - **API Endpoints**: RESTful HTTP interfaces for all operations
//! - **Error Handling**: Converting domain errors to proper HTTP responses
//! - **Serialization**: JSON request/response handling
//! - **Window Translation**: Surfacing closed-window rejections as 403s
//! - **Logging**: Request/response logging for debugging and monitoring
//!
//! ## Design Principles
//!
//! - **REST Compliance**: Following RESTful design patterns
//! - **Error Transparency**: Clear error messages for debugging
//! - **Domain Separation**: Pure translation layer without business logic

// Module declarations
pub mod hackathon_apis;
pub mod mappers;
pub mod payout_apis;
pub mod project_apis;
pub mod submission_apis;
pub mod timeline_apis;
