//! # Domain Module
//!
//! Contains all business logic for the accelerator program tracker.
//!
//! This module encapsulates the entities and services that define how the
//! six-week M2 program is modeled: the program clock derived from a
//! hackathon end date, the records kept for each finalist project, and the
//! window rules gating what teams can do when. It operates independently of
//! any specific UI framework or storage mechanism.
//!
//! ## Module Organization
//!
//! - **timeline**: The program clock: week counting, window flags, and the
//!   six-week schedule, all pure functions of an end date and `now`
//! - **hackathon_service**: Hackathon records that anchor every timeline
//! - **project_service**: Project registration, dashboards, and timeline
//!   derivation
//! - **submission_service**: The window-gated team actions (roadmap edits,
//!   progress notes, deliverable submission)
//! - **payout_service**: Milestone payout bookkeeping
//!
//! ## Business Rules
//!
//! - Week 1 starts at the hackathon end date's midnight (UTC); weeks
//!   advance every seven days
//! - Roadmaps are editable during weeks 1-4; deliverables are accepted
//!   during weeks 5-6; past week 6 the program is over
//! - Projects without a dated hackathon run on the "program not started"
//!   fallback timeline
//! - Timelines are derived snapshots, recomputed per read and never stored

pub mod commands;
pub mod hackathon_service;
pub mod models;
pub mod payout_service;
pub mod project_service;
pub mod submission_service;
pub mod timeline;

pub use hackathon_service::*;
pub use payout_service::*;
pub use project_service::*;
pub use submission_service::*;
pub use timeline::*;
