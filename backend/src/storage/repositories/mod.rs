//! Per-entity SQLite repositories.

pub mod hackathon_repository;
pub mod payout_repository;
pub mod progress_repository;
pub mod project_repository;
pub mod submission_repository;

pub use hackathon_repository::HackathonRepository;
pub use payout_repository::PayoutRepository;
pub use progress_repository::ProgressRepository;
pub use project_repository::ProjectRepository;
pub use submission_repository::SubmissionRepository;
