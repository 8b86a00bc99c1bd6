//! Domain entity models and their validation rules.

pub mod hackathon;
pub mod payout;
pub mod progress;
pub mod project;
pub mod submission;
