//! Mappers between the `shared` DTOs and the domain types.

pub mod hackathon_mapper;
pub mod payout_mapper;
pub mod project_mapper;
pub mod submission_mapper;
pub mod timeline_mapper;
