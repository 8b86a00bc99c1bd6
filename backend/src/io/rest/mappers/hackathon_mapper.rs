use crate::domain::commands::hackathon::{CreateHackathonResult, HackathonListResult};
use crate::domain::models::hackathon::Hackathon;

pub struct HackathonMapper;

impl HackathonMapper {
    /// Convert a domain Hackathon to the shared DTO
    pub fn to_dto(hackathon: Hackathon) -> shared::Hackathon {
        shared::Hackathon {
            id: hackathon.id,
            name: hackathon.name,
            end_date: hackathon
                .end_date
                .map(|d| d.format("%Y-%m-%d").to_string()),
            created_at: hackathon.created_at.to_rfc3339(),
        }
    }

    /// Convert a create result to the shared response
    pub fn to_create_response(result: CreateHackathonResult) -> shared::HackathonResponse {
        shared::HackathonResponse {
            hackathon: Self::to_dto(result.hackathon),
            success_message: result.success_message,
        }
    }

    /// Convert a list result to the shared response
    pub fn to_list_response(result: HackathonListResult) -> shared::HackathonListResponse {
        shared::HackathonListResponse {
            hackathons: result.hackathons.into_iter().map(Self::to_dto).collect(),
        }
    }
}
