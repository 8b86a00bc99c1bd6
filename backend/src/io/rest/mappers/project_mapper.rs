use crate::domain::commands::project::{
    ProjectDetailResult, ProjectListResult, ProjectOverview, ProjectResult,
};
use crate::domain::models::project::Project;
use crate::io::rest::mappers::hackathon_mapper::HackathonMapper;
use crate::io::rest::mappers::timeline_mapper::TimelineMapper;

pub struct ProjectMapper;

impl ProjectMapper {
    /// Convert a domain Project to the shared DTO
    pub fn to_dto(project: Project) -> shared::Project {
        shared::Project {
            id: project.id,
            hackathon_id: project.hackathon_id,
            name: project.name,
            team_name: project.team_name,
            status: project.status,
            roadmap: project.roadmap,
            created_at: project.created_at.to_rfc3339(),
            updated_at: project.updated_at.to_rfc3339(),
        }
    }

    /// Convert a create/update result to the shared response
    pub fn to_project_response(result: ProjectResult) -> shared::ProjectResponse {
        shared::ProjectResponse {
            project: Self::to_dto(result.project),
            success_message: result.success_message,
        }
    }

    /// Convert one dashboard row to the shared summary
    pub fn to_summary(overview: ProjectOverview) -> shared::ProjectSummary {
        shared::ProjectSummary {
            project: Self::to_dto(overview.project),
            timeline: TimelineMapper::to_dto(overview.timeline),
        }
    }

    /// Convert a list result to the shared response
    pub fn to_list_response(result: ProjectListResult) -> shared::ProjectListResponse {
        shared::ProjectListResponse {
            projects: result.projects.into_iter().map(Self::to_summary).collect(),
        }
    }

    /// Convert a detail result to the shared response
    pub fn to_detail_response(result: ProjectDetailResult) -> shared::ProjectDetailResponse {
        shared::ProjectDetailResponse {
            project: Self::to_dto(result.project),
            hackathon: result.hackathon.map(HackathonMapper::to_dto),
            timeline: TimelineMapper::to_dto(result.timeline),
        }
    }
}
