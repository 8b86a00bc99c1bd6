//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod hackathon {
    use crate::domain::models::hackathon::Hackathon;

    /// Input for registering a hackathon.
    #[derive(Debug, Clone)]
    pub struct CreateHackathonCommand {
        pub name: String,
        /// End date as submitted, still unparsed. May legitimately be absent
        /// while the event is being scheduled.
        pub end_date: Option<String>,
    }

    /// Result of registering a hackathon.
    #[derive(Debug, Clone)]
    pub struct CreateHackathonResult {
        pub hackathon: Hackathon,
        pub success_message: String,
    }

    /// Result of listing hackathons.
    #[derive(Debug, Clone)]
    pub struct HackathonListResult {
        pub hackathons: Vec<Hackathon>,
    }
}

pub mod project {
    use crate::domain::models::hackathon::Hackathon;
    use crate::domain::models::project::Project;
    use crate::domain::timeline::{ProgramTimeline, WeekWindow};

    /// Input for registering a finalist project.
    #[derive(Debug, Clone)]
    pub struct CreateProjectCommand {
        pub name: String,
        pub team_name: String,
        pub hackathon_id: Option<String>,
    }

    /// Input for overriding a project's lifecycle status.
    #[derive(Debug, Clone)]
    pub struct UpdateStatusCommand {
        pub project_id: String,
        pub status: shared::ProjectStatus,
    }

    /// Result of registering or updating a project.
    #[derive(Debug, Clone)]
    pub struct ProjectResult {
        pub project: Project,
        pub success_message: String,
    }

    /// One dashboard row: a project plus its derived timeline.
    #[derive(Debug, Clone)]
    pub struct ProjectOverview {
        pub project: Project,
        pub timeline: ProgramTimeline,
    }

    /// Result of listing projects.
    #[derive(Debug, Clone)]
    pub struct ProjectListResult {
        pub projects: Vec<ProjectOverview>,
    }

    /// Result of fetching one project in full.
    #[derive(Debug, Clone)]
    pub struct ProjectDetailResult {
        pub project: Project,
        pub hackathon: Option<Hackathon>,
        pub timeline: ProgramTimeline,
    }

    /// Result of fetching a project's program schedule. `weeks` is empty
    /// until the linked hackathon has an end date.
    #[derive(Debug, Clone)]
    pub struct ProjectScheduleResult {
        pub timeline: ProgramTimeline,
        pub weeks: Vec<WeekWindow>,
    }
}

pub mod progress {
    use crate::domain::models::progress::ProgressUpdate;

    /// Input for posting a weekly progress note.
    #[derive(Debug, Clone)]
    pub struct RecordProgressCommand {
        pub project_id: String,
        pub body: String,
    }

    /// Result of posting a progress note.
    #[derive(Debug, Clone)]
    pub struct RecordProgressResult {
        pub update: ProgressUpdate,
        pub success_message: String,
    }

    /// Result of listing a project's progress notes, newest first.
    #[derive(Debug, Clone)]
    pub struct ProgressListResult {
        pub updates: Vec<ProgressUpdate>,
    }
}

pub mod submission {
    use crate::domain::models::project::Project;
    use crate::domain::models::submission::Submission;

    /// Input for replacing a project's roadmap.
    #[derive(Debug, Clone)]
    pub struct UpdateRoadmapCommand {
        pub project_id: String,
        pub roadmap: String,
    }

    /// Input for submitting the final deliverable.
    #[derive(Debug, Clone)]
    pub struct SubmitDeliverableCommand {
        pub project_id: String,
        pub repo_url: String,
        pub demo_url: Option<String>,
        pub notes: Option<String>,
    }

    /// Result of submitting the final deliverable. Carries the project back
    /// because a first submission moves it to under review.
    #[derive(Debug, Clone)]
    pub struct SubmitDeliverableResult {
        pub submission: Submission,
        pub project: Project,
        pub success_message: String,
    }

    /// Result of fetching the effective (newest) submission.
    #[derive(Debug, Clone)]
    pub struct CurrentSubmissionResult {
        pub submission: Option<Submission>,
    }
}

pub mod payout {
    use crate::domain::models::payout::Payout;

    /// Input for recording a milestone payout.
    #[derive(Debug, Clone)]
    pub struct RecordPayoutCommand {
        pub project_id: String,
        pub milestone: shared::Milestone,
        pub amount: f64,
        pub multisig_address: String,
        pub tx_hash: Option<String>,
    }

    /// Result of recording a payout.
    #[derive(Debug, Clone)]
    pub struct RecordPayoutResult {
        pub payout: Payout,
        pub success_message: String,
    }

    /// Result of listing a project's payouts.
    #[derive(Debug, Clone)]
    pub struct PayoutListResult {
        pub payouts: Vec<Payout>,
        pub total_amount: f64,
    }
}
