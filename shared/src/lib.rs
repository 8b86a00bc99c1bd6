use serde::{Deserialize, Serialize};

/// Derived snapshot of where a project currently sits in the M2 accelerator
/// program. Computed fresh from the hackathon end date on every request and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramTimeline {
    /// Program week for display, clamped to [1, 7]. Week 1 begins the
    /// calendar day after the hackathon ends. 7 means the nominal six-week
    /// program is over and the project is in the extended/overdue state.
    pub current_week: u32,
    /// True while the roadmap is editable (weeks 1-4, the building phase).
    pub can_edit_roadmap: bool,
    /// True while the final deliverable may be submitted (weeks 5-6).
    pub can_submit: bool,
    /// True once the unclamped week number has passed 6.
    pub is_past_deadline: bool,
    /// Instant the submission window opens (end date + 28 days). RFC 3339.
    pub week5_open_date: String,
    /// Instant the submission window closes (end date + 42 days). RFC 3339.
    pub deadline_date: String,
    /// Whole days from now until the submission window opens, floored at 0.
    pub days_until_submission_opens: i64,
    /// Whole days from now until the deadline, floored at 0.
    pub days_until_deadline: i64,
}

/// Phase a program week belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekPhase {
    /// Weeks 1-4: teams build and may still edit their roadmap.
    Building,
    /// Weeks 5-6: the final deliverable submission window.
    Submission,
}

/// One 7-day block of the program calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramWeek {
    pub week: u32,
    pub phase: WeekPhase,
    pub starts_on: String, // ISO 8601 date format (YYYY-MM-DD)
    pub ends_on: String,   // ISO 8601 date format (YYYY-MM-DD)
    /// True when today falls inside this week's window.
    pub is_current: bool,
}

/// Response combining a project's timeline with its week-by-week calendar.
/// `weeks` is empty when the hackathon has no end date yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramScheduleResponse {
    pub timeline: ProgramTimeline,
    pub weeks: Vec<ProgramWeek>,
}

/// Coarse lifecycle state of a tracked project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Working through the program; the default state.
    Building,
    /// Final deliverable submitted, awaiting curator review.
    UnderReview,
    /// Review finished and milestone payouts recorded.
    Completed,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Building => "building",
            ProjectStatus::UnderReview => "under_review",
            ProjectStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<ProjectStatus> {
        match s {
            "building" => Some(ProjectStatus::Building),
            "under_review" => Some(ProjectStatus::UnderReview),
            "completed" => Some(ProjectStatus::Completed),
            _ => None,
        }
    }
}

/// Post-hackathon milestone a payout belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Milestone {
    /// Hackathon prize milestone.
    M1,
    /// Accelerator completion milestone.
    M2,
}

impl Milestone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Milestone::M1 => "m1",
            Milestone::M2 => "m2",
        }
    }

    pub fn from_str(s: &str) -> Option<Milestone> {
        match s {
            "m1" => Some(Milestone::M1),
            "m2" => Some(Milestone::M2),
            _ => None,
        }
    }
}

/// A hackathon whose finalists enter the accelerator program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hackathon {
    pub id: String,
    pub name: String,
    /// Last day of the hackathon; absent while the event is still being
    /// scheduled. ISO 8601 date format (YYYY-MM-DD).
    pub end_date: Option<String>,
    pub created_at: String, // RFC 3339 timestamp
}

/// A finalist team's project tracked through the program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    /// Hackathon this project came out of; timeline falls back to the
    /// "program not started" snapshot when absent.
    pub hackathon_id: Option<String>,
    pub name: String,
    pub team_name: String,
    pub status: ProjectStatus,
    /// Roadmap text (max 4096 characters), editable during weeks 1-4.
    pub roadmap: Option<String>,
    pub created_at: String, // RFC 3339 timestamp
    pub updated_at: String, // RFC 3339 timestamp
}

/// A weekly progress note posted by the team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub id: String,
    pub project_id: String,
    /// Program week the note was posted in, stamped by the backend.
    pub week: u32,
    pub body: String,
    pub created_at: String, // RFC 3339 timestamp
}

/// A final deliverable submission. Submissions are append-only; the newest
/// one is the effective deliverable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub project_id: String,
    /// Program week the submission landed in (5 or 6).
    pub week: u32,
    pub repo_url: String,
    pub demo_url: Option<String>,
    pub notes: Option<String>,
    pub submitted_at: String, // RFC 3339 timestamp
}

/// Bookkeeping record of an on-chain milestone payout. The transfer itself
/// happens outside this system; only the record is kept here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub id: String,
    pub project_id: String,
    pub milestone: Milestone,
    pub amount: f64,
    /// SS58 address of the curator multisig that sent the funds.
    pub multisig_address: String,
    /// On-chain transaction hash, once known.
    pub tx_hash: Option<String>,
    pub recorded_at: String, // RFC 3339 timestamp
}

/// Query parameters for the direct timeline endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TimelineQuery {
    /// Hackathon end date; absent yields the "program not started" timeline.
    pub end_date: Option<String>, // ISO 8601 date format (YYYY-MM-DD)
}

/// Request for creating a new hackathon
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateHackathonRequest {
    pub name: String,
    pub end_date: Option<String>, // ISO 8601 date format (YYYY-MM-DD)
}

/// Response after creating a hackathon
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HackathonResponse {
    pub hackathon: Hackathon,
    pub success_message: String,
}

/// Response containing all hackathons
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HackathonListResponse {
    pub hackathons: Vec<Hackathon>,
}

/// Request for registering a project into the program
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateProjectRequest {
    pub name: String,
    pub team_name: String,
    pub hackathon_id: Option<String>,
}

/// Response after creating or updating a project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectResponse {
    pub project: Project,
    pub success_message: String,
}

/// One row of the project dashboard: the project plus its derived timeline,
/// which drives the week counter and progress bars.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectSummary {
    pub project: Project,
    pub timeline: ProgramTimeline,
}

/// Response containing all tracked projects with their timelines
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectSummary>,
}

/// Response containing a single project with its hackathon and timeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectDetailResponse {
    pub project: Project,
    pub hackathon: Option<Hackathon>,
    pub timeline: ProgramTimeline,
}

/// Request for overriding a project's lifecycle status
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateProjectStatusRequest {
    pub status: ProjectStatus,
}

/// Request for replacing a project's roadmap (weeks 1-4 only)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateRoadmapRequest {
    pub roadmap: String,
}

/// Request for posting a weekly progress note
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordProgressRequest {
    pub body: String,
}

/// Response after posting a progress note
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressResponse {
    pub update: ProgressUpdate,
    pub success_message: String,
}

/// Response containing a project's progress notes, newest first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressListResponse {
    pub updates: Vec<ProgressUpdate>,
}

/// Request for submitting the final deliverable (weeks 5-6 only)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmitDeliverableRequest {
    pub repo_url: String,
    pub demo_url: Option<String>,
    pub notes: Option<String>,
}

/// Response after submitting the final deliverable
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionResponse {
    pub submission: Submission,
    pub success_message: String,
}

/// Response containing the effective (newest) submission, if any
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentSubmissionResponse {
    pub submission: Option<Submission>,
}

/// Request for recording a milestone payout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecordPayoutRequest {
    pub milestone: Milestone,
    pub amount: f64,
    pub multisig_address: String,
    pub tx_hash: Option<String>,
}

/// Response after recording a payout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayoutResponse {
    pub payout: Payout,
    pub success_message: String,
}

/// Response containing a project's payout records
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PayoutListResponse {
    pub payouts: Vec<Payout>,
    pub total_amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_status_round_trip() {
        for status in [
            ProjectStatus::Building,
            ProjectStatus::UnderReview,
            ProjectStatus::Completed,
        ] {
            assert_eq!(ProjectStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(ProjectStatus::from_str("reviewing"), None);
    }

    #[test]
    fn test_milestone_round_trip() {
        assert_eq!(Milestone::from_str("m1"), Some(Milestone::M1));
        assert_eq!(Milestone::from_str("m2"), Some(Milestone::M2));
        assert_eq!(Milestone::from_str("m3"), None);
        assert_eq!(Milestone::M2.as_str(), "m2");
    }

    #[test]
    fn test_enums_serialize_as_snake_case() {
        let json = serde_json::to_string(&ProjectStatus::UnderReview).expect("serialize");
        assert_eq!(json, "\"under_review\"");
        let json = serde_json::to_string(&Milestone::M1).expect("serialize");
        assert_eq!(json, "\"m1\"");
        let json = serde_json::to_string(&WeekPhase::Building).expect("serialize");
        assert_eq!(json, "\"building\"");
    }

    #[test]
    fn test_timeline_serializes_with_snake_case_fields() {
        let timeline = ProgramTimeline {
            current_week: 5,
            can_edit_roadmap: false,
            can_submit: true,
            is_past_deadline: false,
            week5_open_date: "2025-12-17T00:00:00+00:00".to_string(),
            deadline_date: "2025-12-31T00:00:00+00:00".to_string(),
            days_until_submission_opens: 0,
            days_until_deadline: 14,
        };

        let json = serde_json::to_string(&timeline).expect("serialize");
        assert!(json.contains("\"current_week\":5"));
        assert!(json.contains("\"can_submit\":true"));
        assert!(json.contains("\"days_until_deadline\":14"));

        let back: ProgramTimeline = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, timeline);
    }
}
