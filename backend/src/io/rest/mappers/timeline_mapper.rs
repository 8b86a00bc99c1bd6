use crate::domain::commands::project::ProjectScheduleResult;
use crate::domain::timeline::{ProgramTimeline, WeekWindow};

pub struct TimelineMapper;

impl TimelineMapper {
    /// Convert a domain ProgramTimeline to the shared DTO
    pub fn to_dto(timeline: ProgramTimeline) -> shared::ProgramTimeline {
        shared::ProgramTimeline {
            current_week: timeline.current_week,
            can_edit_roadmap: timeline.can_edit_roadmap,
            can_submit: timeline.can_submit,
            is_past_deadline: timeline.is_past_deadline,
            week5_open_date: timeline.week5_open_date.to_rfc3339(),
            deadline_date: timeline.deadline_date.to_rfc3339(),
            days_until_submission_opens: timeline.days_until_submission_opens,
            days_until_deadline: timeline.days_until_deadline,
        }
    }

    /// Convert a domain WeekWindow to the shared DTO
    pub fn week_to_dto(window: WeekWindow) -> shared::ProgramWeek {
        shared::ProgramWeek {
            week: window.week,
            phase: window.phase,
            starts_on: window.starts_on.format("%Y-%m-%d").to_string(),
            ends_on: window.ends_on.format("%Y-%m-%d").to_string(),
            is_current: window.is_current,
        }
    }

    /// Convert a schedule result to the shared response
    pub fn to_schedule_response(result: ProjectScheduleResult) -> shared::ProgramScheduleResponse {
        shared::ProgramScheduleResponse {
            timeline: Self::to_dto(result.timeline),
            weeks: result.weeks.into_iter().map(Self::week_to_dto).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn test_timeline_dto_formats_dates_as_rfc3339() {
        let timeline = ProgramTimeline {
            current_week: 5,
            can_edit_roadmap: false,
            can_submit: true,
            is_past_deadline: false,
            week5_open_date: Utc.with_ymd_and_hms(2025, 12, 17, 0, 0, 0).unwrap(),
            deadline_date: Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap(),
            days_until_submission_opens: 0,
            days_until_deadline: 14,
        };

        let dto = TimelineMapper::to_dto(timeline);
        assert_eq!(dto.week5_open_date, "2025-12-17T00:00:00+00:00");
        assert_eq!(dto.deadline_date, "2025-12-31T00:00:00+00:00");
        assert_eq!(dto.current_week, 5);
    }

    #[test]
    fn test_week_dto_formats_dates_as_calendar_days() {
        let window = WeekWindow {
            week: 5,
            phase: shared::WeekPhase::Submission,
            starts_on: NaiveDate::from_ymd_opt(2025, 12, 17).unwrap(),
            ends_on: NaiveDate::from_ymd_opt(2025, 12, 23).unwrap(),
            is_current: true,
        };

        let dto = TimelineMapper::week_to_dto(window);
        assert_eq!(dto.starts_on, "2025-12-17");
        assert_eq!(dto.ends_on, "2025-12-23");
        assert_eq!(dto.phase, shared::WeekPhase::Submission);
    }
}
