//! Program timeline domain logic.
//!
//! Everything the M2 accelerator derives from a hackathon end date lives
//! here: the week counter, the roadmap and submission window flags, and the
//! six-week schedule blocks. All calculations are pure functions of the end
//! date and an explicit `now`, so callers (and tests) control the clock.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use shared::WeekPhase;

/// Days after the hackathon end date at which the submission window opens
/// (start of week 5).
pub const SUBMISSION_OPENS_OFFSET_DAYS: i64 = 28;

/// Days after the hackathon end date at which the submission deadline falls
/// (end of week 6).
pub const DEADLINE_OFFSET_DAYS: i64 = 42;

/// Number of scheduled program weeks. Week 7 is the overdue bucket and has
/// no calendar block.
pub const PROGRAM_WEEKS: u32 = 6;

/// A point-in-time snapshot of where a team stands in the M2 program.
///
/// Derived on every read, never persisted. Week numbering starts at the
/// hackathon end date's midnight (UTC) and advances every seven days.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramTimeline {
    /// Display week, clamped to [1, 7]. 7 doubles as the overdue bucket.
    pub current_week: u32,
    /// True during weeks 1-4 (the building phase).
    pub can_edit_roadmap: bool,
    /// True during weeks 5-6 (the submission window).
    pub can_submit: bool,
    /// True once the unclamped week count passes 6.
    pub is_past_deadline: bool,
    /// Midnight UTC, 28 days after the end date.
    pub week5_open_date: DateTime<Utc>,
    /// Midnight UTC, 42 days after the end date.
    pub deadline_date: DateTime<Utc>,
    /// Whole days until the submission window opens, floored at 0.
    pub days_until_submission_opens: i64,
    /// Whole days until the submission deadline, floored at 0.
    pub days_until_deadline: i64,
}

/// One calendar block of the six-week program schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekWindow {
    pub week: u32,
    pub phase: WeekPhase,
    /// First calendar day (UTC) of the week.
    pub starts_on: NaiveDate,
    /// Last calendar day (UTC) of the week, inclusive.
    pub ends_on: NaiveDate,
    /// Whether `now` falls inside this week.
    pub is_current: bool,
}

/// Invalid timeline input.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum TimelineError {
    #[error("Unrecognized end date '{0}' (expected YYYY-MM-DD or an RFC 3339 timestamp)")]
    InvalidEndDate(String),
}

/// Timeline service that handles all program-clock business logic.
#[derive(Clone)]
pub struct TimelineService;

impl TimelineService {
    /// Create a new TimelineService instance
    pub fn new() -> Self {
        Self
    }

    /// Calculate the program timeline for a hackathon that ended on
    /// `end_date`, as seen at the instant `now`.
    ///
    /// A missing end date means the program has not started: the team is
    /// shown week 1 with the roadmap open, and the window dates are anchored
    /// at `now` instead of a real end date.
    pub fn calculate_timeline(
        &self,
        end_date: Option<NaiveDate>,
        now: DateTime<Utc>,
    ) -> ProgramTimeline {
        let Some(end) = end_date else {
            return ProgramTimeline {
                current_week: 1,
                can_edit_roadmap: true,
                can_submit: false,
                is_past_deadline: false,
                week5_open_date: now + Duration::days(SUBMISSION_OPENS_OFFSET_DAYS),
                deadline_date: now + Duration::days(DEADLINE_OFFSET_DAYS),
                days_until_submission_opens: SUBMISSION_OPENS_OFFSET_DAYS,
                days_until_deadline: DEADLINE_OFFSET_DAYS,
            };
        };

        let end_midnight = end.and_time(NaiveTime::MIN).and_utc();
        let week5_open_date = end_midnight + Duration::days(SUBMISSION_OPENS_OFFSET_DAYS);
        let deadline_date = end_midnight + Duration::days(DEADLINE_OFFSET_DAYS);

        let days_since_end = floor_days(now - end_midnight);
        // Negative while the hackathon is still upcoming, and keeps growing
        // past 7 once the program is over. The permission flags come from
        // this unclamped value; only the display week is clamped.
        let raw_week = days_since_end.div_euclid(7) + 1;

        ProgramTimeline {
            current_week: raw_week.clamp(1, 7) as u32,
            can_edit_roadmap: (1..=4).contains(&raw_week),
            can_submit: (5..=6).contains(&raw_week),
            is_past_deadline: raw_week > 6,
            week5_open_date,
            deadline_date,
            days_until_submission_opens: floor_days(week5_open_date - now).max(0),
            days_until_deadline: floor_days(deadline_date - now).max(0),
        }
    }

    /// Calculate the timeline from an end date that is still a string, as
    /// stored in the hackathon record or passed on a query string.
    pub fn timeline_from_str(
        &self,
        end_date: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<ProgramTimeline, TimelineError> {
        let parsed = match end_date {
            Some(raw) => Some(self.parse_end_date(raw)?),
            None => None,
        };
        Ok(self.calculate_timeline(parsed, now))
    }

    /// Parse an end date from its stored form. Accepts plain ISO calendar
    /// dates (`2025-11-19`) and RFC 3339 timestamps, whose calendar day is
    /// taken in UTC.
    pub fn parse_end_date(&self, raw: &str) -> Result<NaiveDate, TimelineError> {
        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Ok(date);
        }
        if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
            return Ok(timestamp.with_timezone(&Utc).date_naive());
        }
        Err(TimelineError::InvalidEndDate(raw.to_string()))
    }

    /// Generate the six calendar blocks of the program schedule.
    ///
    /// Week n covers the seven days starting `7 * (n - 1)` days after the
    /// end date, so the week 5 block begins exactly on the submission open
    /// date and the week 6 block ends the day before the deadline.
    pub fn program_schedule(&self, end_date: NaiveDate, now: DateTime<Utc>) -> Vec<WeekWindow> {
        let today = now.date_naive();

        (1..=PROGRAM_WEEKS)
            .map(|week| {
                let starts_on = end_date + Duration::days(7 * (week as i64 - 1));
                let ends_on = end_date + Duration::days(7 * week as i64 - 1);
                WeekWindow {
                    week,
                    phase: if week <= 4 {
                        WeekPhase::Building
                    } else {
                        WeekPhase::Submission
                    },
                    starts_on,
                    ends_on,
                    is_current: (starts_on..=ends_on).contains(&today),
                }
            })
            .collect()
    }
}

impl Default for TimelineService {
    fn default() -> Self {
        Self::new()
    }
}

/// Whole days in `delta`, rounded toward negative infinity. Matches how the
/// day counters behave around partial days on both sides of a boundary.
fn floor_days(delta: Duration) -> i64 {
    delta.num_milliseconds().div_euclid(86_400_000)
}
