//! # Availability Evaluator
//!
//! Decides whether an owner is "in activity" (inside business hours) at a
//! given local wall-clock instant. Both bounds of the opening hours and of
//! the lunch break are inclusive.
//!
//! The evaluator never fails. A day that is missing, closed, or whose times
//! cannot be parsed is reported as not in activity, so a misconfigured
//! schedule behaves as permanently closed.

use chrono::{DateTime, Datelike, Local, NaiveDateTime, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::models::{
    schedule::{parse_wall_clock, DaySchedule, WeeklySchedule},
    weekday::Weekday,
};

/// Outcome of an availability check.
///
/// `current_day` is the schedule entry matched for `weekday`, if any. A
/// missing entry and a closed day both report `in_activity == false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub in_activity: bool,
    pub current_day: Option<DaySchedule>,
    pub weekday: Weekday,
}

/// Evaluates `schedule` at the local wall-clock instant `now`.
pub fn is_in_activity(schedule: &WeeklySchedule, now: NaiveDateTime) -> Activity {
    let weekday = Weekday::from(now.weekday());
    let current_day = schedule.day(weekday).cloned();
    let in_activity = current_day
        .as_ref()
        .is_some_and(|day| is_open_at(day, now.time()));

    Activity {
        in_activity,
        current_day,
        weekday,
    }
}

/// Evaluates `schedule` at the wall-clock time `now` shows in its own zone.
pub fn is_in_activity_at<Tz: TimeZone>(
    schedule: &WeeklySchedule,
    now: &DateTime<Tz>,
) -> Activity {
    is_in_activity(schedule, now.naive_local())
}

/// Evaluates `schedule` against the server's local clock.
pub fn is_in_activity_now(schedule: &WeeklySchedule) -> Activity {
    is_in_activity(schedule, Local::now().naive_local())
}

fn is_open_at(day: &DaySchedule, at: NaiveTime) -> bool {
    let Some((start, end)) = day.opening_hours() else {
        return false;
    };
    if !contains(start, end, at).unwrap_or(false) {
        return false;
    }

    match day.lunch_break() {
        // An unparseable lunch fails closed.
        Some((lunch_start, lunch_end)) => contains(lunch_start, lunch_end, at) == Some(false),
        None => true,
    }
}

/// `None` when either bound does not parse.
fn contains(start: &str, end: &str, at: NaiveTime) -> Option<bool> {
    let start = parse_wall_clock(start)?;
    let end = parse_wall_clock(end)?;
    Some(start <= at && at <= end)
}
