//! Checks applied to a proposed schedule update before it is persisted.
//!
//! Validation is deliberately narrow. Days without both opening and closing
//! times are not checked at all, `start_time < end_time` is not enforced, and
//! the lunch break does not have to sit inside the opening hours. Errors are
//! collected across every day so callers can report them in one pass.

use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};

use crate::models::{
    schedule::{parse_wall_clock, present, DaySchedule},
    weekday::Weekday,
};

/// Time field of a [`DaySchedule`], named as on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimeField {
    StartTime,
    EndTime,
    StartLunchTime,
    EndLunchTime,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TimeField::StartTime => "startTime",
            TimeField::EndTime => "endTime",
            TimeField::StartLunchTime => "startLunchTime",
            TimeField::EndLunchTime => "endLunchTime",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// Lunch starts after it ends.
    LunchOrder { start: String, end: String },
    /// Only one of the two lunch fields is set.
    IncompleteLunch,
    /// A time is not `HH:mm`.
    MalformedTime { field: TimeField, value: String },
    /// The weekday appears more than once in the week.
    DuplicateWeekday,
}

/// A problem with one weekday of a proposed schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub weekday: Weekday,
    #[serde(flatten)]
    pub kind: ValidationErrorKind,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValidationErrorKind::LunchOrder { start, end } => write!(
                f,
                "{}: lunch start {} is after lunch end {}",
                self.weekday, start, end
            ),
            ValidationErrorKind::IncompleteLunch => write!(
                f,
                "{}: startLunchTime and endLunchTime must be set together",
                self.weekday
            ),
            ValidationErrorKind::MalformedTime { field, value } => write!(
                f,
                "{}: {} '{}' is not a valid HH:mm time",
                self.weekday, field, value
            ),
            ValidationErrorKind::DuplicateWeekday => {
                write!(f, "{}: weekday configured more than once", self.weekday)
            }
        }
    }
}

/// Validates each day of a proposed schedule.
pub fn validate(days: &[DaySchedule]) -> Result<(), Vec<ValidationError>> {
    into_result(days.iter().flat_map(validate_day).collect())
}

/// Rejects weeks that configure the same weekday twice.
pub fn check_week(days: &[DaySchedule]) -> Result<(), Vec<ValidationError>> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let errors = days
        .iter()
        .filter(|day| !seen.insert(day.weekday_en))
        .filter(|day| reported.insert(day.weekday_en))
        .map(|day| ValidationError {
            weekday: day.weekday_en,
            kind: ValidationErrorKind::DuplicateWeekday,
        })
        .collect();
    into_result(errors)
}

/// Runs [`check_week`] and [`validate`], reporting the errors of both.
pub fn validate_week(days: &[DaySchedule]) -> Result<(), Vec<ValidationError>> {
    let mut errors = check_week(days).err().unwrap_or_default();
    errors.extend(validate(days).err().unwrap_or_default());
    into_result(errors)
}

fn validate_day(day: &DaySchedule) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if day.opening_hours().is_none() {
        return errors;
    }

    let error = |kind: ValidationErrorKind| ValidationError {
        weekday: day.weekday_en,
        kind,
    };

    let fields = [
        (TimeField::StartTime, &day.start_time),
        (TimeField::EndTime, &day.end_time),
        (TimeField::StartLunchTime, &day.start_lunch_time),
        (TimeField::EndLunchTime, &day.end_lunch_time),
    ];
    for (field, value) in fields {
        if let Some(value) = present(value) {
            if parse_wall_clock(value).is_none() {
                errors.push(error(ValidationErrorKind::MalformedTime {
                    field,
                    value: value.to_string(),
                }));
            }
        }
    }

    match (present(&day.start_lunch_time), present(&day.end_lunch_time)) {
        (Some(start), Some(end)) => {
            if let (Some(parsed_start), Some(parsed_end)) =
                (parse_wall_clock(start), parse_wall_clock(end))
            {
                if parsed_start > parsed_end {
                    errors.push(error(ValidationErrorKind::LunchOrder {
                        start: start.to_string(),
                        end: end.to_string(),
                    }));
                }
            }
        }
        (None, None) => {}
        _ => errors.push(error(ValidationErrorKind::IncompleteLunch)),
    }

    errors
}

fn into_result(errors: Vec<ValidationError>) -> Result<(), Vec<ValidationError>> {
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
