//! Appointment slots derived from the open windows of a weekly schedule.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{HoursError, HoursResult},
    models::{schedule::WeeklySchedule, weekday::Weekday},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// Bookable slots of `slot_length` on `date`.
///
/// Slots are laid out back to back from the start of every open window and
/// must end no later than the window does, so none overlaps the lunch break.
pub fn available_slots(
    schedule: &WeeklySchedule,
    date: NaiveDate,
    slot_length: Duration,
) -> HoursResult<Vec<Slot>> {
    if slot_length <= Duration::zero() {
        return Err(HoursError::Validation(
            "Slot length must be positive".to_string(),
        ));
    }

    let Some(day) = schedule.day(Weekday::from(date.weekday())) else {
        return Ok(Vec::new());
    };

    let mut slots = Vec::new();
    for (window_start, window_end) in day.open_windows() {
        let mut cursor = window_start;
        loop {
            let (next, wrapped) = cursor.overflowing_add_signed(slot_length);
            if wrapped != 0 || next > window_end {
                break;
            }
            slots.push(Slot {
                start: cursor,
                end: next,
            });
            cursor = next;
        }
    }

    Ok(slots)
}
