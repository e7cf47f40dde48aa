use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::{models::weekday::Weekday, slots::Slot, validator::ValidationError};

/// Opening hours for a single weekday.
///
/// All times are local wall-clock `HH:mm` strings. A missing (or empty)
/// `start_time`/`end_time` means the day is closed. The lunch fields carve a
/// closed sub-interval out of an otherwise open day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    #[serde(default)]
    pub weekday: String,
    pub weekday_en: Weekday,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_lunch_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_lunch_time: Option<String>,
}

impl DaySchedule {
    pub fn closed(weekday: Weekday) -> Self {
        Self {
            weekday: weekday.label().to_string(),
            weekday_en: weekday,
            start_time: None,
            end_time: None,
            start_lunch_time: None,
            end_lunch_time: None,
        }
    }

    pub fn open(weekday: Weekday, start: &str, end: &str) -> Self {
        Self {
            start_time: Some(start.to_string()),
            end_time: Some(end.to_string()),
            ..Self::closed(weekday)
        }
    }

    pub fn with_lunch(mut self, start: &str, end: &str) -> Self {
        self.start_lunch_time = Some(start.to_string());
        self.end_lunch_time = Some(end.to_string());
        self
    }

    /// Raw open/close pair, when both are set.
    pub fn opening_hours(&self) -> Option<(&str, &str)> {
        Some((present(&self.start_time)?, present(&self.end_time)?))
    }

    /// Raw lunch pair, when both are set. A half-set lunch counts as no lunch.
    pub fn lunch_break(&self) -> Option<(&str, &str)> {
        Some((
            present(&self.start_lunch_time)?,
            present(&self.end_lunch_time)?,
        ))
    }

    /// Open intervals of the day once the lunch carve-out is subtracted.
    ///
    /// Closed days, unparseable opening hours and `start > end` yield no
    /// windows. A lunch lying outside the open interval removes nothing, an
    /// overlapping one clips it. An unparseable lunch closes the day.
    ///
    /// Windows are boundary pairs for slot planning: the afternoon window
    /// starts at the lunch end, so a slot may begin at `13:00` after a
    /// `12:00`-`13:00` lunch even though [`crate::is_in_activity`] treats
    /// the `13:00` instant itself as lunch.
    pub fn open_windows(&self) -> Vec<(NaiveTime, NaiveTime)> {
        let Some((start, end)) = self
            .opening_hours()
            .and_then(|(start, end)| Some((parse_wall_clock(start)?, parse_wall_clock(end)?)))
        else {
            return Vec::new();
        };
        if start > end {
            return Vec::new();
        }

        let Some((lunch_start, lunch_end)) = self.lunch_break() else {
            return vec![(start, end)];
        };
        let (Some(lunch_start), Some(lunch_end)) =
            (parse_wall_clock(lunch_start), parse_wall_clock(lunch_end))
        else {
            return Vec::new();
        };
        if lunch_start > lunch_end || lunch_end <= start || lunch_start >= end {
            return vec![(start, end)];
        }

        let mut windows = Vec::with_capacity(2);
        if start < lunch_start {
            windows.push((start, lunch_start));
        }
        if lunch_end < end {
            windows.push((lunch_end, end));
        }
        windows
    }
}

/// Weekly schedule of a single owner.
///
/// Serialized as a bare JSON array of [`DaySchedule`] entries. Persisted
/// schedules hold exactly one entry per weekday, see [`WeeklySchedule::normalized`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule {
    days: Vec<DaySchedule>,
}

impl WeeklySchedule {
    pub fn new(days: Vec<DaySchedule>) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[DaySchedule] {
        &self.days
    }

    /// First entry configured for `weekday`.
    pub fn day(&self, weekday: Weekday) -> Option<&DaySchedule> {
        self.days.iter().find(|day| day.weekday_en == weekday)
    }

    /// True when every weekday appears exactly once.
    pub fn is_complete(&self) -> bool {
        self.days.len() == Weekday::ALL.len()
            && Weekday::ALL
                .iter()
                .all(|weekday| self.days.iter().filter(|d| d.weekday_en == *weekday).count() == 1)
    }

    /// Seven entries in Monday..Sunday order.
    ///
    /// The first entry per weekday wins; missing weekdays are filled in as
    /// closed and blank labels take the default label.
    pub fn normalized(self) -> Self {
        let mut days = self.days;
        let normalized = Weekday::ALL
            .iter()
            .map(|weekday| {
                match days.iter().position(|day| day.weekday_en == *weekday) {
                    Some(index) => {
                        let mut day = days.remove(index);
                        if day.weekday.trim().is_empty() {
                            day.weekday = weekday.label().to_string();
                        }
                        day
                    }
                    None => DaySchedule::closed(*weekday),
                }
            })
            .collect();
        Self { days: normalized }
    }
}

/// The schedule seeded for a newly created company or queue: every day closed.
impl Default for WeeklySchedule {
    fn default() -> Self {
        Self {
            days: Weekday::ALL.iter().copied().map(DaySchedule::closed).collect(),
        }
    }
}

/// Parses a wall-clock time as `HH:mm`, also accepting `HH:mm:ss`.
pub fn parse_wall_clock(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

// Empty strings are how unset times are stored.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSchedulesRequest {
    pub schedules: Vec<DaySchedule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateSchedulesResponse {
    pub valid: bool,
    pub errors: Vec<ValidationError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotsResponse {
    pub date: NaiveDate,
    pub slots: Vec<Slot>,
}
