use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::HoursError;

/// Canonical day of the week, serialized as its lowercase English name.
///
/// This identifier is the join key between a timestamp and the matching
/// [`DaySchedule`](crate::models::schedule::DaySchedule) entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in schedule order, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    /// Display label shown to tenants (pt-BR).
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Segunda-feira",
            Weekday::Tuesday => "Terça-feira",
            Weekday::Wednesday => "Quarta-feira",
            Weekday::Thursday => "Quinta-feira",
            Weekday::Friday => "Sexta-feira",
            Weekday::Saturday => "Sábado",
            Weekday::Sunday => "Domingo",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = HoursError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|day| day.as_str() == normalized)
            .ok_or_else(|| HoursError::Validation(format!("Unknown weekday: {}", s)))
    }
}
