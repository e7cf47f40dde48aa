//! # Workhours Core
//!
//! Domain types and pure logic for weekly business-hours schedules: the
//! schedule model, the validator applied before persistence, the
//! availability evaluator consulted by ticket auto-close and greeting
//! suppression, and the slot planner used for appointments.

pub mod errors;
pub mod evaluator;
pub mod models;
pub mod service;
pub mod slots;
pub mod store;
pub mod validator;

pub use errors::{HoursError, HoursResult};
pub use evaluator::{is_in_activity, is_in_activity_at, is_in_activity_now, Activity};
pub use models::{
    owner::{Owner, OwnerKind},
    schedule::{DaySchedule, WeeklySchedule},
    weekday::Weekday,
};
pub use store::ScheduleStore;
