//! Schedule operations shared by every caller of a [`ScheduleStore`].

use crate::{
    errors::{HoursError, HoursResult},
    models::{
        owner::Owner,
        schedule::{DaySchedule, WeeklySchedule},
    },
    store::ScheduleStore,
    validator,
};

/// Validates a proposed week and replaces the owner's stored schedule.
///
/// Weekdays left out of `days` are stored as closed. Nothing is written
/// when validation fails.
pub async fn update_schedules(
    store: &dyn ScheduleStore,
    owner: Owner,
    days: Vec<DaySchedule>,
) -> HoursResult<WeeklySchedule> {
    validator::validate_week(&days).map_err(HoursError::InvalidSchedule)?;

    let schedule = WeeklySchedule::new(days).normalized();
    store.save(owner, &schedule).await?;
    Ok(schedule)
}

/// Returns the owner's schedule, seeding the all-closed default first if
/// none is stored yet.
pub async fn ensure_schedule(store: &dyn ScheduleStore, owner: Owner) -> HoursResult<WeeklySchedule> {
    match store.load(owner).await {
        Ok(schedule) => Ok(schedule),
        Err(HoursError::NotFound(_)) => {
            let schedule = WeeklySchedule::default();
            store.save(owner, &schedule).await?;
            Ok(schedule)
        }
        Err(e) => Err(e),
    }
}
