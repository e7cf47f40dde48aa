use async_trait::async_trait;

use crate::{
    errors::HoursResult,
    models::{owner::Owner, schedule::WeeklySchedule},
};

/// Durable storage for weekly schedules, keyed by owner.
///
/// A schedule is always loaded and replaced as a whole; there are no
/// per-day updates. Implementations report a missing schedule as
/// [`HoursError::NotFound`](crate::errors::HoursError::NotFound).
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    async fn load(&self, owner: Owner) -> HoursResult<WeeklySchedule>;

    async fn save(&self, owner: Owner, schedule: &WeeklySchedule) -> HoursResult<()>;

    /// Removes the schedule together with its owner. Deleting a missing
    /// schedule is not an error.
    async fn delete(&self, owner: Owner) -> HoursResult<()>;
}
