use async_trait::async_trait;
use workhours_core::{HoursError, HoursResult, Owner, ScheduleStore, WeeklySchedule};

use crate::{repositories::schedule as repo, DbPool};

/// [`ScheduleStore`] backed by the `weekly_schedules` table.
#[derive(Debug, Clone)]
pub struct PgScheduleStore {
    pool: DbPool,
}

impl PgScheduleStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ScheduleStore for PgScheduleStore {
    async fn load(&self, owner: Owner) -> HoursResult<WeeklySchedule> {
        let row = repo::get_schedule_by_owner(&self.pool, owner)
            .await?
            .ok_or_else(|| HoursError::NotFound(format!("Schedule for {} not found", owner)))?;

        Ok(row.days.0)
    }

    async fn save(&self, owner: Owner, schedule: &WeeklySchedule) -> HoursResult<()> {
        let saved = repo::upsert_schedule(&self.pool, owner, schedule).await?;
        tracing::info!("Schedule saved: owner={}, updated_at={}", owner, saved.updated_at);
        Ok(())
    }

    async fn delete(&self, owner: Owner) -> HoursResult<()> {
        repo::delete_schedule_by_owner(&self.pool, owner).await?;
        tracing::info!("Schedule deleted: owner={}", owner);
        Ok(())
    }
}
