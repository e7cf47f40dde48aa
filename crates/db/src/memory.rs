use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use workhours_core::{HoursError, HoursResult, Owner, ScheduleStore, WeeklySchedule};

/// Process-local [`ScheduleStore`] for tests and database-less runs.
#[derive(Debug, Default)]
pub struct InMemoryScheduleStore {
    schedules: RwLock<HashMap<Owner, WeeklySchedule>>,
}

impl InMemoryScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.schedules.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.schedules.read().await.is_empty()
    }
}

#[async_trait]
impl ScheduleStore for InMemoryScheduleStore {
    async fn load(&self, owner: Owner) -> HoursResult<WeeklySchedule> {
        self.schedules
            .read()
            .await
            .get(&owner)
            .cloned()
            .ok_or_else(|| HoursError::NotFound(format!("Schedule for {} not found", owner)))
    }

    async fn save(&self, owner: Owner, schedule: &WeeklySchedule) -> HoursResult<()> {
        tracing::debug!("Saving schedule in memory: owner={}", owner);
        self.schedules.write().await.insert(owner, schedule.clone());
        Ok(())
    }

    async fn delete(&self, owner: Owner) -> HoursResult<()> {
        self.schedules.write().await.remove(&owner);
        Ok(())
    }
}
