use async_trait::async_trait;
use mockall::mock;
use workhours_core::{HoursResult, Owner, ScheduleStore, WeeklySchedule};

// Mock store for testing
mock! {
    pub ScheduleRepo {}

    #[async_trait]
    impl ScheduleStore for ScheduleRepo {
        async fn load(&self, owner: Owner) -> HoursResult<WeeklySchedule>;

        async fn save(&self, owner: Owner, schedule: &WeeklySchedule) -> HoursResult<()>;

        async fn delete(&self, owner: Owner) -> HoursResult<()>;
    }
}
