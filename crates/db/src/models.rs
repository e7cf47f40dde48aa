use chrono::{DateTime, Utc};
use sqlx::{types::Json, FromRow};
use uuid::Uuid;
use workhours_core::WeeklySchedule;

#[derive(Debug, Clone, FromRow)]
pub struct DbWeeklySchedule {
    pub owner_kind: String,
    pub owner_id: Uuid,
    pub days: Json<WeeklySchedule>,
    pub updated_at: DateTime<Utc>,
}
