use crate::models::DbWeeklySchedule;
use chrono::Utc;
use eyre::Result;
use sqlx::{types::Json, Pool, Postgres};
use workhours_core::{Owner, WeeklySchedule};

pub async fn get_schedule_by_owner(
    pool: &Pool<Postgres>,
    owner: Owner,
) -> Result<Option<DbWeeklySchedule>> {
    tracing::debug!("Getting schedule for owner: {}", owner);

    let schedule = sqlx::query_as::<_, DbWeeklySchedule>(
        r#"
        SELECT owner_kind, owner_id, days, updated_at
        FROM weekly_schedules
        WHERE owner_kind = $1 AND owner_id = $2
        "#,
    )
    .bind(owner.kind.as_str())
    .bind(owner.id)
    .fetch_optional(pool)
    .await?;

    if schedule.is_none() {
        tracing::debug!("Schedule not found: owner={}", owner);
    }

    Ok(schedule)
}

/// Inserts or replaces the whole week stored for `owner`.
pub async fn upsert_schedule(
    pool: &Pool<Postgres>,
    owner: Owner,
    schedule: &WeeklySchedule,
) -> Result<DbWeeklySchedule> {
    let now = Utc::now();

    tracing::debug!(
        "Saving schedule: owner={}, days={}",
        owner,
        schedule.days().len()
    );

    let saved = sqlx::query_as::<_, DbWeeklySchedule>(
        r#"
        INSERT INTO weekly_schedules (owner_kind, owner_id, days, updated_at)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (owner_kind, owner_id)
        DO UPDATE SET days = EXCLUDED.days, updated_at = EXCLUDED.updated_at
        RETURNING owner_kind, owner_id, days, updated_at
        "#,
    )
    .bind(owner.kind.as_str())
    .bind(owner.id)
    .bind(Json(schedule))
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(saved)
}

pub async fn delete_schedule_by_owner(pool: &Pool<Postgres>, owner: Owner) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM weekly_schedules
        WHERE owner_kind = $1 AND owner_id = $2
        "#,
    )
    .bind(owner.kind.as_str())
    .bind(owner.id)
    .execute(pool)
    .await?;

    Ok(())
}
