use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // One row per owner; the week is stored whole as a JSON array
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS weekly_schedules (
            owner_kind VARCHAR(16) NOT NULL,
            owner_id UUID NOT NULL,
            days JSONB NOT NULL,
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            PRIMARY KEY (owner_kind, owner_id),
            CONSTRAINT valid_owner_kind CHECK (owner_kind IN ('company', 'queue')),
            CONSTRAINT days_is_array CHECK (jsonb_typeof(days) = 'array')
        );
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
