use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;
use workhours_core::{
    models::schedule::{UpdateSchedulesRequest, ValidateSchedulesResponse},
    service, validator, WeeklySchedule,
};

use crate::{handlers::owner_from_path, middleware::error_handling::AppError, ApiState};

#[axum::debug_handler]
pub async fn get_schedules(
    State(state): State<Arc<ApiState>>,
    Path((kind, id)): Path<(String, Uuid)>,
) -> Result<Json<WeeklySchedule>, AppError> {
    let owner = owner_from_path(&kind, id)?;
    let schedule = state.store.load(owner).await?;

    Ok(Json(schedule))
}

/// Replaces the owner's week after validating every day.
#[axum::debug_handler]
pub async fn update_schedules(
    State(state): State<Arc<ApiState>>,
    Path((kind, id)): Path<(String, Uuid)>,
    Json(payload): Json<UpdateSchedulesRequest>,
) -> Result<Json<WeeklySchedule>, AppError> {
    let owner = owner_from_path(&kind, id)?;
    let schedule = service::update_schedules(state.store.as_ref(), owner, payload.schedules).await?;

    info!("Schedules updated for {}", owner);
    Ok(Json(schedule))
}

#[axum::debug_handler]
pub async fn seed_schedules(
    State(state): State<Arc<ApiState>>,
    Path((kind, id)): Path<(String, Uuid)>,
) -> Result<Json<WeeklySchedule>, AppError> {
    let owner = owner_from_path(&kind, id)?;
    let schedule = service::ensure_schedule(state.store.as_ref(), owner).await?;

    Ok(Json(schedule))
}

#[axum::debug_handler]
pub async fn delete_schedules(
    State(state): State<Arc<ApiState>>,
    Path((kind, id)): Path<(String, Uuid)>,
) -> Result<StatusCode, AppError> {
    let owner = owner_from_path(&kind, id)?;
    state.store.delete(owner).await?;

    info!("Schedules deleted for {}", owner);
    Ok(StatusCode::NO_CONTENT)
}

/// Dry-run validation; nothing is stored.
#[axum::debug_handler]
pub async fn validate_schedules(
    Json(payload): Json<UpdateSchedulesRequest>,
) -> Json<ValidateSchedulesResponse> {
    let errors = validator::validate_week(&payload.schedules)
        .err()
        .unwrap_or_default();

    Json(ValidateSchedulesResponse {
        valid: errors.is_empty(),
        errors,
    })
}
