//! # Availability Handlers
//!
//! Read-only views over an owner's weekly schedule: whether the owner is
//! currently in activity, and which appointment slots a given date offers.
//!
//! Both evaluate local wall-clock time. Without an explicit `at` the status
//! endpoint uses the server's clock, matching what ticket auto-close and
//! greeting suppression see.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;
use workhours_core::{
    is_in_activity, is_in_activity_now, models::schedule::SlotsResponse, slots::available_slots,
    Activity, HoursError,
};

use crate::{handlers::owner_from_path, middleware::error_handling::AppError, ApiState};

/// Default appointment length in minutes.
const DEFAULT_SLOT_MINUTES: i64 = 30;
const MAX_SLOT_MINUTES: i64 = 24 * 60;

#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    /// Local wall-clock instant to evaluate, e.g. `2024-01-01T10:00:00`
    pub at: Option<NaiveDateTime>,
}

#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    pub date: NaiveDate,

    /// Slot length in minutes
    pub interval: Option<i64>,
}

/// Reports whether the owner is inside business hours.
///
/// A missing schedule is a 404; a day without configured hours is simply
/// reported as not in activity.
#[axum::debug_handler]
pub async fn get_status(
    State(state): State<Arc<ApiState>>,
    Path((kind, id)): Path<(String, Uuid)>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<Activity>, AppError> {
    let owner = owner_from_path(&kind, id)?;
    let schedule = state.store.load(owner).await?;

    let activity = match query.at {
        Some(at) => is_in_activity(&schedule, at),
        None => is_in_activity_now(&schedule),
    };

    tracing::debug!(
        "Evaluated {}: weekday={}, in_activity={}",
        owner,
        activity.weekday,
        activity.in_activity
    );

    Ok(Json(activity))
}

#[axum::debug_handler]
pub async fn get_slots(
    State(state): State<Arc<ApiState>>,
    Path((kind, id)): Path<(String, Uuid)>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, AppError> {
    let owner = owner_from_path(&kind, id)?;
    let schedule = state.store.load(owner).await?;

    let minutes = query.interval.unwrap_or(DEFAULT_SLOT_MINUTES);
    if !(1..=MAX_SLOT_MINUTES).contains(&minutes) {
        return Err(HoursError::Validation(format!(
            "interval must be between 1 and {} minutes",
            MAX_SLOT_MINUTES
        ))
        .into());
    }
    let slots = available_slots(&schedule, query.date, Duration::minutes(minutes))?;

    Ok(Json(SlotsResponse {
        date: query.date,
        slots,
    }))
}
