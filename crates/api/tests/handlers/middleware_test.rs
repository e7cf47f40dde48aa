use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::Value;
use uuid::Uuid;
use workhours_api::middleware::error_handling::map_error;
use workhours_core::{
    errors::HoursError,
    validator::{ValidationError, ValidationErrorKind},
    Owner, Weekday,
};
use workhours_db::mock::repositories::MockScheduleRepo;

use crate::test_utils::{schedules_path, server_with_store};

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_error_handling_not_found() {
    let response = map_error(HoursError::NotFound("Resource not found".to_string()));

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_error_handling_validation() {
    let response = map_error(HoursError::Validation("Invalid input".to_string()));

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Validation error: Invalid input"
    );
}

#[tokio::test]
async fn test_error_handling_invalid_schedule_lists_details() {
    let response = map_error(HoursError::InvalidSchedule(vec![ValidationError {
        weekday: Weekday::Thursday,
        kind: ValidationErrorKind::IncompleteLunch,
    }]));

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["details"][0]["weekday"], "thursday");
    assert_eq!(body["details"][0]["kind"], "incomplete_lunch");
}

#[tokio::test]
async fn test_error_handling_store() {
    let response = map_error(HoursError::Store(eyre::eyre!("Database error")));

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_error_handling_internal() {
    let response = map_error(HoursError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    ))));

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_store_failure_maps_to_server_error() {
    let mut store = MockScheduleRepo::new();
    store
        .expect_load()
        .times(1)
        .returning(|_| Err(HoursError::Store(eyre::eyre!("connection refused"))));
    let server = server_with_store(Arc::new(store));

    server
        .get(&schedules_path(Owner::company(Uuid::new_v4())))
        .expect_failure()
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_invalid_update_never_reaches_store() {
    let mut store = MockScheduleRepo::new();
    store.expect_save().never();
    let server = server_with_store(Arc::new(store));

    server
        .put(&schedules_path(Owner::company(Uuid::new_v4())))
        .json(&serde_json::json!({
            "schedules": [
                { "weekdayEn": "monday", "startTime": "09:00", "endTime": "18:00", "startLunchTime": "14:00", "endLunchTime": "13:00" }
            ]
        }))
        .expect_failure()
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
