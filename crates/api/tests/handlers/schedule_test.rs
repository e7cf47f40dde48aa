use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;
use workhours_core::{
    models::schedule::ValidateSchedulesResponse, Owner, ScheduleStore, Weekday, WeeklySchedule,
};

use crate::test_utils::{business_week, schedules_path, TestContext};

#[test_log::test(tokio::test)]
async fn test_get_schedules_returns_stored_week() {
    let ctx = TestContext::new();
    let owner = ctx.company_with(business_week()).await;

    let response = ctx.server.get(&schedules_path(owner)).await;

    response.assert_status_ok();
    assert_eq!(response.json::<WeeklySchedule>(), business_week());
}

#[tokio::test]
async fn test_get_schedules_not_found() {
    let ctx = TestContext::new();
    let owner = Owner::company(Uuid::new_v4());

    let response = ctx.server.get(&schedules_path(owner)).expect_failure().await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body = response.json::<Value>();
    assert!(body["error"].as_str().unwrap().starts_with("Resource not found"));
}

#[tokio::test]
async fn test_unknown_owner_collection_is_not_found() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .get(&format!("/api/users/{}/schedules", Uuid::new_v4()))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn test_update_then_get_round_trips() {
    let ctx = TestContext::new();
    let owner = Owner::queue(Uuid::new_v4());
    let path = schedules_path(owner);

    let response = ctx
        .server
        .put(&path)
        .json(&json!({
            "schedules": [
                {
                    "weekday": "Segunda-feira",
                    "weekdayEn": "monday",
                    "startTime": "08:00",
                    "endTime": "17:00",
                    "startLunchTime": "12:00",
                    "endLunchTime": "13:00"
                },
                { "weekday": "Sábado", "weekdayEn": "saturday", "startTime": "", "endTime": "" }
            ]
        }))
        .await;

    response.assert_status_ok();
    let saved = response.json::<WeeklySchedule>();
    assert!(saved.is_complete());
    assert_eq!(
        saved.day(Weekday::Monday).unwrap().lunch_break(),
        Some(("12:00", "13:00"))
    );

    let fetched = ctx.server.get(&path).await.json::<WeeklySchedule>();
    assert_eq!(fetched, saved);
    assert_eq!(ctx.store.load(owner).await.unwrap(), saved);
}

#[tokio::test]
async fn test_update_rejects_inverted_lunch() {
    let ctx = TestContext::new();
    let owner = ctx.company_with(business_week()).await;

    let response = ctx
        .server
        .put(&schedules_path(owner))
        .json(&json!({
            "schedules": [
                {
                    "weekday": "Terça-feira",
                    "weekdayEn": "tuesday",
                    "startTime": "09:00",
                    "endTime": "18:00",
                    "startLunchTime": "14:00",
                    "endLunchTime": "13:00"
                }
            ]
        }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(
        body["details"],
        json!([{ "weekday": "tuesday", "kind": "lunch_order", "start": "14:00", "end": "13:00" }])
    );

    // Nothing was written
    assert_eq!(ctx.store.load(owner).await.unwrap(), business_week());
}

#[tokio::test]
async fn test_update_rejects_duplicate_weekdays() {
    let ctx = TestContext::new();
    let owner = Owner::company(Uuid::new_v4());

    let response = ctx
        .server
        .put(&schedules_path(owner))
        .json(&json!({
            "schedules": [
                { "weekday": "Domingo", "weekdayEn": "sunday" },
                { "weekday": "Domingo", "weekdayEn": "sunday", "startTime": "10:00", "endTime": "14:00" }
            ]
        }))
        .expect_failure()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["details"][0]["kind"], "duplicate_weekday");
    assert!(ctx.store.is_empty().await);
}

#[tokio::test]
async fn test_seed_creates_default_once() {
    let ctx = TestContext::new();
    let owner = Owner::company(Uuid::new_v4());
    let seed_path = format!("{}/seed", schedules_path(owner));

    let seeded = ctx.server.post(&seed_path).await;
    seeded.assert_status_ok();
    assert_eq!(seeded.json::<WeeklySchedule>(), WeeklySchedule::default());

    ctx.store.save(owner, &business_week()).await.unwrap();
    let again = ctx.server.post(&seed_path).await.json::<WeeklySchedule>();
    assert_eq!(again, business_week());
}

#[tokio::test]
async fn test_delete_removes_schedule() {
    let ctx = TestContext::new();
    let owner = ctx.company_with(business_week()).await;
    let path = schedules_path(owner);

    ctx.server
        .delete(&path)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    ctx.server
        .get(&path)
        .expect_failure()
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_validate_reports_without_storing() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/schedules/validate")
        .json(&json!({
            "schedules": [
                { "weekdayEn": "monday", "startTime": "09:00", "endTime": "18:00", "endLunchTime": "13:00" },
                { "weekdayEn": "friday", "startTime": "09:00", "endTime": "18:00" }
            ]
        }))
        .await;

    response.assert_status_ok();
    let body = response.json::<ValidateSchedulesResponse>();
    assert!(!body.valid);
    assert_eq!(body.errors.len(), 1);
    assert_eq!(body.errors[0].weekday, Weekday::Monday);
    assert!(ctx.store.is_empty().await);
}

#[tokio::test]
async fn test_validate_accepts_clean_week() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/api/schedules/validate")
        .json(&json!({ "schedules": business_week() }))
        .await;

    let body = response.json::<ValidateSchedulesResponse>();
    assert!(body.valid);
    assert!(body.errors.is_empty());
}
