use axum::http::StatusCode;
use chrono::NaiveTime;
use pretty_assertions::assert_eq;
use rstest::rstest;
use uuid::Uuid;
use workhours_core::{models::schedule::SlotsResponse, Activity, Owner, Weekday};

use crate::test_utils::{business_week, schedules_path, TestContext};

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

// 2024-01-01 was a Monday, 2024-01-06 a Saturday
#[rstest]
#[case("2024-01-01T10:00:00", true, Weekday::Monday)]
#[case("2024-01-01T12:30:00", false, Weekday::Monday)]
#[case("2024-01-01T16:59:59", true, Weekday::Monday)]
#[case("2024-01-01T17:00:01", false, Weekday::Monday)]
#[case("2024-01-06T10:00:00", false, Weekday::Saturday)]
#[tokio::test]
async fn test_status_at_given_instant(
    #[case] at: &str,
    #[case] expected: bool,
    #[case] weekday: Weekday,
) {
    let ctx = TestContext::new();
    let owner = ctx.company_with(business_week()).await;

    let response = ctx
        .server
        .get(&format!("{}/status", schedules_path(owner)))
        .add_query_param("at", at)
        .await;

    response.assert_status_ok();
    let activity = response.json::<Activity>();
    assert_eq!(activity.in_activity, expected);
    assert_eq!(activity.weekday, weekday);
    assert_eq!(activity.current_day.unwrap().weekday_en, weekday);
}

#[tokio::test]
async fn test_status_defaults_to_server_clock() {
    let ctx = TestContext::new();
    let owner = ctx.company_with(business_week()).await;

    let response = ctx
        .server
        .get(&format!("{}/status", schedules_path(owner)))
        .await;

    response.assert_status_ok();
    let activity = response.json::<Activity>();
    assert!(activity.current_day.is_some());
}

#[tokio::test]
async fn test_status_without_schedule_is_not_found() {
    let ctx = TestContext::new();
    let owner = Owner::queue(Uuid::new_v4());

    ctx.server
        .get(&format!("{}/status", schedules_path(owner)))
        .expect_failure()
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_slots_skip_lunch() {
    let ctx = TestContext::new();
    let owner = ctx.company_with(business_week()).await;

    let response = ctx
        .server
        .get(&format!("{}/slots", schedules_path(owner)))
        .add_query_param("date", "2024-01-01")
        .add_query_param("interval", 60)
        .await;

    response.assert_status_ok();
    let body = response.json::<SlotsResponse>();
    let starts: Vec<NaiveTime> = body.slots.iter().map(|slot| slot.start).collect();
    assert_eq!(
        starts,
        vec![
            time(8, 0),
            time(9, 0),
            time(10, 0),
            time(11, 0),
            time(13, 0),
            time(14, 0),
            time(15, 0),
            time(16, 0),
        ]
    );
}

#[tokio::test]
async fn test_slots_on_closed_day_are_empty() {
    let ctx = TestContext::new();
    let owner = ctx.company_with(business_week()).await;

    let body = ctx
        .server
        .get(&format!("{}/slots", schedules_path(owner)))
        .add_query_param("date", "2024-01-07")
        .await
        .json::<SlotsResponse>();

    assert!(body.slots.is_empty());
}

#[rstest]
#[case(0)]
#[case(-15)]
#[case(100_000)]
#[tokio::test]
async fn test_slots_reject_bad_interval(#[case] interval: i64) {
    let ctx = TestContext::new();
    let owner = ctx.company_with(business_week()).await;

    ctx.server
        .get(&format!("{}/slots", schedules_path(owner)))
        .add_query_param("date", "2024-01-01")
        .add_query_param("interval", interval)
        .expect_failure()
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
