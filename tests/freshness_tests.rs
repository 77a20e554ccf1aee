use chrono::{Duration, TimeZone, Utc};
use cheapfuel::shared::{
    FRESHNESS_WINDOW_DAYS, Timestamp,
    time::{days_ago, is_fresh},
};

fn now() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 11, 10, 12, 0, 0).unwrap()
}

#[test]
fn missing_is_minus_one_test() {
    assert_eq!(days_ago(None, now()), -1);
}

#[test]
fn same_instant_test() {
    assert_eq!(days_ago(Some(now()), now()), 0);
    assert!(is_fresh(Some(now()), now()));
}

#[test]
fn elapsed_not_calendar_test() {
    // Crosses midnight but less than a full day has passed
    let timestamp = now() - Duration::hours(23);
    assert_eq!(days_ago(Some(timestamp), now()), 0);
}

#[test]
fn window_boundary_test() {
    let five_days_one_hour = now() - Duration::days(5) - Duration::hours(1);
    let five_days = now() - Duration::days(5);
    let six_days = now() - Duration::days(6);

    assert_eq!(days_ago(Some(five_days_one_hour), now()), 5);
    assert_eq!(days_ago(Some(five_days), now()), 5);
    assert_eq!(days_ago(Some(six_days), now()), 6);

    assert!(is_fresh(Some(five_days_one_hour), now()));
    assert!(is_fresh(Some(five_days), now()));
    assert!(!is_fresh(Some(six_days), now()));
}

#[test]
fn window_is_five_days_test() {
    assert_eq!(FRESHNESS_WINDOW_DAYS, 5);
}

#[test]
fn future_update_is_not_fresh_test() {
    let timestamp = now() + Duration::minutes(1);
    assert_eq!(days_ago(Some(timestamp), now()), -1);
    assert!(!is_fresh(Some(timestamp), now()));
}
