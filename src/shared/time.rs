use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type Timestamp = DateTime<Utc>;

/// Oldest price update, in whole days, still considered up to date.
pub const FRESHNESS_WINDOW_DAYS: i64 = 5;

const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

/// Whole days elapsed between `timestamp` and `now`, floored.
/// Uses elapsed time, not calendar boundaries.
/// Returns `-1` when there is no timestamp. Timestamps in the future give a negative value too.
pub fn days_ago(timestamp: Option<Timestamp>, now: Timestamp) -> i64 {
    match timestamp {
        Some(timestamp) => (now - timestamp).num_milliseconds().div_euclid(DAY_MILLIS),
        None => -1,
    }
}

/// `0 <= days_ago <= FRESHNESS_WINDOW_DAYS`, both ends inclusive.
pub fn is_fresh(timestamp: Option<Timestamp>, now: Timestamp) -> bool {
    (0..=FRESHNESS_WINDOW_DAYS).contains(&days_ago(timestamp, now))
}

/// Colour tier shown next to a station's last update.
/// This is a display concern and plays no part in filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FreshnessBand {
    Fresh,
    Aging,
    Unknown,
}

impl FreshnessBand {
    pub fn from_days_ago(days: i64) -> Self {
        match days {
            0..=2 => Self::Fresh,
            3 => Self::Aging,
            _ => Self::Unknown,
        }
    }
}

#[test]
fn missing_timestamp_test() {
    assert_eq!(days_ago(None, Utc::now()), -1);
    assert!(!is_fresh(None, Utc::now()));
}

#[test]
fn future_timestamp_test() {
    let now = Utc::now();
    let later = now + chrono::Duration::hours(1);
    assert_eq!(days_ago(Some(later), now), -1);
    assert!(!is_fresh(Some(later), now));
}

#[test]
fn band_test() {
    assert_eq!(FreshnessBand::from_days_ago(-1), FreshnessBand::Unknown);
    assert_eq!(FreshnessBand::from_days_ago(0), FreshnessBand::Fresh);
    assert_eq!(FreshnessBand::from_days_ago(2), FreshnessBand::Fresh);
    assert_eq!(FreshnessBand::from_days_ago(3), FreshnessBand::Aging);
    assert_eq!(FreshnessBand::from_days_ago(4), FreshnessBand::Unknown);
}
