use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    shared::{Coordinate, Timestamp},
    source,
    station::Station,
};

/// Snapshot document as published by the price scraper.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawStationsData {
    #[serde(default)]
    pub update_date: Option<String>,
    pub stations: Vec<RawStation>,
}

/// One station record. Shared by the JSON snapshot and CSV files.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawStation {
    pub station_name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub county_name: Option<String>,
    #[serde(default)]
    pub diesel_price: Option<f64>,
    #[serde(default)]
    pub unleaded_price: Option<f64>,
    #[serde(default)]
    pub date_updated: Option<String>,
}

impl RawStation {
    pub(crate) fn into_station(self, index: usize) -> Result<Station, source::Error> {
        let name = self.station_name.trim();
        if name.is_empty() {
            return Err(source::Error::MissingName(index));
        }
        let region = self
            .county_name
            .map(|county| county.trim().to_string())
            .filter(|county| !county.is_empty())
            .map(|county| county.into());
        Ok(Station {
            name: name.into(),
            location: Coordinate::new(self.latitude, self.longitude),
            region,
            diesel_price: self.diesel_price,
            unleaded_price: self.unleaded_price,
            last_updated: self.date_updated.as_deref().and_then(parse_timestamp),
        })
    }
}

/// Accepts RFC 3339, or a naive date time which is read as UTC.
/// Anything else is treated as never updated.
pub fn parse_timestamp(value: &str) -> Option<Timestamp> {
    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc));
    }
    let parsed = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc());
    if parsed.is_none() {
        debug!("Ignoring unparseable timestamp {value:?}");
    }
    parsed
}

#[test]
fn parse_rfc3339_test() {
    let timestamp = parse_timestamp("2024-11-02T10:15:00+01:00").unwrap();
    assert_eq!(timestamp.to_rfc3339(), "2024-11-02T09:15:00+00:00");
}

#[test]
fn parse_naive_test() {
    let timestamp = parse_timestamp("2024-11-02 10:15:00").unwrap();
    assert_eq!(timestamp.to_rfc3339(), "2024-11-02T10:15:00+00:00");
    assert!(parse_timestamp("2024-11-02T10:15:00.250").is_some());
}

#[test]
fn parse_invalid_test() {
    assert!(parse_timestamp("").is_none());
    assert!(parse_timestamp("   ").is_none());
    assert!(parse_timestamp("yesterday").is_none());
}
