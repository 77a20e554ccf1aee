use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    pipeline,
    shared::{Timestamp, is_fresh},
    station::AnnotatedStation,
};

/// Radius choices offered by the station list, in kilometers.
pub const DISTANCE_PRESETS_KM: [f64; 8] = [1.0, 5.0, 10.0, 13.0, 20.0, 30.0, 50.0, 100.0];

pub const DEFAULT_MAX_DISTANCE_KM: f64 = 10.0;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FreshnessMode {
    #[serde(rename = "all")]
    All,
    /// Only stations updated within the freshness window.
    #[default]
    #[serde(rename = "upTodate")]
    RecentOnly,
}

impl FromStr for FreshnessMode {
    type Err = pipeline::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "upTodate" => Ok(Self::RecentOnly),
            _ => Err(pipeline::Error::UnknownFreshnessMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfig {
    /// `None` disables distance filtering.
    pub max_distance_km: Option<f64>,
    pub freshness_mode: FreshnessMode,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_distance_km: Some(DEFAULT_MAX_DISTANCE_KM),
            freshness_mode: FreshnessMode::RecentOnly,
        }
    }
}

impl FilterConfig {
    /// A config that lets every station through.
    pub const fn all() -> Self {
        Self {
            max_distance_km: None,
            freshness_mode: FreshnessMode::All,
        }
    }

    pub fn within(mut self, max_distance_km: f64) -> Self {
        self.max_distance_km = Some(max_distance_km);
        self
    }

    pub fn freshness(mut self, freshness_mode: FreshnessMode) -> Self {
        self.freshness_mode = freshness_mode;
        self
    }

    /// Stations without a distance always pass the distance check.
    /// Both bounds are inclusive.
    pub fn matches(&self, station: &AnnotatedStation<'_>, now: Timestamp) -> bool {
        let is_near = match (self.max_distance_km, station.distance_km) {
            (Some(max), Some(distance)) => distance <= max,
            _ => true,
        };
        let is_up_to_date = match self.freshness_mode {
            FreshnessMode::All => true,
            FreshnessMode::RecentOnly => is_fresh(station.last_updated, now),
        };
        is_near && is_up_to_date
    }
}

/// Keeps the stations matching `config`, in input order.
pub fn filter<'a, I>(stations: I, config: &FilterConfig, now: Timestamp) -> Vec<AnnotatedStation<'a>>
where
    I: IntoIterator<Item = AnnotatedStation<'a>>,
{
    stations
        .into_iter()
        .filter(|station| config.matches(station, now))
        .collect()
}

#[test]
fn freshness_mode_parse_test() {
    assert_eq!("all".parse::<FreshnessMode>().ok(), Some(FreshnessMode::All));
    assert_eq!(
        "upTodate".parse::<FreshnessMode>().ok(),
        Some(FreshnessMode::RecentOnly)
    );
    assert!("recent".parse::<FreshnessMode>().is_err());
}

#[test]
fn default_config_test() {
    let config = FilterConfig::default();
    assert_eq!(config.max_distance_km, Some(10.0));
    assert_eq!(config.freshness_mode, FreshnessMode::RecentOnly);
}
