use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{pipeline, station::AnnotatedStation};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Distance,
    DieselPrice,
    UnleadedPrice,
}

impl SortKey {
    pub fn value(&self, station: &AnnotatedStation<'_>) -> Option<f64> {
        match self {
            SortKey::Distance => station.distance_km,
            SortKey::DieselPrice => station.diesel_price,
            SortKey::UnleadedPrice => station.unleaded_price,
        }
    }
}

impl FromStr for SortKey {
    type Err = pipeline::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "distance" => Ok(Self::Distance),
            "dieselPrice" => Ok(Self::DieselPrice),
            "unleadedPrice" => Ok(Self::UnleadedPrice),
            _ => Err(pipeline::Error::UnknownSortKey(s.to_string())),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl FromStr for SortDirection {
    type Err = pipeline::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            _ => Err(pipeline::Error::UnknownSortDirection(s.to_string())),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortConfig {
    pub const fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Missing values always go last, whatever the direction.
    pub fn compare(&self, a: &AnnotatedStation<'_>, b: &AnnotatedStation<'_>) -> Ordering {
        match (self.key.value(a), self.key.value(b)) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => match self.direction {
                SortDirection::Ascending => a.total_cmp(&b),
                SortDirection::Descending => b.total_cmp(&a),
            },
        }
    }
}

/// Stable sort, ties keep their input order.
pub fn sort<'a>(
    mut stations: Vec<AnnotatedStation<'a>>,
    config: &SortConfig,
) -> Vec<AnnotatedStation<'a>> {
    stations.sort_by(|a, b| config.compare(a, b));
    stations
}

#[test]
fn parse_test() {
    assert_eq!("dieselPrice".parse::<SortKey>().ok(), Some(SortKey::DieselPrice));
    assert_eq!(
        "unleadedPrice".parse::<SortKey>().ok(),
        Some(SortKey::UnleadedPrice)
    );
    assert_eq!("desc".parse::<SortDirection>().ok(), Some(SortDirection::Descending));
    assert!("price".parse::<SortKey>().is_err());
    assert!("up".parse::<SortDirection>().is_err());
}
