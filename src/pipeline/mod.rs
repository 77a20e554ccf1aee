use thiserror::Error;
use tracing::debug;

pub mod filter;
pub mod rank;
pub use filter::*;
pub use rank::*;

use crate::{
    shared::{Coordinate, Timestamp, distance_km},
    station::{AnnotatedStation, Station},
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown freshness mode: {0}")]
    UnknownFreshnessMode(String),
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),
    #[error("Unknown sort direction: {0}")]
    UnknownSortDirection(String),
}

/// Pairs every station with its distance to `reference`, in input order.
pub fn annotate(stations: &[Station], reference: Option<Coordinate>) -> Vec<AnnotatedStation<'_>> {
    stations
        .iter()
        .map(|station| {
            let distance = reference.map(|reference| distance_km(&reference, &station.location));
            AnnotatedStation::new(station, distance)
        })
        .collect()
}

/// Annotates, filters and sorts `stations`.
/// Pure: the same inputs, `now` included, always give the same output.
pub fn compute<'a>(
    stations: &'a [Station],
    reference: Option<Coordinate>,
    filter_config: &FilterConfig,
    sort_config: &SortConfig,
    now: Timestamp,
) -> Vec<AnnotatedStation<'a>> {
    let annotated = annotate(stations, reference);
    let filtered = filter(annotated, filter_config, now);
    debug!(
        "Kept {} of {} stations with {:?}",
        filtered.len(),
        stations.len(),
        filter_config
    );
    sort(filtered, sort_config)
}

/// Builder over [`compute`].
///
/// ```
/// use cheapfuel::prelude::*;
///
/// let stations = vec![Station::new("Main St", Coordinate::new(53.35, -6.26))];
/// let result = Query::new(&stations)
///     .near(Coordinate::new(53.34, -6.25))
///     .filter_by(FilterConfig::all())
///     .run();
/// assert_eq!(result.len(), 1);
/// ```
pub struct Query<'a> {
    stations: &'a [Station],
    reference: Option<Coordinate>,
    filter_config: FilterConfig,
    sort_config: SortConfig,
    now: Timestamp,
}

impl<'a> Query<'a> {
    pub fn new(stations: &'a [Station]) -> Self {
        Self {
            stations,
            reference: None,
            filter_config: FilterConfig::default(),
            sort_config: SortConfig::default(),
            now: chrono::Utc::now(),
        }
    }

    pub fn near(mut self, reference: Coordinate) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn reference(mut self, reference: Option<Coordinate>) -> Self {
        self.reference = reference;
        self
    }

    pub fn filter_by(mut self, filter_config: FilterConfig) -> Self {
        self.filter_config = filter_config;
        self
    }

    pub fn sort_by(mut self, sort_config: SortConfig) -> Self {
        self.sort_config = sort_config;
        self
    }

    pub fn at(mut self, now: Timestamp) -> Self {
        self.now = now;
        self
    }

    pub fn run(self) -> Vec<AnnotatedStation<'a>> {
        compute(
            self.stations,
            self.reference,
            &self.filter_config,
            &self.sort_config,
            self.now,
        )
    }
}
