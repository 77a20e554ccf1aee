use std::{ops::Deref, sync::Arc};

use crate::shared::{Coordinate, Timestamp};

/// A fuel station as supplied by the data source. Read-only to the pipeline.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Station {
    /// Display name, never empty.
    pub name: Arc<str>,
    pub location: Coordinate,
    /// County or region label, if the source has one.
    pub region: Option<Arc<str>>,
    /// Price per liter. `None` means not reported.
    pub diesel_price: Option<f64>,
    /// Price per liter. `None` means not reported.
    pub unleaded_price: Option<f64>,
    /// When the prices were last reported. `None` means never.
    pub last_updated: Option<Timestamp>,
}

impl Station {
    pub fn new(name: impl Into<Arc<str>>, location: Coordinate) -> Self {
        Self {
            name: name.into(),
            location,
            ..Default::default()
        }
    }

    pub fn with_region(mut self, region: impl Into<Arc<str>>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_diesel_price(mut self, price: f64) -> Self {
        self.diesel_price = Some(price);
        self
    }

    pub fn with_unleaded_price(mut self, price: f64) -> Self {
        self.unleaded_price = Some(price);
        self
    }

    pub fn with_last_updated(mut self, timestamp: Timestamp) -> Self {
        self.last_updated = Some(timestamp);
        self
    }
}

/// A station paired with its distance to the reference location.
/// Only lives for one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnotatedStation<'a> {
    pub station: &'a Station,
    /// Kilometers to the reference location, `None` when there is no reference location.
    pub distance_km: Option<f64>,
}

impl<'a> AnnotatedStation<'a> {
    pub fn new(station: &'a Station, distance_km: Option<f64>) -> Self {
        Self {
            station,
            distance_km,
        }
    }
}

impl Deref for AnnotatedStation<'_> {
    type Target = Station;

    fn deref(&self) -> &Self::Target {
        self.station
    }
}
