mod options;
mod places;
mod reload;
mod stations;
pub use options::*;
pub use places::*;
pub use reload::*;
pub use stations::*;

use axum::http::StatusCode;
use cheapfuel::shared::Coordinate;
use std::{collections::HashMap, fmt::Display, str::FromStr};
use tracing::warn;

/// Parses an optional query parameter, a present but malformed value is a bad request.
fn param<T>(params: &HashMap<String, String>, key: &str) -> Result<Option<T>, StatusCode>
where
    T: FromStr,
    T::Err: Display,
{
    match params.get(key) {
        Some(value) => value.trim().parse().map(Some).map_err(|err| {
            warn!("Bad {key} parameter {value:?}: {err}");
            StatusCode::BAD_REQUEST
        }),
        None => Ok(None),
    }
}

/// `lat` and `lon` together form a coordinate, either one missing means no coordinate.
fn coordinate(params: &HashMap<String, String>) -> Result<Option<Coordinate>, StatusCode> {
    let latitude: Option<f64> = param(params, "lat")?;
    let longitude: Option<f64> = param(params, "lon")?;
    Ok(latitude
        .zip(longitude)
        .map(|(latitude, longitude)| Coordinate::new(latitude, longitude)))
}

#[cfg(test)]
pub(crate) fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

#[test]
fn coordinate_test() {
    let both = coordinate(&params(&[("lat", "53.1"), ("lon", "-6.2")])).unwrap();
    assert_eq!(both, Some(Coordinate::new(53.1, -6.2)));

    let half = coordinate(&params(&[("lat", "53.1")])).unwrap();
    assert_eq!(half, None);

    let bad = coordinate(&params(&[("lat", "north"), ("lon", "-6.2")]));
    assert_eq!(bad, Err(StatusCode::BAD_REQUEST));
}
