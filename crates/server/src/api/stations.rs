use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cheapfuel::{
    pipeline::{self, FilterConfig, SortConfig},
    shared::Coordinate,
};
use std::{collections::HashMap, sync::Arc};
use tracing::{debug, error};

use crate::{
    api::{coordinate, param},
    dto::StationsDto,
    state::AppState,
};

/// Everything the station list lets the user pick.
#[derive(Debug, Clone, PartialEq)]
pub struct StationsRequest {
    pub reference: Option<Coordinate>,
    pub filter: FilterConfig,
    pub sort: SortConfig,
}

impl StationsRequest {
    /// Missing parameters fall back to the list's initial view.
    /// `distance=all` or an empty `distance` turns the radius off.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, StatusCode> {
        let defaults = FilterConfig::default();
        let max_distance_km = match params.get("distance").map(|value| value.trim()) {
            None => defaults.max_distance_km,
            Some("") | Some("all") => None,
            Some(_) => {
                let distance: Option<f64> = param(params, "distance")?;
                match distance {
                    Some(distance) if distance > 0.0 => Some(distance),
                    _ => return Err(StatusCode::BAD_REQUEST),
                }
            }
        };
        let filter = FilterConfig {
            max_distance_km,
            freshness_mode: param(params, "updated")?.unwrap_or(defaults.freshness_mode),
        };
        let sort = SortConfig {
            key: param(params, "sort")?.unwrap_or_default(),
            direction: param(params, "order")?.unwrap_or_default(),
        };
        Ok(Self {
            reference: coordinate(params)?,
            filter,
            sort,
        })
    }
}

pub async fn stations(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let request = StationsRequest::from_params(&params)?;
    let data = state.stations().await.ok_or_else(|| {
        error!("Station data is not loaded");
        StatusCode::SERVICE_UNAVAILABLE
    })?;

    let now = chrono::Utc::now();
    let stations = pipeline::Query::new(&data.stations)
        .reference(request.reference)
        .filter_by(request.filter)
        .sort_by(request.sort)
        .at(now)
        .run();
    debug!("Returning {} stations for {:?}", stations.len(), request);
    Ok(Json(StationsDto::from(&data, &stations, now)).into_response())
}

#[test]
fn defaults_test() {
    use cheapfuel::pipeline::{FreshnessMode, SortDirection, SortKey};

    let request = StationsRequest::from_params(&HashMap::new()).unwrap();
    assert_eq!(request.reference, None);
    assert_eq!(request.filter.max_distance_km, Some(10.0));
    assert_eq!(request.filter.freshness_mode, FreshnessMode::RecentOnly);
    assert_eq!(request.sort, SortConfig::new(SortKey::Distance, SortDirection::Ascending));
}

#[test]
fn full_request_test() {
    use crate::api::params;
    use cheapfuel::pipeline::{SortDirection, SortKey};

    let request = StationsRequest::from_params(&params(&[
        ("lat", "53.35"),
        ("lon", "-6.26"),
        ("distance", "50"),
        ("updated", "all"),
        ("sort", "unleadedPrice"),
        ("order", "desc"),
    ]))
    .unwrap();
    assert_eq!(request.reference, Some(Coordinate::new(53.35, -6.26)));
    assert_eq!(request.filter, FilterConfig::all().within(50.0));
    assert_eq!(
        request.sort,
        SortConfig::new(SortKey::UnleadedPrice, SortDirection::Descending)
    );
}

#[test]
fn distance_all_test() {
    use crate::api::params;

    for value in ["all", ""] {
        let request = StationsRequest::from_params(&params(&[("distance", value)])).unwrap();
        assert_eq!(request.filter.max_distance_km, None);
    }
}

#[test]
fn bad_request_test() {
    use crate::api::params;

    for pairs in [
        [("distance", "-3")],
        [("distance", "far")],
        [("updated", "recent")],
        [("sort", "price")],
        [("order", "up")],
    ] {
        assert_eq!(
            StationsRequest::from_params(&params(&pairs)),
            Err(StatusCode::BAD_REQUEST)
        );
    }
}

#[tokio::test]
async fn no_data_test() {
    let state = Arc::new(crate::state::offline_state(None));
    let response = stations(Query(HashMap::new()), State(state)).await;
    assert_eq!(response.err(), Some(StatusCode::SERVICE_UNAVAILABLE));
}
