use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::{collections::HashMap, sync::Arc};
use tracing::error;

use crate::{
    api::coordinate,
    dto::{PlaceDto, PlaceNameDto},
    geocode,
    state::AppState,
};

pub async fn search(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let query = params.get("q").ok_or(StatusCode::BAD_REQUEST)?;
    let candidates = state.geocoder.search(query).await.map_err(|err| match err {
        geocode::Error::NoResults => StatusCode::NOT_FOUND,
        err => {
            error!("Failed to search places: {err}");
            StatusCode::BAD_GATEWAY
        }
    })?;
    let result: Vec<_> = candidates.into_iter().map(PlaceDto::from).collect();
    Ok(Json(result).into_response())
}

pub async fn reverse(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Response, StatusCode> {
    let coordinate = coordinate(&params)?.ok_or(StatusCode::BAD_REQUEST)?;
    let name = state.geocoder.reverse(&coordinate).await.map_err(|err| {
        error!("Failed to resolve place name for {coordinate}: {err}");
        StatusCode::BAD_GATEWAY
    })?;
    Ok(Json(PlaceNameDto { name }).into_response())
}
