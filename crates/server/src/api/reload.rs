use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::sync::Arc;
use tracing::error;

use crate::state::{AppState, ReloadError};

pub async fn reload(State(state): State<Arc<AppState>>) -> Result<Response, StatusCode> {
    let data = state.reload().await.map_err(|err| {
        error!("Failed to reload stations: {err}");
        match err {
            ReloadError::NoDataPath => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    })?;
    Ok(Json(json!({
        "stations": data.stations.len(),
        "updateDate": data.update_date,
    }))
    .into_response())
}
