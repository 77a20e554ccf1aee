use axum::{Json, response::IntoResponse};
use cheapfuel::pipeline::{DISTANCE_PRESETS_KM, FilterConfig, SortConfig};

use crate::dto::OptionsDto;

/// Choices and initial values for the station list controls.
pub async fn options() -> impl IntoResponse {
    Json(OptionsDto::from(
        &DISTANCE_PRESETS_KM,
        FilterConfig::default(),
        SortConfig::default(),
    ))
}

#[tokio::test]
async fn options_test() {
    use axum::body::to_bytes;

    let response = options().await.into_response();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "distancePresetsKm": [1.0, 5.0, 10.0, 13.0, 20.0, 30.0, 50.0, 100.0],
            "filter": { "maxDistanceKm": 10.0, "freshnessMode": "upTodate" },
            "sort": { "key": "distance", "direction": "asc" },
        })
    );
}
