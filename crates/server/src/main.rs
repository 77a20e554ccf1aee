mod api;
mod config;
mod dto;
mod geocode;
mod state;

use crate::{config::Config, geocode::Geocoder, state::AppState};
use axum::routing::{get, post};
use std::{sync::Arc, time::Instant};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("Starting server...");
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Invalid configuration: {err}");
            std::process::exit(1);
        }
    };
    let geocoder =
        match Geocoder::new(&config.geocoder_url, &config.country_codes, config.search_limit) {
            Ok(geocoder) => geocoder,
            Err(err) => {
                error!("Failed to create geocoder: {err}");
                std::process::exit(1);
            }
        };
    let state = Arc::new(AppState::new(&config, geocoder));

    info!("Loading data...");
    let now = Instant::now();
    match state.reload().await {
        Ok(_) => info!("Loading data took {:?}", now.elapsed()),
        // Keep serving, /stations answers 503 until a reload succeeds
        Err(err) => warn!("Starting without station data: {err}"),
    }

    let app = axum::Router::new()
        .route("/options", get(api::options))
        .route("/stations", get(api::stations))
        .route("/search", get(api::search))
        .route("/reverse", get(api::reverse))
        .route("/reload", post(api::reload))
        .with_state(state);
    let listener = match tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind port {}: {err}", config.port);
            std::process::exit(1);
        }
    };
    info!("Listening to port {}", config.port);
    if let Err(err) = axum::serve(listener, app).await {
        error!("Server stopped: {err}");
    }
}
