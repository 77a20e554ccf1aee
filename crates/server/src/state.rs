use cheapfuel::source::{self, StationsData};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::{config::Config, geocode::Geocoder};

pub struct AppState {
    pub data_path: Option<PathBuf>,
    /// `None` until a dataset loads. Handlers answer 503 meanwhile.
    pub data: RwLock<Option<Arc<StationsData>>>,
    pub geocoder: Geocoder,
}

impl AppState {
    pub fn new(config: &Config, geocoder: Geocoder) -> Self {
        Self {
            data_path: config.data_path.clone(),
            data: RwLock::new(None),
            geocoder,
        }
    }

    pub async fn stations(&self) -> Option<Arc<StationsData>> {
        self.data.read().await.clone()
    }

    /// Reads the dataset from disk and swaps it in.
    /// On failure the current dataset stays in place.
    pub async fn reload(&self) -> Result<Arc<StationsData>, ReloadError> {
        let path = self.data_path.clone().ok_or(ReloadError::NoDataPath)?;
        let data = tokio::task::spawn_blocking(move || {
            StationsData::from_path(&path, &source::Config::default())
        })
        .await
        .map_err(|err| {
            error!("Station loader panicked: {err}");
            ReloadError::Aborted
        })??;
        let data = Arc::new(data);
        info!(
            "Loaded {} stations published {:?}",
            data.stations.len(),
            data.update_date
        );
        *self.data.write().await = Some(data.clone());
        Ok(data)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ReloadError {
    #[error("No station data path configured")]
    NoDataPath,
    #[error("Station loading was aborted")]
    Aborted,
    #[error(transparent)]
    Source(#[from] source::Error),
}

#[cfg(test)]
pub(crate) fn offline_state(data_path: Option<PathBuf>) -> AppState {
    let config = Config {
        data_path,
        ..Config::default()
    };
    AppState::new(&config, Geocoder::new("http://127.0.0.1:9", "ie", 5).unwrap())
}

#[tokio::test]
async fn failed_reload_keeps_data_test() {
    let path = PathBuf::from(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../tests/data/stations.json"
    ));
    let mut state = offline_state(Some(path));
    assert!(state.stations().await.is_none());

    let loaded = state.reload().await.unwrap();
    assert_eq!(loaded.stations.len(), 3);

    state.data_path = Some(PathBuf::from(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/../../tests/data/missing.json"
    )));
    assert!(matches!(
        state.reload().await,
        Err(ReloadError::Source(source::Error::Io(_)))
    ));
    let current = state.stations().await.unwrap();
    assert!(Arc::ptr_eq(&current, &loaded));
}

#[tokio::test]
async fn no_data_path_test() {
    let state = offline_state(None);
    assert!(matches!(state.reload().await, Err(ReloadError::NoDataPath)));
    assert!(state.stations().await.is_none());
}
