use std::{
    fs::{self, File},
    io::{self, BufReader, Read},
    path::Path,
    time::Instant,
};

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

pub mod models;
use models::*;

use crate::{shared::Timestamp, station::Station};

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unsupported station file: {0}")]
    UnsupportedFormat(String),
    #[error("Station record at index {0} has no name")]
    MissingName(usize),
}

pub struct Config {
    pub csv_delimiter: u8,
    pub csv_has_headers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_delimiter: b',',
            csv_has_headers: true,
        }
    }
}

/// The full station dataset and when it was published.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationsData {
    pub update_date: Option<Timestamp>,
    pub stations: Vec<Station>,
}

impl StationsData {
    /// Loads a `.json` snapshot or a `.csv` file, picked by extension.
    /// CSV files carry no publish date so the file's modification time is used instead.
    pub fn from_path<P: AsRef<Path>>(path: P, config: &Config) -> Result<Self, self::Error> {
        let path = path.as_ref();
        debug!("Loading stations from {}...", path.display());
        let now = Instant::now();
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(|extension| extension.to_ascii_lowercase());
        let data = match extension.as_deref() {
            Some("json") => Self::from_json(BufReader::new(File::open(path)?))?,
            Some("csv") => {
                let modified: DateTime<Utc> = fs::metadata(path)?.modified()?.into();
                let mut data = Self::from_csv(File::open(path)?, config)?;
                data.update_date = Some(modified);
                data
            }
            _ => return Err(self::Error::UnsupportedFormat(path.display().to_string())),
        };
        debug!(
            "Loading {} stations took {:?}",
            data.stations.len(),
            now.elapsed()
        );
        Ok(data)
    }

    pub fn from_json<R: Read>(reader: R) -> Result<Self, self::Error> {
        let raw: RawStationsData = serde_json::from_reader(reader)?;
        let stations = raw
            .stations
            .into_iter()
            .enumerate()
            .map(|(i, station)| station.into_station(i))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            update_date: raw.update_date.as_deref().and_then(parse_timestamp),
            stations,
        })
    }

    /// Reads station rows. The publish date is left unset.
    pub fn from_csv<R: Read>(reader: R, config: &Config) -> Result<Self, self::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(config.csv_delimiter)
            .has_headers(config.csv_has_headers)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut stations = Vec::new();
        for (i, record) in reader.deserialize::<RawStation>().enumerate() {
            stations.push(record?.into_station(i)?);
        }
        Ok(Self {
            update_date: None,
            stations,
        })
    }
}
