use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_COUNTRY_CODES: &str = "ie";
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid value for {var}: {reason}")]
    InvalidVar { var: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Station snapshot, `.json` or `.csv`. Without one the server starts with no data.
    pub data_path: Option<PathBuf>,
    pub port: u16,
    pub geocoder_url: String,
    pub country_codes: String,
    pub search_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            port: DEFAULT_PORT,
            geocoder_url: DEFAULT_GEOCODER_URL.into(),
            country_codes: DEFAULT_COUNTRY_CODES.into(),
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl Config {
    /// First command line argument wins over `CHEAPFUEL_DATA_PATH`.
    pub fn from_env() -> Result<Self, self::Error> {
        Self::from_lookup(std::env::args().nth(1), |key| std::env::var(key).ok())
    }

    fn from_lookup<F>(arg_path: Option<String>, lookup: F) -> Result<Self, self::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let parse = |var: &str| -> Result<Option<usize>, self::Error> {
            lookup(var)
                .map(|raw| {
                    raw.trim().parse::<usize>().map_err(|err| self::Error::InvalidVar {
                        var: var.to_string(),
                        reason: err.to_string(),
                    })
                })
                .transpose()
        };

        let port = match lookup("CHEAPFUEL_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|err| self::Error::InvalidVar {
                    var: "CHEAPFUEL_PORT".into(),
                    reason: err.to_string(),
                })?,
            None => defaults.port,
        };
        let search_limit = parse("CHEAPFUEL_SEARCH_LIMIT")?.unwrap_or(defaults.search_limit);
        if search_limit == 0 {
            return Err(self::Error::InvalidVar {
                var: "CHEAPFUEL_SEARCH_LIMIT".into(),
                reason: "must be at least 1".into(),
            });
        }

        Ok(Self {
            data_path: arg_path
                .or_else(|| lookup("CHEAPFUEL_DATA_PATH"))
                .map(PathBuf::from),
            port,
            geocoder_url: lookup("CHEAPFUEL_GEOCODER_URL").unwrap_or(defaults.geocoder_url),
            country_codes: lookup("CHEAPFUEL_COUNTRY_CODES").unwrap_or(defaults.country_codes),
            search_limit,
        })
    }
}

#[test]
fn defaults_test() {
    let config = Config::from_lookup(None, |_| None).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn overrides_test() {
    let config = Config::from_lookup(None, |key| match key {
        "CHEAPFUEL_PORT" => Some("8080".into()),
        "CHEAPFUEL_DATA_PATH" => Some("/data/stations.json".into()),
        "CHEAPFUEL_SEARCH_LIMIT" => Some("10".into()),
        "CHEAPFUEL_COUNTRY_CODES" => Some("ie,gb".into()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.data_path, Some(PathBuf::from("/data/stations.json")));
    assert_eq!(config.search_limit, 10);
    assert_eq!(config.country_codes, "ie,gb");
    assert_eq!(config.geocoder_url, DEFAULT_GEOCODER_URL);
}

#[test]
fn argument_beats_env_test() {
    let config = Config::from_lookup(Some("local.csv".into()), |key| {
        (key == "CHEAPFUEL_DATA_PATH").then(|| "env.json".to_string())
    })
    .unwrap();
    assert_eq!(config.data_path, Some(PathBuf::from("local.csv")));
}

#[test]
fn invalid_port_test() {
    let result = Config::from_lookup(None, |key| {
        (key == "CHEAPFUEL_PORT").then(|| "eighty".to_string())
    });
    assert!(matches!(result, Err(Error::InvalidVar { var, .. }) if var == "CHEAPFUEL_PORT"));
}

#[test]
fn zero_search_limit_test() {
    let result = Config::from_lookup(None, |key| {
        (key == "CHEAPFUEL_SEARCH_LIMIT").then(|| "0".to_string())
    });
    assert!(result.is_err());
}
