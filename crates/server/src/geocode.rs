//! Client for a Nominatim compatible geocoding service.
//!
//! Used for two things only: naming the user's current position, and turning
//! free text into candidate reference locations. Neither result feeds into
//! filtering or sorting.

use std::time::Duration;

use cheapfuel::shared::Coordinate;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

pub const UNKNOWN_LOCATION: &str = "Unknown Location";

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid geocoder url: {0}")]
    Url(#[from] url::ParseError),
    #[error("No places matched the query")]
    NoResults,
}

/// A place the user can pick as their reference location.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub coordinate: Coordinate,
    pub display_name: String,
}

#[derive(Debug, Default, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
    #[serde(default)]
    address: Address,
}

#[derive(Debug, Default, Deserialize)]
struct Address {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    city_district: Option<String>,
}

impl ReverseResponse {
    fn best_name(self) -> String {
        [
            self.display_name,
            self.address.city,
            self.address.town,
            self.address.village,
            self.address.city_district,
        ]
        .into_iter()
        .flatten()
        .find(|name| !name.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_LOCATION.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
    display_name: String,
}

impl SearchResult {
    fn into_candidate(self) -> Option<Candidate> {
        let latitude = self.lat.parse().ok()?;
        let longitude = self.lon.parse().ok()?;
        Some(Candidate {
            coordinate: Coordinate::new(latitude, longitude),
            display_name: self.display_name,
        })
    }
}

pub struct Geocoder {
    client: Client,
    base_url: Url,
    country_codes: String,
    limit: usize,
}

impl Geocoder {
    pub fn new(base_url: &str, country_codes: &str, limit: usize) -> Result<Self, self::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(concat!("cheapfuel/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: Url::parse(base_url)?,
            country_codes: country_codes.to_string(),
            limit,
        })
    }

    fn endpoint(&self, name: &str) -> Url {
        let mut url = self.base_url.clone();
        let path = format!("{}/{name}", self.base_url.path().trim_end_matches('/'));
        url.set_path(&path);
        url
    }

    /// Best effort human readable name for `coordinate`.
    pub async fn reverse(&self, coordinate: &Coordinate) -> Result<String, self::Error> {
        let mut url = self.endpoint("reverse");
        url.query_pairs_mut()
            .append_pair("lat", &coordinate.latitude.to_string())
            .append_pair("lon", &coordinate.longitude.to_string())
            .append_pair("format", "json");
        let response: ReverseResponse = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.best_name())
    }

    /// Places matching `query`. A blank query never hits the network.
    pub async fn search(&self, query: &str) -> Result<Vec<Candidate>, self::Error> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let mut url = self.endpoint("search");
        url.query_pairs_mut()
            .append_pair("countrycodes", &self.country_codes)
            .append_pair("q", query)
            .append_pair("format", "json")
            .append_pair("addressdetails", "1")
            .append_pair("limit", &self.limit.to_string());
        let results: Vec<SearchResult> = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        debug!("Search {query:?} returned {} places", results.len());
        if results.is_empty() {
            return Err(self::Error::NoResults);
        }
        let candidates: Vec<_> = results
            .into_iter()
            .filter_map(|result| {
                let name = result.display_name.clone();
                let candidate = result.into_candidate();
                if candidate.is_none() {
                    warn!("Dropping place {name:?} with unreadable coordinates");
                }
                candidate
            })
            .collect();
        if candidates.is_empty() {
            return Err(self::Error::NoResults);
        }
        Ok(candidates)
    }
}

#[test]
fn best_name_fallback_test() {
    let response = ReverseResponse {
        display_name: None,
        address: Address {
            city: None,
            town: Some("Mullingar".into()),
            village: Some("Ignored".into()),
            city_district: None,
        },
    };
    assert_eq!(response.best_name(), "Mullingar");

    let response = ReverseResponse {
        display_name: Some("Athlone, County Westmeath, Ireland".into()),
        address: Address {
            city: Some("Athlone".into()),
            ..Default::default()
        },
    };
    assert_eq!(response.best_name(), "Athlone, County Westmeath, Ireland");

    assert_eq!(ReverseResponse::default().best_name(), UNKNOWN_LOCATION);
}

#[test]
fn endpoint_keeps_base_path_test() {
    let geocoder = Geocoder::new("http://localhost:8080/nominatim/", "ie", 5).unwrap();
    assert_eq!(
        geocoder.endpoint("search").as_str(),
        "http://localhost:8080/nominatim/search"
    );
}

#[tokio::test]
async fn reverse_test() {
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "address": { "village": "Ballymore" }
        })))
        .mount(&server)
        .await;

    let geocoder = Geocoder::new(&server.uri(), "ie", 5).unwrap();
    let name = geocoder
        .reverse(&Coordinate::new(53.49, -7.68))
        .await
        .unwrap();
    assert_eq!(name, "Ballymore");
}

#[tokio::test]
async fn search_test() {
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Galway"))
        .and(query_param("countrycodes", "ie"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "place_id": 1, "lat": "53.2707", "lon": "-9.0568", "display_name": "Galway, Ireland" },
            { "place_id": 2, "lat": "bad", "lon": "-9.0", "display_name": "Broken" }
        ])))
        .mount(&server)
        .await;

    let geocoder = Geocoder::new(&server.uri(), "ie", 5).unwrap();
    let candidates = geocoder.search(" Galway ").await.unwrap();
    assert_eq!(
        candidates,
        [Candidate {
            coordinate: Coordinate::new(53.2707, -9.0568),
            display_name: "Galway, Ireland".into(),
        }]
    );
}

#[tokio::test]
async fn search_no_results_test() {
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let geocoder = Geocoder::new(&server.uri(), "ie", 5).unwrap();
    let result = geocoder.search("Atlantis").await;
    assert!(matches!(result, Err(Error::NoResults)));
}

#[tokio::test]
async fn blank_search_skips_request_test() {
    // Nothing listens here, a request would fail
    let geocoder = Geocoder::new("http://127.0.0.1:9", "ie", 5).unwrap();
    let candidates = geocoder.search("   ").await.unwrap();
    assert!(candidates.is_empty());
}
