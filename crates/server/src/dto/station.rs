use chrono::{DateTime, Utc};
use cheapfuel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationDto {
    pub name: String,
    pub region: Option<String>,
    pub coordinate: Coordinate,
    pub distance_km: Option<f64>,
    pub diesel_price: Option<f64>,
    pub unleaded_price: Option<f64>,
    pub last_updated: Option<DateTime<Utc>>,
    pub days_ago: i64,
    pub freshness: FreshnessBand,
    pub maps_link: String,
}

impl StationDto {
    pub fn from(station: &AnnotatedStation<'_>, now: Timestamp) -> Self {
        let days = days_ago(station.last_updated, now);
        Self {
            name: station.name.to_string(),
            region: station.region.as_deref().map(str::to_string),
            coordinate: station.location,
            distance_km: station.distance_km,
            diesel_price: station.diesel_price,
            unleaded_price: station.unleaded_price,
            last_updated: station.last_updated,
            days_ago: days,
            freshness: FreshnessBand::from_days_ago(days),
            maps_link: station.location.maps_link(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationsDto {
    pub update_date: Option<DateTime<Utc>>,
    pub stations: Vec<StationDto>,
}

impl StationsDto {
    pub fn from(data: &StationsData, stations: &[AnnotatedStation<'_>], now: Timestamp) -> Self {
        Self {
            update_date: data.update_date,
            stations: stations
                .iter()
                .map(|station| StationDto::from(station, now))
                .collect(),
        }
    }
}

#[test]
fn station_dto_test() {
    use chrono::{Duration, TimeZone};

    let now = Utc.with_ymd_and_hms(2024, 11, 10, 12, 0, 0).unwrap();
    let station = Station::new("Maxol Naas", Coordinate::new(53.2159, -6.6669))
        .with_region("Kildare")
        .with_diesel_price(1.62)
        .with_last_updated(now - Duration::days(3));
    let dto = StationDto::from(&AnnotatedStation::new(&station, Some(4.27)), now);

    assert_eq!(dto.days_ago, 3);
    assert_eq!(dto.freshness, FreshnessBand::Aging);
    assert_eq!(dto.maps_link, "https://www.google.com/maps?q=53.2159,-6.6669");

    let json = serde_json::to_value(&dto).unwrap();
    assert_eq!(json["name"], "Maxol Naas");
    assert_eq!(json["region"], "Kildare");
    assert_eq!(json["distanceKm"], 4.27);
    assert_eq!(json["dieselPrice"], 1.62);
    assert!(json["unleadedPrice"].is_null());
    assert_eq!(json["freshness"], "aging");
}

#[test]
fn never_updated_test() {
    let now = Utc::now();
    let station = Station::new("Unknown", Coordinate::default());
    let dto = StationDto::from(&AnnotatedStation::new(&station, None), now);
    assert_eq!(dto.days_ago, -1);
    assert_eq!(dto.freshness, FreshnessBand::Unknown);
    assert!(dto.distance_km.is_none());
}
