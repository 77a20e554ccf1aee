use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use cheapfuel::{
    shared::Coordinate,
    source::{self, StationsData},
};

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR")))
}

#[test]
fn load_json_test() {
    let data = StationsData::from_path(data_path("stations.json"), &source::Config::default())
        .unwrap();

    assert_eq!(
        data.update_date,
        Some(Utc.with_ymd_and_hms(2024, 11, 10, 8, 0, 0).unwrap())
    );
    assert_eq!(data.stations.len(), 3);

    let drumcondra = &data.stations[0];
    assert_eq!(drumcondra.name.as_ref(), "Circle K Drumcondra");
    assert_eq!(drumcondra.location, Coordinate::new(53.3702, -6.2591));
    assert_eq!(drumcondra.region.as_deref(), Some("Dublin"));
    assert_eq!(drumcondra.diesel_price, Some(1.649));
    assert_eq!(drumcondra.unleaded_price, Some(1.729));
    assert_eq!(
        drumcondra.last_updated,
        Some(Utc.with_ymd_and_hms(2024, 11, 9, 17, 30, 0).unwrap())
    );

    let mallow = &data.stations[1];
    assert!(mallow.region.is_none());
    assert!(mallow.diesel_price.is_none());
    assert!(mallow.last_updated.is_none());

    // Garbage dates count as never updated
    assert!(data.stations[2].last_updated.is_none());
}

#[test]
fn load_csv_test() {
    let data =
        StationsData::from_path(data_path("stations.csv"), &source::Config::default()).unwrap();

    // File modification time stands in for the publish date
    assert!(data.update_date.is_some());
    assert_eq!(data.stations.len(), 3);

    let mallow = &data.stations[1];
    assert_eq!(mallow.name.as_ref(), "Applegreen Mallow");
    assert!(mallow.region.is_none());
    assert!(mallow.diesel_price.is_none());
    assert_eq!(mallow.unleaded_price, Some(1.699));
    assert!(mallow.last_updated.is_none());

    let athlone = &data.stations[2];
    assert!(athlone.unleaded_price.is_none());
    assert_eq!(
        athlone.last_updated,
        Some(Utc.with_ymd_and_hms(2024, 11, 8, 9, 0, 0).unwrap())
    );
}

#[test]
fn csv_and_json_agree_test() {
    let config = source::Config::default();
    let json = StationsData::from_path(data_path("stations.json"), &config).unwrap();
    let csv = StationsData::from_path(data_path("stations.csv"), &config).unwrap();
    for (a, b) in json.stations.iter().zip(csv.stations.iter()) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.location, b.location);
        assert_eq!(a.diesel_price, b.diesel_price);
        assert_eq!(a.unleaded_price, b.unleaded_price);
    }
}

#[test]
fn csv_without_headers_test() {
    let rows = "Maxol Naas;53.2159;-6.6669;Kildare;1.62;1.71;2024-11-09T10:00:00Z\n";
    let config = source::Config {
        csv_delimiter: b';',
        csv_has_headers: false,
    };
    let data = StationsData::from_csv(rows.as_bytes(), &config).unwrap();
    assert_eq!(data.stations.len(), 1);
    assert_eq!(data.stations[0].region.as_deref(), Some("Kildare"));
    assert!(data.update_date.is_none());
}

#[test]
fn missing_name_test() {
    let result = StationsData::from_path(data_path("unnamed.json"), &source::Config::default());
    assert!(matches!(result, Err(source::Error::MissingName(1))));
}

#[test]
fn csv_missing_name_index_test() {
    // Header line is not counted, the third data row is index 2
    let rows = "stationName,latitude,longitude\n\
                Maxol Naas,53.2159,-6.6669\n\
                Top Oil Athlone,53.4239,-7.9407\n\
                \x20,52.1345,-8.6451\n";
    let result = StationsData::from_csv(rows.as_bytes(), &source::Config::default());
    let err = result.unwrap_err();
    assert!(matches!(err, source::Error::MissingName(2)));
    assert_eq!(err.to_string(), "Station record at index 2 has no name");
}

#[test]
fn unsupported_format_test() {
    let result = StationsData::from_path(data_path("stations.xml"), &source::Config::default());
    assert!(matches!(result, Err(source::Error::UnsupportedFormat(_))));
}

#[test]
fn missing_file_test() {
    let result = StationsData::from_path(data_path("missing.json"), &source::Config::default());
    assert!(matches!(result, Err(source::Error::Io(_))));
}

#[test]
fn malformed_json_test() {
    let result = StationsData::from_json("{ \"stations\": [".as_bytes());
    assert!(matches!(result, Err(source::Error::Json(_))));
}
