use chrono::{Duration, TimeZone, Utc};
use cheapfuel::prelude::*;

fn now() -> Timestamp {
    Utc.with_ymd_and_hms(2024, 11, 10, 12, 0, 0).unwrap()
}

fn scenario() -> Vec<Station> {
    vec![
        Station::new("StationA", Coordinate::new(0.0, 0.0))
            .with_diesel_price(1.50)
            .with_last_updated(now()),
        Station::new("StationB", Coordinate::new(0.0, 1.0))
            .with_diesel_price(1.40)
            .with_last_updated(now() - Duration::days(10)),
        Station::new("StationC", Coordinate::new(0.0, 0.01)).with_last_updated(now()),
    ]
}

#[test]
fn end_to_end_test() {
    let stations = scenario();
    let filter_config = FilterConfig::all()
        .within(50.0)
        .freshness(FreshnessMode::RecentOnly);
    let sort_config = SortConfig::new(SortKey::DieselPrice, SortDirection::Ascending);

    let result = compute(
        &stations,
        Some(Coordinate::new(0.0, 0.0)),
        &filter_config,
        &sort_config,
        now(),
    );

    let names: Vec<_> = result.iter().map(|s| s.name.as_ref()).collect();
    assert_eq!(names, ["StationA", "StationC"]);
    assert_eq!(result[0].distance_km, Some(0.0));
    assert_eq!(result[1].distance_km, Some(1.11));
}

#[test]
fn no_reference_location_test() {
    let stations = scenario();
    let result = compute(
        &stations,
        None,
        &FilterConfig::all().within(1.0),
        &SortConfig::default(),
        now(),
    );
    assert_eq!(result.len(), 3);
    assert!(result.iter().all(|s| s.distance_km.is_none()));
    let names: Vec<_> = result.iter().map(|s| s.name.as_ref()).collect();
    assert_eq!(names, ["StationA", "StationB", "StationC"]);
}

#[test]
fn reference_location_annotates_all_test() {
    let stations = scenario();
    let annotated = cheapfuel::pipeline::annotate(&stations, Some(Coordinate::new(0.0, 0.0)));
    let distances: Vec<_> = annotated.iter().map(|s| s.distance_km).collect();
    assert_eq!(distances, [Some(0.0), Some(111.19), Some(1.11)]);
}

#[test]
fn sorted_by_distance_descending_test() {
    let stations = scenario();
    let result = compute(
        &stations,
        Some(Coordinate::new(0.0, 0.0)),
        &FilterConfig::all(),
        &SortConfig::new(SortKey::Distance, SortDirection::Descending),
        now(),
    );
    let names: Vec<_> = result.iter().map(|s| s.name.as_ref()).collect();
    assert_eq!(names, ["StationB", "StationC", "StationA"]);
}

#[test]
fn idempotent_test() {
    let stations = scenario();
    let run = || {
        compute(
            &stations,
            Some(Coordinate::new(0.0, 0.005)),
            &FilterConfig::default(),
            &SortConfig::new(SortKey::DieselPrice, SortDirection::Descending),
            now(),
        )
    };
    assert_eq!(run(), run());
}

#[test]
fn input_untouched_test() {
    let stations = scenario();
    let before = stations.clone();
    let _ = compute(
        &stations,
        Some(Coordinate::new(0.0, 0.0)),
        &FilterConfig::default(),
        &SortConfig::new(SortKey::DieselPrice, SortDirection::Ascending),
        now(),
    );
    assert_eq!(stations, before);
}

#[test]
fn query_builder_matches_compute_test() {
    let stations = scenario();
    let reference = Coordinate::new(0.0, 0.0);
    let filter_config = FilterConfig::all().within(50.0);
    let sort_config = SortConfig::new(SortKey::DieselPrice, SortDirection::Ascending);

    let built = Query::new(&stations)
        .near(reference)
        .filter_by(filter_config)
        .sort_by(sort_config)
        .at(now())
        .run();
    let direct = compute(
        &stations,
        Some(reference),
        &filter_config,
        &sort_config,
        now(),
    );
    assert_eq!(built, direct);
}

#[test]
fn empty_dataset_test() {
    let result = Query::new(&[]).near(Coordinate::new(53.0, -6.0)).run();
    assert!(result.is_empty());
}
