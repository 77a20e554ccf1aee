use cheapfuel::shared::geo::{Coordinate, Distance, distance_km};

const DUBLIN: Coordinate = Coordinate::new(53.3498, -6.2603);
const CORK: Coordinate = Coordinate::new(51.8985, -8.4756);
const GALWAY: Coordinate = Coordinate::new(53.2707, -9.0568);

#[test]
fn distance_identity_test() {
    assert_eq!(distance_km(&DUBLIN, &DUBLIN), 0.0);
    assert_eq!(distance_km(&Coordinate::default(), &Coordinate::default()), 0.0);
}

#[test]
fn distance_symmetry_test() {
    assert_eq!(distance_km(&DUBLIN, &CORK), distance_km(&CORK, &DUBLIN));
    assert_eq!(distance_km(&GALWAY, &CORK), distance_km(&CORK, &GALWAY));
}

#[test]
fn distance_known_values_test() {
    assert_eq!(distance_km(&DUBLIN, &CORK), 219.99);
    assert_eq!(distance_km(&DUBLIN, &GALWAY), 185.99);
    assert_eq!(
        distance_km(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 1.0)),
        111.19
    );
    assert_eq!(
        distance_km(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 0.01)),
        1.11
    );
}

#[test]
fn distance_two_decimals_test() {
    let d = distance_km(&DUBLIN, &Coordinate::new(53.2, -6.1));
    let scaled = d * 100.0;
    assert!((scaled - scaled.round()).abs() < 1e-6);
}

#[test]
fn distance_unrounded_test() {
    let d = DUBLIN.distance(&CORK);
    assert!((d.as_kilometers() - 219.985).abs() < 0.001);
    assert!(d > Distance::from_kilometers(219.0));
}

#[test]
fn distance_nan_test() {
    let d = distance_km(&Coordinate::new(f64::NAN, 0.0), &DUBLIN);
    assert!(d.is_nan());
}
