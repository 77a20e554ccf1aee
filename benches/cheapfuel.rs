use chrono::{Duration, Utc};
use cheapfuel::prelude::*;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// Roughly the size of the national dataset
const STATION_COUNT: usize = 1_500;

fn synthetic_stations() -> Vec<Station> {
    let now = Utc::now();
    (0..STATION_COUNT)
        .map(|i| {
            let f = i as f64;
            let coordinate = Coordinate::new(51.5 + (f * 0.37) % 4.0, -10.0 + (f * 0.53) % 4.0);
            let mut station = Station::new(format!("Station {i}"), coordinate)
                .with_last_updated(now - Duration::hours((i % 240) as i64));
            if i % 7 != 0 {
                station = station.with_diesel_price(1.5 + (i % 30) as f64 * 0.01);
            }
            if i % 5 != 0 {
                station = station.with_unleaded_price(1.6 + (i % 25) as f64 * 0.01);
            }
            station
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let stations = synthetic_stations();
    let dublin = Coordinate::new(53.3498, -6.2603);

    let mut group = c.benchmark_group("Pipeline");

    group.bench_function("Default view", |b| {
        b.iter(|| black_box(Query::new(&stations).near(dublin).run()))
    });

    group.bench_function("Everything by diesel", |b| {
        b.iter(|| {
            black_box(
                Query::new(&stations)
                    .near(dublin)
                    .filter_by(FilterConfig::all())
                    .sort_by(SortConfig::new(SortKey::DieselPrice, SortDirection::Ascending))
                    .run(),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
