pub use crate::pipeline::{
    FilterConfig, FreshnessMode, Query, SortConfig, SortDirection, SortKey, compute,
};
pub use crate::shared::{Coordinate, Distance, FreshnessBand, Timestamp, days_ago, distance_km};
pub use crate::source::StationsData;
pub use crate::station::{AnnotatedStation, Station};
