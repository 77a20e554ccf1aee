//! Nearby fuel station lookup.
//!
//! The [`pipeline`] ranks a station dataset against a reference location:
//! it annotates each station with its distance, drops stations outside the
//! radius or with stale prices, then sorts what is left by distance or price.
//! The [`source`] module loads the dataset from a JSON snapshot or a CSV file.

pub mod pipeline;
pub mod prelude;
pub mod shared;
pub mod source;
pub mod station;
