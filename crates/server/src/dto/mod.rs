mod options;
mod place;
mod station;
pub use options::*;
pub use place::*;
pub use station::*;
