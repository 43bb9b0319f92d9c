//! Pure geometry data shared by listkit crates.

mod geometry;

pub use geometry::*;
