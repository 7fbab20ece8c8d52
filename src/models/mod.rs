//! Domain model types for geographic tour problems.
//!
//! Points are identified by their position in the input sequence. Tours are
//! closed cycles over those positions, and a normalized tour is the external
//! 1-based, origin-first view of a tour.

mod point;
mod tour;

pub use point::{Point, EARTH_RADIUS_KM};
pub use tour::{NormalizedTour, Tour};
