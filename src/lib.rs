//! # geo-aco
//!
//! Ant colony optimization for the traveling salesman problem over
//! geographic coordinates.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Tour, NormalizedTour)
//! - [`distance`] — Great-circle distance matrix
//! - [`evaluation`] — Tour length evaluation
//! - [`aco`] — Pheromone matrix, ants, and the iterative runner
//! - [`driver`] — Best-of-runs selection
//! - [`io`] — Point input and result output formats
//! - [`error`] — Error type shared by all of the above

pub mod aco;
pub mod distance;
pub mod driver;
pub mod error;
pub mod evaluation;
pub mod io;
pub mod models;

pub use error::{AcoError, Result};
