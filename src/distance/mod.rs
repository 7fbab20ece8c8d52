//! Distance matrices.
//!
//! Provides a dense great-circle distance matrix built once per run.

mod matrix;

pub use matrix::DistanceMatrix;
