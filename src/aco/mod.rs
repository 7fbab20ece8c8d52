//! Ant colony optimization for closed tours.
//!
//! - [`AcoConfig`] — Run parameters with point-count-derived defaults
//! - [`PheromoneMatrix`] — Learned edge desirability with evaporate + deposit update
//! - [`Ant`] — Pheromone- and distance-weighted stochastic tour construction
//! - [`AcoRunner`] — Iterates ants, updates pheromone, tracks the best tour
//!
//! # Reference
//!
//! Dorigo, M., Maniezzo, V. & Colorni, A. (1996). "Ant system: optimization
//! by a colony of cooperating agents", *IEEE Transactions on Systems, Man,
//! and Cybernetics, Part B* 26(1), 29-41.

mod ant;
mod config;
mod pheromone;
mod runner;

pub use ant::{roulette_select, Ant, Selection, MIN_HEURISTIC_DISTANCE};
pub use config::AcoConfig;
pub use pheromone::PheromoneMatrix;
pub use runner::{AcoRunner, RunResult};
