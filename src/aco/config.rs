//! ACO configuration.

use serde::{Deserialize, Serialize};

use crate::error::{AcoError, Result};

/// Parameters for an ant colony run and for best-of-runs selection.
///
/// `ants` and `iterations` default to values derived from the number of
/// points; see [`ants_for`](Self::ants_for) and
/// [`iterations_for`](Self::iterations_for).
///
/// # Examples
///
/// ```
/// use geo_aco::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.ants_for(10), 10);
/// assert_eq!(config.iterations_for(10), 102);
///
/// let config = config.with_ants(4).with_iterations(20).with_seed(7);
/// assert_eq!(config.ants_for(10), 4);
/// assert_eq!(config.iterations_for(10), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcoConfig {
    /// Ants per iteration. `None` means one ant per point.
    pub ants: Option<usize>,
    /// Iterations per run. `None` means `round(100 + 0.2 * ants)`.
    pub iterations: Option<usize>,
    /// Pheromone exponent.
    pub alpha: f64,
    /// Heuristic (inverse distance) exponent.
    pub beta: f64,
    /// Evaporation rate `p`, expected in (0, 1).
    pub evaporation: f64,
    /// Deposit strength `q`, expected > 0.
    pub deposit: f64,
    /// Pheromone level every edge starts with.
    pub initial_pheromone: f64,
    /// Independent runs for best-of selection.
    pub runs: usize,
    /// Seed for a reproducible random stream.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            ants: None,
            iterations: None,
            alpha: 1.5,
            beta: 1.2,
            evaporation: 0.6,
            deposit: 10.0,
            initial_pheromone: 1.0,
            runs: 5,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets a fixed ant count.
    pub fn with_ants(mut self, ants: usize) -> Self {
        self.ants = Some(ants);
        self
    }

    /// Sets a fixed iteration count.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Sets the pheromone exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the heuristic exponent.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate.
    pub fn with_evaporation(mut self, evaporation: f64) -> Self {
        self.evaporation = evaporation;
        self
    }

    /// Sets the deposit strength.
    pub fn with_deposit(mut self, deposit: f64) -> Self {
        self.deposit = deposit;
        self
    }

    /// Sets the number of independent runs.
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Ant count for a problem with `num_points` points.
    pub fn ants_for(&self, num_points: usize) -> usize {
        self.ants.unwrap_or(num_points)
    }

    /// Iteration count for a problem with `num_points` points.
    pub fn iterations_for(&self, num_points: usize) -> usize {
        self.iterations
            .unwrap_or_else(|| (100.0 + 0.2 * self.ants_for(num_points) as f64).round() as usize)
    }

    /// Rejects counts that would leave a run with nothing to report.
    ///
    /// Numeric parameters (`alpha`, `beta`, `evaporation`, `deposit`) are
    /// taken as given.
    pub fn validate(&self, num_points: usize) -> Result<()> {
        if self.ants_for(num_points) == 0 {
            return Err(AcoError::invalid_config("ant count must be at least 1"));
        }
        if self.iterations_for(num_points) == 0 {
            return Err(AcoError::invalid_config(
                "iteration count must be at least 1",
            ));
        }
        Ok(())
    }
}
