//! Best-of-runs driver.
//!
//! Repeats independent ACO runs on the same points and keeps the shortest
//! result. Runs share nothing but the random stream, which is consumed in
//! run order so seeded invocations are reproducible.

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::aco::{AcoConfig, AcoRunner, RunResult};
use crate::distance::DistanceMatrix;
use crate::error::{AcoError, Result};
use crate::models::Point;

/// Winner of several independent runs.
#[derive(Debug, Clone)]
pub struct BestOfRuns {
    /// The shortest run.
    pub best: RunResult,
    /// Zero-based position of the winning run.
    pub best_run: usize,
    /// Best length of every run, in run order.
    pub lengths: Vec<f64>,
}

/// Creates the random stream described by `config`: seeded when
/// `config.seed` is set, OS-seeded otherwise.
pub fn create_rng(config: &AcoConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Performs `config.runs` runs with a stream derived from `config`.
///
/// # Examples
///
/// ```
/// use geo_aco::aco::AcoConfig;
/// use geo_aco::driver::solve;
/// use geo_aco::models::Point;
///
/// let points = vec![
///     Point::new(55.75, 37.61),
///     Point::new(59.93, 30.33),
///     Point::new(56.32, 44.00),
/// ];
/// let config = AcoConfig::default().with_runs(3).with_iterations(10).with_seed(1);
/// let outcome = solve(&points, &config).unwrap();
/// assert_eq!(outcome.lengths.len(), 3);
/// assert_eq!(outcome.best.tour.labels()[0], 1);
/// ```
pub fn solve(points: &[Point], config: &AcoConfig) -> Result<BestOfRuns> {
    let mut rng = create_rng(config);
    best_of_runs(points, config, &mut rng)
}

/// Performs `config.runs` sequential runs and keeps the shortest.
///
/// Ties keep the earlier run.
pub fn best_of_runs<R: Rng + ?Sized>(
    points: &[Point],
    config: &AcoConfig,
    rng: &mut R,
) -> Result<BestOfRuns> {
    fold_runs(config.runs, || AcoRunner::run(points, config, &mut *rng))
}

/// Same as [`best_of_runs`] over a precomputed distance matrix.
pub fn best_of_runs_with_distances<R: Rng + ?Sized>(
    distances: &DistanceMatrix,
    config: &AcoConfig,
    rng: &mut R,
) -> Result<BestOfRuns> {
    fold_runs(config.runs, || {
        AcoRunner::run_with_distances(distances, config, &mut *rng)
    })
}

/// Calls `run_once` `runs` times, keeping the first strictly shortest result.
fn fold_runs<F>(runs: usize, mut run_once: F) -> Result<BestOfRuns>
where
    F: FnMut() -> Result<RunResult>,
{
    if runs == 0 {
        return Err(AcoError::invalid_config("run count must be at least 1"));
    }

    let mut lengths = Vec::with_capacity(runs);
    let mut winner: Option<(usize, RunResult)> = None;
    for run in 0..runs {
        let result = run_once()?;
        info!("run {}: length {:.3}", run + 1, result.length());
        info!("run {}: tour {:?}", run + 1, result.tour.labels());
        lengths.push(result.length());

        let better = winner
            .as_ref()
            .map_or(true, |(_, best)| result.length() < best.length());
        if better {
            winner = Some((run, result));
        }
    }

    let (best_run, best) =
        winner.ok_or_else(|| AcoError::invalid_config("run count must be at least 1"))?;
    info!(
        "selected run {}: length {:.3}",
        best_run + 1,
        best.length()
    );
    Ok(BestOfRuns {
        best,
        best_run,
        lengths,
    })
}
