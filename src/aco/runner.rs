//! Single-run ACO orchestration.

use log::{debug, info, trace};
use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::error::{AcoError, Result};
use crate::evaluation::TourEvaluator;
use crate::models::{NormalizedTour, Point, Tour};

use super::ant::Ant;
use super::config::AcoConfig;
use super::pheromone::PheromoneMatrix;

/// Outcome of one ACO run.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Best tour found, origin-first with 1-based labels.
    pub tour: NormalizedTour,
    /// Running best length after each iteration.
    pub history: Vec<f64>,
    /// Ants used per iteration.
    pub ants: usize,
    /// Iterations performed.
    pub iterations: usize,
}

impl RunResult {
    /// Length of the best tour.
    pub fn length(&self) -> f64 {
        self.tour.length()
    }
}

/// Runs the ant colony optimizer.
///
/// Each run owns its distance and pheromone matrices. Per iteration, every
/// ant builds a tour against the current pheromone, the whole batch is
/// evaluated, one evaporate-then-deposit update is applied, and the running
/// best is replaced only on strict improvement.
///
/// # Examples
///
/// ```
/// use geo_aco::aco::{AcoConfig, AcoRunner};
/// use geo_aco::models::Point;
/// use rand::SeedableRng;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let config = AcoConfig::default().with_ants(4).with_iterations(20);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
///
/// let result = AcoRunner::run(&points, &config, &mut rng).unwrap();
/// assert_eq!(result.tour.labels().len(), 5);
/// assert_eq!(result.tour.labels()[0], 1);
/// assert_eq!(result.history.len(), 20);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Builds the great-circle distance matrix for `points` and runs.
    pub fn run<R: Rng + ?Sized>(
        points: &[Point],
        config: &AcoConfig,
        rng: &mut R,
    ) -> Result<RunResult> {
        if points.len() < 2 {
            return Err(AcoError::TooFewPoints {
                count: points.len(),
            });
        }
        let distances = DistanceMatrix::from_points(points);
        Self::run_with_distances(&distances, config, rng)
    }

    /// Runs over a precomputed distance matrix.
    pub fn run_with_distances<R: Rng + ?Sized>(
        distances: &DistanceMatrix,
        config: &AcoConfig,
        rng: &mut R,
    ) -> Result<RunResult> {
        let n = distances.size();
        if n < 2 {
            return Err(AcoError::TooFewPoints { count: n });
        }
        config.validate(n)?;
        let ants = config.ants_for(n);
        let iterations = config.iterations_for(n);

        let evaluator = TourEvaluator::new(distances);
        let mut pheromone = PheromoneMatrix::new(n, config.initial_pheromone);
        let mut best: Option<Tour> = None;
        let mut history = Vec::with_capacity(iterations);

        for iteration in 0..iterations {
            let tours: Vec<Tour> = {
                let ant = Ant::new(distances, &pheromone, config.alpha, config.beta);
                (0..ants)
                    .map(|_| evaluator.build_tour(ant.construct(&mut *rng)))
                    .collect()
            };

            pheromone.update(&tours, config.evaporation, config.deposit);

            if let Some(candidate) = shortest(&tours) {
                trace!("iteration {iteration}: shortest {:.3}", candidate.length());
                let improved = best
                    .as_ref()
                    .map_or(true, |b| candidate.length() < b.length());
                if improved {
                    debug!(
                        "iteration {iteration}: new best {:.3}",
                        candidate.length()
                    );
                    best = Some(candidate.clone());
                }
            }
            if let Some(b) = &best {
                history.push(b.length());
            }
        }

        let best = best.ok_or_else(|| AcoError::invalid_config("no tours were constructed"))?;
        info!(
            "run finished: {n} points, {ants} ants, {iterations} iterations, length {:.3}",
            best.length()
        );

        Ok(RunResult {
            tour: best.normalize(),
            history,
            ants,
            iterations,
        })
    }
}

/// First tour of minimum length.
fn shortest(tours: &[Tour]) -> Option<&Tour> {
    tours
        .iter()
        .min_by(|a, b| a.length().total_cmp(&b.length()))
}
