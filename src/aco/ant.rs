//! Stochastic tour construction for a single ant.
//!
//! # Algorithm
//!
//! The node indices are shuffled and the last one is taken as the start.
//! From the current node `i`, every unvisited node `j` gets the weight
//!
//! ```text
//! w(j) = tau[i][j]^alpha * (1 / max(d[i][j], 1e-5))^beta
//! ```
//!
//! and the next node is drawn by roulette over the unvisited list in its
//! shuffled order. The cycle is closed by returning to the start.
//!
//! # Complexity
//!
//! O(n²) per tour.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::distance::DistanceMatrix;

use super::pheromone::PheromoneMatrix;

/// Distance floor used in the heuristic term, so coincident points get a
/// large but finite attraction.
pub const MIN_HEURISTIC_DISTANCE: f64 = 1e-5;

/// Outcome of a roulette draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Chosen proportionally to its weight.
    Roulette(usize),
    /// Weights carried no usable mass; the last candidate is taken.
    Fallback(usize),
}

impl Selection {
    /// Position of the chosen candidate.
    pub fn index(self) -> usize {
        match self {
            Selection::Roulette(i) | Selection::Fallback(i) => i,
        }
    }
}

/// Picks a candidate position with probability proportional to its weight.
///
/// When the weights sum to zero (or to anything other than a finite
/// positive number) no random value is drawn and the last position is
/// returned as [`Selection::Fallback`]. `weights` must not be empty.
///
/// # Examples
///
/// ```
/// use geo_aco::aco::{roulette_select, Selection};
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// assert_eq!(roulette_select(&[0.0, 0.0, 0.0], &mut rng), Selection::Fallback(2));
/// assert_eq!(roulette_select(&[0.0, 5.0, 0.0], &mut rng), Selection::Roulette(1));
/// ```
pub fn roulette_select<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Selection {
    let last = weights.len().saturating_sub(1);
    let total: f64 = weights.iter().sum();
    if !(total > 0.0 && total.is_finite()) {
        return Selection::Fallback(last);
    }
    let r: f64 = rng.random();
    Selection::Roulette(spin(weights, total, r).unwrap_or(last))
}

/// First position whose cumulative normalized weight reaches `r`.
///
/// `None` only when rounding keeps the running sum just below `r`.
fn spin(weights: &[f64], total: f64, r: f64) -> Option<usize> {
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w / total;
        if cumulative >= r {
            return Some(i);
        }
    }
    None
}

/// One ant: builds a closed tour from read-only distance and pheromone data.
///
/// # Examples
///
/// ```
/// use geo_aco::aco::{Ant, PheromoneMatrix};
/// use geo_aco::distance::DistanceMatrix;
/// use geo_aco::models::{Point, Tour};
/// use rand::SeedableRng;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// let pheromone = PheromoneMatrix::new(4, 1.0);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
///
/// let nodes = Ant::new(&dm, &pheromone, 1.5, 1.2).construct(&mut rng);
/// assert!(Tour::new(nodes, 0.0).is_valid(4));
/// ```
pub struct Ant<'a> {
    distances: &'a DistanceMatrix,
    pheromone: &'a PheromoneMatrix,
    alpha: f64,
    beta: f64,
}

impl<'a> Ant<'a> {
    /// Creates an ant over shared matrices with the given exponents.
    pub fn new(
        distances: &'a DistanceMatrix,
        pheromone: &'a PheromoneMatrix,
        alpha: f64,
        beta: f64,
    ) -> Self {
        Self {
            distances,
            pheromone,
            alpha,
            beta,
        }
    }

    /// Selection weight of moving from `from` to `to`.
    pub fn edge_weight(&self, from: usize, to: usize) -> f64 {
        let distance = self.distances.get(from, to).max(MIN_HEURISTIC_DISTANCE);
        self.pheromone.get(from, to).powf(self.alpha) * (1.0 / distance).powf(self.beta)
    }

    /// Builds a closed tour of `n + 1` node indices.
    ///
    /// Returns an empty sequence for an empty matrix.
    pub fn construct<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<usize> {
        let n = self.distances.size();
        let mut unvisited: Vec<usize> = (0..n).collect();
        unvisited.shuffle(rng);

        let Some(start) = unvisited.pop() else {
            return Vec::new();
        };
        let mut path = Vec::with_capacity(n + 1);
        path.push(start);

        let mut weights = Vec::with_capacity(n);
        let mut current = start;
        while !unvisited.is_empty() {
            weights.clear();
            weights.extend(unvisited.iter().map(|&j| self.edge_weight(current, j)));
            let chosen = roulette_select(&weights, rng).index();
            current = unvisited.remove(chosen);
            path.push(current);
        }

        path.push(start);
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Point, Tour};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn line_matrix(n: usize) -> DistanceMatrix {
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                dm.set(i, j, (i as f64 - j as f64).abs());
            }
        }
        dm
    }

    #[test]
    fn test_spin_cumulative() {
        let weights = [1.0, 1.0, 2.0];
        assert_eq!(spin(&weights, 4.0, 0.0), Some(0));
        assert_eq!(spin(&weights, 4.0, 0.25), Some(0));
        assert_eq!(spin(&weights, 4.0, 0.3), Some(1));
        assert_eq!(spin(&weights, 4.0, 0.5), Some(1));
        assert_eq!(spin(&weights, 4.0, 0.51), Some(2));
        assert_eq!(spin(&weights, 4.0, 0.99), Some(2));
    }

    #[test]
    fn test_spin_skips_zero_weight() {
        assert_eq!(spin(&[0.0, 3.0], 3.0, 0.0), Some(0));
        assert_eq!(spin(&[0.0, 3.0], 3.0, 0.1), Some(1));
    }

    #[test]
    fn test_roulette_zero_sum_fallback() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(roulette_select(&[0.0], &mut rng), Selection::Fallback(0));
        assert_eq!(
            roulette_select(&[0.0, 0.0, 0.0, 0.0], &mut rng),
            Selection::Fallback(3)
        );
    }

    #[test]
    fn test_roulette_single_positive() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..50 {
            assert_eq!(
                roulette_select(&[0.0, 0.0, 1e-300, 0.0], &mut rng),
                Selection::Roulette(2)
            );
        }
    }

    #[test]
    fn test_roulette_frequencies() {
        let mut rng = StdRng::seed_from_u64(42);
        let weights = [1.0, 3.0];
        let mut counts = [0usize; 2];
        for _ in 0..10_000 {
            counts[roulette_select(&weights, &mut rng).index()] += 1;
        }
        let share = counts[1] as f64 / 10_000.0;
        assert!((share - 0.75).abs() < 0.03, "share = {share}");
    }

    #[test]
    fn test_edge_weight() {
        let dm = line_matrix(3);
        let pheromone = PheromoneMatrix::new(3, 2.0);
        let ant = Ant::new(&dm, &pheromone, 1.0, 1.0);
        // 2^1 * (1/2)^1
        assert!((ant.edge_weight(0, 2) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_edge_weight_coincident_is_finite() {
        let points = vec![Point::new(5.0, 5.0), Point::new(5.0, 5.0)];
        let dm = DistanceMatrix::from_points(&points);
        let pheromone = PheromoneMatrix::new(2, 1.0);
        let ant = Ant::new(&dm, &pheromone, 1.5, 1.2);
        let w = ant.edge_weight(0, 1);
        assert!(w.is_finite());
        assert!((w - (1.0 / MIN_HEURISTIC_DISTANCE).powf(1.2)).abs() / w < 1e-12);
    }

    #[test]
    fn test_construct_valid_tour() {
        let dm = line_matrix(8);
        let pheromone = PheromoneMatrix::new(8, 1.0);
        let ant = Ant::new(&dm, &pheromone, 1.5, 1.2);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let nodes = ant.construct(&mut rng);
            assert!(Tour::new(nodes, 0.0).is_valid(8));
        }
    }

    #[test]
    fn test_construct_start_varies() {
        let dm = line_matrix(6);
        let pheromone = PheromoneMatrix::new(6, 1.0);
        let ant = Ant::new(&dm, &pheromone, 1.0, 1.0);
        let mut rng = StdRng::seed_from_u64(3);
        let starts: std::collections::HashSet<usize> =
            (0..50).map(|_| ant.construct(&mut rng)[0]).collect();
        assert!(starts.len() > 1);
    }

    #[test]
    fn test_construct_zero_pheromone_terminates() {
        let dm = line_matrix(5);
        let pheromone = PheromoneMatrix::new(5, 0.0);
        let ant = Ant::new(&dm, &pheromone, 1.5, 1.2);
        let mut rng = StdRng::seed_from_u64(11);
        let nodes = ant.construct(&mut rng);
        assert!(Tour::new(nodes, 0.0).is_valid(5));
    }

    #[test]
    fn test_construct_two_nodes() {
        let dm = line_matrix(2);
        let pheromone = PheromoneMatrix::new(2, 1.0);
        let mut rng = StdRng::seed_from_u64(5);
        let nodes = Ant::new(&dm, &pheromone, 1.5, 1.2).construct(&mut rng);
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0], nodes[2]);
        assert_ne!(nodes[0], nodes[1]);
    }

    #[test]
    fn test_construct_empty() {
        let dm = DistanceMatrix::new(0);
        let pheromone = PheromoneMatrix::new(0, 1.0);
        let mut rng = StdRng::seed_from_u64(5);
        assert!(Ant::new(&dm, &pheromone, 1.0, 1.0).construct(&mut rng).is_empty());
    }

    #[test]
    fn test_construct_seeded_reproducible() {
        let dm = line_matrix(10);
        let pheromone = PheromoneMatrix::new(10, 1.0);
        let ant = Ant::new(&dm, &pheromone, 1.5, 1.2);
        let a = ant.construct(&mut StdRng::seed_from_u64(99));
        let b = ant.construct(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
