//! Pheromone matrix and its evaporate-then-deposit update.

use crate::models::Tour;

/// A dense n×n matrix of pheromone intensities stored in row-major order.
///
/// The matrix is only written by [`update`](Self::update) between
/// iterations; ants read it through a shared reference while building tours.
///
/// # Examples
///
/// ```
/// use geo_aco::aco::PheromoneMatrix;
/// use geo_aco::models::Tour;
///
/// let mut pheromone = PheromoneMatrix::new(3, 1.0);
/// let tours = vec![Tour::new(vec![0, 1, 2, 0], 5.0)];
/// pheromone.update(&tours, 0.5, 10.0);
///
/// // 1.0 * (1 - 0.5) + 10 / 5
/// assert!((pheromone.get(0, 1) - 2.5).abs() < 1e-12);
/// assert!(pheromone.is_symmetric());
/// ```
#[derive(Debug, Clone)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneMatrix {
    /// Creates a matrix with every entry set to `initial`.
    pub fn new(size: usize, initial: f64) -> Self {
        Self {
            data: vec![initial; size * size],
            size,
        }
    }

    /// Pheromone on the edge from `from` to `to`.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of nodes covered by this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Multiplies every entry by `1 - rate`.
    pub fn evaporate(&mut self, rate: f64) {
        let keep = 1.0 - rate;
        for value in &mut self.data {
            *value *= keep;
        }
    }

    /// Adds `amount` to both directions of every edge of a closed tour.
    pub fn deposit(&mut self, tour: &Tour, amount: f64) {
        for (from, to) in tour.edges() {
            self.data[from * self.size + to] += amount;
            self.data[to * self.size + from] += amount;
        }
    }

    /// Applies one iteration's update: a single whole-matrix evaporation,
    /// then a deposit of `q / length` for each tour.
    pub fn update(&mut self, tours: &[Tour], evaporation: f64, q: f64) {
        self.evaporate(evaporation);
        for tour in tours {
            self.deposit(tour, q / tour.length());
        }
    }

    /// Returns `true` if `[i][j] == [j][i]` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| ((i + 1)..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Returns `true` if no entry is negative.
    pub fn is_non_negative(&self) -> bool {
        self.data.iter().all(|&v| v >= 0.0)
    }
}
