//! Tour evaluator that sums edge distances along a closed node sequence.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Evaluates node sequences against a distance matrix.
///
/// # Examples
///
/// ```
/// use geo_aco::distance::DistanceMatrix;
/// use geo_aco::evaluation::TourEvaluator;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0.0, 1.0, 2.0,
///     1.0, 0.0, 3.0,
///     2.0, 3.0, 0.0,
/// ]).unwrap();
/// let evaluator = TourEvaluator::new(&dm);
/// assert_eq!(evaluator.length(&[0, 1, 2, 0]), 6.0);
/// ```
pub struct TourEvaluator<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> TourEvaluator<'a> {
    /// Creates a new evaluator over the given distances.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }

    /// Sums the distances between consecutive nodes.
    ///
    /// A closed sequence of `N + 1` nodes contributes `N` edges. Sequences
    /// shorter than two nodes have length zero.
    pub fn length(&self, nodes: &[usize]) -> f64 {
        nodes
            .windows(2)
            .map(|w| self.distances.get(w[0], w[1]))
            .sum()
    }

    /// Wraps a closed node sequence into a [`Tour`] carrying its length.
    pub fn build_tour(&self, nodes: Vec<usize>) -> Tour {
        let length = self.length(&nodes);
        Tour::new(nodes, length)
    }
}
