//! Closed tour and its normalized, externally reported form.

use serde::{Deserialize, Serialize};

/// Offset applied to node indices when reporting labels externally.
const LABEL_OFFSET: usize = 1;

/// A closed Hamiltonian cycle over node indices, with its length.
///
/// The node sequence holds `N + 1` indices: every node exactly once plus a
/// closing copy of the first node.
///
/// # Examples
///
/// ```
/// use geo_aco::models::Tour;
///
/// let tour = Tour::new(vec![2, 0, 1, 2], 3.0);
/// assert_eq!(tour.num_nodes(), 3);
/// assert!(tour.is_valid(3));
///
/// let rotated = tour.rotate_to_origin();
/// assert_eq!(rotated.nodes(), &[0, 1, 2, 0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    nodes: Vec<usize>,
    length: f64,
}

impl Tour {
    /// Creates a tour from a closed node sequence and its length.
    pub fn new(nodes: Vec<usize>, length: f64) -> Self {
        Self { nodes, length }
    }

    /// The closed node sequence (first == last).
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Total length of the cycle.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Number of distinct nodes visited (sequence length minus the closure).
    pub fn num_nodes(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Consecutive `(from, to)` pairs, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }

    /// Returns `true` if the undirected edge `{a, b}` is part of the cycle.
    pub fn contains_edge(&self, a: usize, b: usize) -> bool {
        self.edges()
            .any(|(from, to)| (from == a && to == b) || (from == b && to == a))
    }

    /// Returns `true` if this is a closed cycle visiting each of `0..n` once.
    pub fn is_valid(&self, n: usize) -> bool {
        if n == 0 || self.nodes.len() != n + 1 || self.nodes.first() != self.nodes.last() {
            return false;
        }
        let mut seen = vec![false; n];
        for &node in &self.nodes[..n] {
            if node >= n || seen[node] {
                return false;
            }
            seen[node] = true;
        }
        true
    }

    /// Rotates the cycle so that node 0 leads and re-closes it.
    ///
    /// The cycle itself, and so the length, is unchanged. A sequence that
    /// does not contain node 0 is returned as is.
    pub fn rotate_to_origin(&self) -> Tour {
        let Some(pos) = self.nodes.iter().position(|&n| n == 0) else {
            return self.clone();
        };
        let mut open = self.nodes[..self.num_nodes()].to_vec();
        open.rotate_left(pos);
        if let Some(&first) = open.first() {
            open.push(first);
        }
        Tour::new(open, self.length)
    }

    /// Produces the externally reported form: origin-first, 1-based labels.
    pub fn normalize(&self) -> NormalizedTour {
        let rotated = self.rotate_to_origin();
        NormalizedTour {
            labels: rotated.nodes.iter().map(|&n| n + LABEL_OFFSET).collect(),
            length: self.length,
        }
    }
}

/// A tour as reported to callers: starts at label 1, ends with label 1,
/// with every input index shifted by one.
///
/// # Examples
///
/// ```
/// use geo_aco::models::Tour;
///
/// let result = Tour::new(vec![1, 2, 0, 1], 7.5).normalize();
/// assert_eq!(result.labels(), &[1, 2, 3, 1]);
/// assert_eq!(result.length(), 7.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTour {
    labels: Vec<usize>,
    length: f64,
}

impl NormalizedTour {
    /// 1-based node labels, closed (first == last == 1).
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Total tour length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Converts back to 0-based node indices.
    ///
    /// Returns `None` if any label is below the 1-based range, which can
    /// only happen for a tour deserialized from foreign input.
    pub fn indices(&self) -> Option<Vec<usize>> {
        self.labels
            .iter()
            .map(|&l| l.checked_sub(LABEL_OFFSET))
            .collect()
    }
}
