//! Dense distance matrix.

use crate::distance::{DistanceOracle, Metric};
use crate::models::Node;

/// A dense n×n distance matrix stored in row-major order.
///
/// Indexed by the dense node index of an [`Instance`](crate::models::Instance),
/// so the id-to-index mapping must outlive the matrix unchanged.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Node;
/// use u_tsp::distance::{DistanceMatrix, DistanceOracle, Metric};
///
/// let nodes = vec![
///     Node::new(1, 0.0, 0.0),
///     Node::new(2, 3.0, 4.0),
///     Node::new(3, 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_nodes(&nodes, Metric::Euclidean);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.search_distance(1, 1), f64::INFINITY);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the matrix for `nodes` (in dense-index order) under `metric`.
    pub fn from_nodes(nodes: &[Node], metric: Metric) -> Self {
        let n = nodes.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = metric.nodes(&nodes[i], &nodes[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance between dense indices `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from `from` to `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl DistanceOracle for DistanceMatrix {
    fn distance(&self, from: usize, to: usize) -> f64 {
        self.get(from, to)
    }

    fn size(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_nodes() -> Vec<Node> {
        vec![
            Node::new(1, 0.0, 0.0),
            Node::new(2, 3.0, 4.0),
            Node::new(3, 0.0, 8.0),
        ]
    }

    #[test]
    fn test_from_nodes_euclidean() {
        let dm = DistanceMatrix::from_nodes(&sample_nodes(), Metric::Euclidean);
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.get(0, 0)).abs() < 1e-10);
    }

    #[test]
    fn test_from_nodes_chebyshev() {
        let dm = DistanceMatrix::from_nodes(&sample_nodes(), Metric::Chebyshev);
        assert!((dm.get(0, 1) - 4.0).abs() < 1e-10);
        assert!((dm.get(1, 2) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_symmetric() {
        for m in [Metric::Euclidean, Metric::Chebyshev] {
            let dm = DistanceMatrix::from_nodes(&sample_nodes(), m);
            for i in 0..dm.size() {
                assert_eq!(dm.get(i, i), 0.0);
                for j in 0..dm.size() {
                    assert_eq!(dm.get(i, j), dm.get(j, i));
                }
            }
        }
    }

    #[test]
    fn test_search_distance_sentinel() {
        let dm = DistanceMatrix::from_nodes(&sample_nodes(), Metric::Euclidean);
        assert_eq!(dm.distance(2, 2), 0.0);
        assert_eq!(dm.search_distance(2, 2), f64::INFINITY);
        assert!((dm.search_distance(0, 1) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_nearest() {
        let dm = DistanceMatrix::from_nodes(&sample_nodes(), Metric::Euclidean);
        assert_eq!(dm.nearest(0, &[1, 2]), Some(1));
        assert_eq!(dm.nearest(0, &[2]), Some(2));
        assert_eq!(dm.nearest(0, &[]), None);
        // self is never chosen while another candidate remains
        assert_eq!(dm.nearest(0, &[0, 2]), Some(2));
    }
}
