//! Distance lookup capability.

use tracing::debug;

use crate::distance::{DistanceMatrix, Metric};
use crate::models::Instance;

/// Instances up to this many nodes get a dense matrix by default.
///
/// 6000² `f64` cells is roughly 288 MB, which covers the largest benchmark
/// instances (rl5934) on a workstation.
pub const DEFAULT_DENSE_LIMIT: usize = 6000;

/// Pairwise distance between dense node indices.
///
/// `distance` is the true metric: non-negative, symmetric, zero on the
/// diagonal. `search_distance` is what nearest-unvisited scans must use; it
/// substitutes `+∞` for self-comparisons so a node still present in a scan
/// set is never picked as its own nearest neighbor.
pub trait DistanceOracle {
    /// True metric distance.
    fn distance(&self, from: usize, to: usize) -> f64;

    /// Number of indexable locations.
    fn size(&self) -> usize;

    /// Distance for min-search usage: `+∞` when `from == to`.
    fn search_distance(&self, from: usize, to: usize) -> f64 {
        if from == to {
            f64::INFINITY
        } else {
            self.distance(from, to)
        }
    }

    /// The candidate minimizing `search_distance(from, c)`.
    ///
    /// Ties go to the earliest candidate in slice order. Returns `None` if
    /// `candidates` is empty.
    fn nearest(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for &c in candidates {
            let d = self.search_distance(from, c);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((c, d)),
            }
        }
        best.map(|(c, _)| c)
    }
}

/// On-demand metric evaluation over a coordinate snapshot.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Instance;
/// use u_tsp::distance::{CoordinateOracle, DistanceOracle, Metric};
///
/// let inst = Instance::from_points("p", &[(0.0, 0.0), (3.0, 4.0)]).unwrap();
/// let oracle = CoordinateOracle::new(&inst, Metric::Chebyshev);
/// assert!((oracle.distance(0, 1) - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct CoordinateOracle {
    coords: Vec<(f64, f64)>,
    metric: Metric,
}

impl CoordinateOracle {
    /// Snapshots the instance coordinates in dense-index order.
    pub fn new(instance: &Instance, metric: Metric) -> Self {
        let coords = instance.nodes().iter().map(|n| (n.x(), n.y())).collect();
        Self { coords, metric }
    }

    /// Metric used for every lookup.
    pub fn metric(&self) -> Metric {
        self.metric
    }
}

impl DistanceOracle for CoordinateOracle {
    fn distance(&self, from: usize, to: usize) -> f64 {
        self.metric.between(self.coords[from], self.coords[to])
    }

    fn size(&self) -> usize {
        self.coords.len()
    }
}

/// A distance source chosen by instance size.
///
/// Dense for small and medium instances where O(n²) memory is affordable,
/// on-demand beyond `dense_limit` nodes.
#[derive(Debug, Clone)]
pub enum Distances {
    Dense(DistanceMatrix),
    OnDemand(CoordinateOracle),
}

impl Distances {
    /// Builds the distance source for `instance`.
    pub fn for_instance(instance: &Instance, metric: Metric, dense_limit: usize) -> Self {
        if instance.len() <= dense_limit {
            debug!(
                nodes = instance.len(),
                ?metric,
                "precomputing dense distance matrix"
            );
            Distances::Dense(DistanceMatrix::from_nodes(instance.nodes(), metric))
        } else {
            debug!(
                nodes = instance.len(),
                dense_limit,
                ?metric,
                "instance above dense limit, computing distances on demand"
            );
            Distances::OnDemand(CoordinateOracle::new(instance, metric))
        }
    }

    /// Always precomputes the full matrix.
    pub fn dense(instance: &Instance, metric: Metric) -> Self {
        Distances::Dense(DistanceMatrix::from_nodes(instance.nodes(), metric))
    }

    /// Never precomputes.
    pub fn on_demand(instance: &Instance, metric: Metric) -> Self {
        Distances::OnDemand(CoordinateOracle::new(instance, metric))
    }

    /// Returns `true` if backed by a precomputed matrix.
    pub fn is_dense(&self) -> bool {
        matches!(self, Distances::Dense(_))
    }
}

impl DistanceOracle for Distances {
    #[inline]
    fn distance(&self, from: usize, to: usize) -> f64 {
        match self {
            Distances::Dense(m) => m.get(from, to),
            Distances::OnDemand(o) => o.distance(from, to),
        }
    }

    fn size(&self) -> usize {
        match self {
            Distances::Dense(m) => m.size(),
            Distances::OnDemand(o) => o.size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Instance {
        Instance::from_points("sq", &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])
            .expect("valid")
    }

    #[test]
    fn test_dense_and_on_demand_agree() {
        let inst = square();
        for m in [Metric::Euclidean, Metric::Chebyshev] {
            let dense = Distances::dense(&inst, m);
            let lazy = Distances::on_demand(&inst, m);
            for i in 0..4 {
                for j in 0..4 {
                    assert!((dense.distance(i, j) - lazy.distance(i, j)).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_selection_by_size() {
        let inst = square();
        assert!(Distances::for_instance(&inst, Metric::Euclidean, 4).is_dense());
        assert!(!Distances::for_instance(&inst, Metric::Euclidean, 3).is_dense());
    }

    #[test]
    fn test_search_distance_self_is_infinite() {
        let o = CoordinateOracle::new(&square(), Metric::Euclidean);
        assert_eq!(o.distance(1, 1), 0.0);
        assert_eq!(o.search_distance(1, 1), f64::INFINITY);
    }

    #[test]
    fn test_nearest_tie_goes_to_first_candidate() {
        let o = CoordinateOracle::new(&square(), Metric::Euclidean);
        // from (0,0): (0,1) and (1,0) are both at distance 1
        assert_eq!(o.nearest(0, &[1, 3]), Some(1));
        assert_eq!(o.nearest(0, &[3, 1]), Some(3));
    }

    #[test]
    fn test_size() {
        let inst = square();
        assert_eq!(Distances::dense(&inst, Metric::Euclidean).size(), 4);
        assert_eq!(Distances::on_demand(&inst, Metric::Euclidean).size(), 4);
    }
}
