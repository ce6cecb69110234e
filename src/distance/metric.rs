//! Planar metrics.

use serde::{Deserialize, Serialize};

use crate::models::Node;

/// Distance metric between two planar coordinates.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::Metric;
///
/// assert!((Metric::Euclidean.between((0.0, 0.0), (3.0, 4.0)) - 5.0).abs() < 1e-10);
/// assert!((Metric::Chebyshev.between((0.0, 0.0), (3.0, 4.0)) - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// `sqrt(Δx² + Δy²)`.
    #[default]
    Euclidean,
    /// `max(|Δx|, |Δy|)`.
    Chebyshev,
}

impl Metric {
    /// Distance between two `(x, y)` points.
    pub fn between(self, a: (f64, f64), b: (f64, f64)) -> f64 {
        let dx = a.0 - b.0;
        let dy = a.1 - b.1;
        match self {
            Metric::Euclidean => dx.hypot(dy),
            Metric::Chebyshev => dx.abs().max(dy.abs()),
        }
    }

    /// Distance between two nodes.
    pub fn nodes(self, a: &Node, b: &Node) -> f64 {
        self.between((a.x(), a.y()), (b.x(), b.y()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean() {
        let d = Metric::Euclidean.between((1.0, 1.0), (4.0, 5.0));
        assert!((d - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_chebyshev() {
        let d = Metric::Chebyshev.between((1.0, 1.0), (-2.0, 2.0));
        assert!((d - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_on_identical_points() {
        for m in [Metric::Euclidean, Metric::Chebyshev] {
            assert_eq!(m.between((2.5, -1.0), (2.5, -1.0)), 0.0);
        }
    }

    #[test]
    fn test_symmetric() {
        let a = Node::new(1, 0.3, 7.0);
        let b = Node::new(2, -4.0, 1.5);
        for m in [Metric::Euclidean, Metric::Chebyshev] {
            assert_eq!(m.nodes(&a, &b), m.nodes(&b, &a));
        }
    }

    #[test]
    fn test_large_coordinates_stay_finite() {
        let d = Metric::Euclidean.between((0.0, 0.0), (3e200, 4e200));
        assert!(d.is_finite());
        assert!((d / 5e200 - 1.0).abs() < 1e-12);
        assert_eq!(Metric::Chebyshev.between((0.0, 0.0), (3e200, 4e200)), 4e200);
    }

    #[test]
    fn test_default_is_euclidean() {
        assert_eq!(Metric::default(), Metric::Euclidean);
    }
}
