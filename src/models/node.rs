//! Node type.

use serde::{Deserialize, Serialize};

/// A city in a TSP instance: an integer identifier and a 2D coordinate.
///
/// Nodes are immutable once loaded.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Node;
///
/// let n = Node::new(7, 3.0, 4.0);
/// assert_eq!(n.id(), 7);
/// assert_eq!(n.x(), 3.0);
/// assert_eq!(n.y(), 4.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: usize,
    x: f64,
    y: f64,
}

impl Node {
    /// Creates a new node.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Node identifier, as given by the input.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_accessors() {
        let n = Node::new(3, -1.5, 2.0);
        assert_eq!(n.id(), 3);
        assert_eq!(n.x(), -1.5);
        assert_eq!(n.y(), 2.0);
    }

    #[test]
    fn test_node_finite() {
        assert!(Node::new(1, 0.0, 0.0).is_finite());
        assert!(!Node::new(1, f64::NAN, 0.0).is_finite());
        assert!(!Node::new(1, 0.0, f64::INFINITY).is_finite());
    }
}
