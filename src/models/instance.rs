//! Problem instance: a named node set with a stable id-to-index mapping.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::models::Node;

/// A TSP instance.
///
/// Nodes keep their input order. Each node gets a dense index (its position
/// in that order); distance oracles, the tour builder, and the optimizer work
/// on dense indices internally and translate back to node ids at the edges.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Instance, Node};
///
/// let inst = Instance::new(
///     "triangle",
///     vec![Node::new(10, 0.0, 0.0), Node::new(20, 3.0, 0.0), Node::new(30, 0.0, 4.0)],
/// ).unwrap();
/// assert_eq!(inst.len(), 3);
/// assert_eq!(inst.index_of(20).unwrap(), 1);
/// assert_eq!(inst.node(2).id(), 30);
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    name: String,
    nodes: Vec<Node>,
    index: HashMap<usize, usize>,
}

impl Instance {
    /// Creates an instance, rejecting duplicate ids and non-finite coordinates.
    pub fn new(name: impl Into<String>, nodes: Vec<Node>) -> Result<Self> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if !node.is_finite() {
                return Err(Error::InvalidCoordinate { id: node.id() });
            }
            if index.insert(node.id(), i).is_some() {
                return Err(Error::DuplicateNode(node.id()));
            }
        }
        Ok(Self {
            name: name.into(),
            nodes,
            index,
        })
    }

    /// Builds an instance from `(x, y)` pairs, numbering nodes from 1.
    pub fn from_points(name: impl Into<String>, points: &[(f64, f64)]) -> Result<Self> {
        let nodes = points
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| Node::new(i + 1, x, y))
            .collect();
        Self::new(name, nodes)
    }

    /// Instance name (empty if the input carried none).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All nodes in input order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Node at a dense index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn node(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    /// Dense index of a node id.
    pub fn index_of(&self, id: usize) -> Result<usize> {
        self.index.get(&id).copied().ok_or(Error::UnknownNode(id))
    }

    /// Translates a sequence of node ids into dense indices.
    pub fn indices_of(&self, ids: &[usize]) -> Result<Vec<usize>> {
        ids.iter().map(|&id| self.index_of(id)).collect()
    }

    /// Translates dense indices back into node ids.
    pub fn ids_of(&self, indices: &[usize]) -> Vec<usize> {
        indices.iter().map(|&i| self.nodes[i].id()).collect()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the instance has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_numbers_from_one() {
        let inst = Instance::from_points("p", &[(0.0, 0.0), (1.0, 1.0)]).expect("valid");
        assert_eq!(inst.name(), "p");
        assert_eq!(inst.nodes()[0].id(), 1);
        assert_eq!(inst.nodes()[1].id(), 2);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = Instance::new("d", vec![Node::new(1, 0.0, 0.0), Node::new(1, 1.0, 0.0)]);
        assert!(matches!(err, Err(Error::DuplicateNode(1))));
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = Instance::new("nan", vec![Node::new(4, f64::NAN, 0.0)]);
        assert!(matches!(err, Err(Error::InvalidCoordinate { id: 4 })));
    }

    #[test]
    fn test_index_round_trip() {
        let inst = Instance::new(
            "r",
            vec![Node::new(5, 0.0, 0.0), Node::new(9, 1.0, 0.0), Node::new(2, 2.0, 0.0)],
        )
        .expect("valid");
        let idx = inst.indices_of(&[2, 5, 9]).expect("known ids");
        assert_eq!(idx, vec![2, 0, 1]);
        assert_eq!(inst.ids_of(&idx), vec![2, 5, 9]);
    }

    #[test]
    fn test_unknown_node() {
        let inst = Instance::from_points("u", &[(0.0, 0.0)]).expect("valid");
        assert!(matches!(inst.index_of(42), Err(Error::UnknownNode(42))));
    }

    #[test]
    fn test_empty() {
        let inst = Instance::new("e", Vec::new()).expect("valid");
        assert!(inst.is_empty());
        assert_eq!(inst.len(), 0);
    }
}
