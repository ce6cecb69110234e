//! Tour type.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::Instance;

/// An ordered visiting sequence of node ids, optionally closed into a cycle.
///
/// The closing duplicate is not stored: `order` holds each id once and
/// `closed` records whether the edge `last → first` belongs to the tour.
/// [`Tour::sequence`] renders the closed form with the first id repeated.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Tour;
///
/// let t = Tour::from_sequence(vec![1, 2, 3, 1]);
/// assert!(t.is_closed());
/// assert_eq!(t.order(), &[1, 2, 3]);
/// assert_eq!(t.sequence(), vec![1, 2, 3, 1]);
///
/// let open = Tour::from_sequence(vec![1, 2, 3]);
/// assert!(!open.is_closed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    order: Vec<usize>,
    closed: bool,
}

impl Tour {
    /// An open path over the given ids.
    pub fn open(order: Vec<usize>) -> Self {
        Self {
            order,
            closed: false,
        }
    }

    /// A cycle over the given ids (no closing duplicate expected).
    pub fn closed(order: Vec<usize>) -> Self {
        Self {
            order,
            closed: true,
        }
    }

    /// Interprets a raw sequence: a repeated first id at the end marks a cycle.
    pub fn from_sequence(mut sequence: Vec<usize>) -> Self {
        let closed = sequence.len() >= 2 && sequence.first() == sequence.last();
        if closed {
            sequence.pop();
        }
        Self {
            order: sequence,
            closed,
        }
    }

    /// Visiting order, each id once.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Consumes the tour, returning the visiting order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// Returns `true` if the tour returns to its first node.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The tour as a sequence, with the first id appended when closed.
    pub fn sequence(&self) -> Vec<usize> {
        let mut seq = self.order.clone();
        if self.closed {
            if let Some(&first) = self.order.first() {
                seq.push(first);
            }
        }
        seq
    }

    /// Number of distinct nodes visited.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits no nodes.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Checks that the tour visits every node of `instance` exactly once.
    pub fn validate(&self, instance: &Instance) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.order.len());
        for &id in &self.order {
            instance.index_of(id)?;
            if !seen.insert(id) {
                return Err(Error::DuplicateNode(id));
            }
        }
        if let Some(missing) = instance.nodes().iter().find(|n| !seen.contains(&n.id())) {
            return Err(Error::UnknownNode(missing.id()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sequence_closed() {
        let t = Tour::from_sequence(vec![4, 5, 4]);
        assert!(t.is_closed());
        assert_eq!(t.order(), &[4, 5]);
        assert_eq!(t.sequence(), vec![4, 5, 4]);
    }

    #[test]
    fn test_from_sequence_single_node() {
        let t = Tour::from_sequence(vec![9]);
        assert!(!t.is_closed());
        assert_eq!(t.len(), 1);

        let c = Tour::from_sequence(vec![9, 9]);
        assert!(c.is_closed());
        assert_eq!(c.order(), &[9]);
    }

    #[test]
    fn test_empty_sequence() {
        let t = Tour::closed(Vec::new());
        assert!(t.is_empty());
        assert!(t.sequence().is_empty());
    }

    #[test]
    fn test_validate() {
        let inst = Instance::from_points("v", &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)])
            .expect("valid");
        assert!(Tour::closed(vec![3, 1, 2]).validate(&inst).is_ok());
        assert!(matches!(
            Tour::closed(vec![1, 1, 2]).validate(&inst),
            Err(Error::DuplicateNode(1))
        ));
        assert!(matches!(
            Tour::closed(vec![1, 2]).validate(&inst),
            Err(Error::UnknownNode(3))
        ));
        assert!(matches!(
            Tour::closed(vec![1, 2, 7]).validate(&inst),
            Err(Error::UnknownNode(7))
        ));
    }
}
