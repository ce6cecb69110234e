//! Cost functions over dense-index orders and id-based tours.

use crate::distance::DistanceOracle;
use crate::error::Result;
use crate::models::{Instance, Tour};

/// Sum of consecutive edge lengths along `order` (no closing edge).
pub fn path_cost<D: DistanceOracle + ?Sized>(order: &[usize], distances: &D) -> f64 {
    order
        .windows(2)
        .map(|w| distances.distance(w[0], w[1]))
        .sum()
}

/// Path cost plus the closing edge `last → first`.
///
/// A single node costs 0; two nodes count their edge twice (`a → b → a`).
pub fn cycle_cost<D: DistanceOracle + ?Sized>(order: &[usize], distances: &D) -> f64 {
    match (order.first(), order.last()) {
        (Some(&first), Some(&last)) if order.len() > 1 => {
            path_cost(order, distances) + distances.distance(last, first)
        }
        _ => 0.0,
    }
}

/// Cost change from reversing positions `i..=j` of `order`.
///
/// Only the two edges entering and leaving the segment change:
///
/// ```text
/// before: a=order[i-1] → b=order[i] … c=order[j] → d=order[j+1]
/// after:  a → c … b → d
/// delta = d(a,c) + d(b,d) − d(a,b) − d(c,d)
/// ```
///
/// On a `closed` order the successor of the last position wraps to
/// position 0; on an open order an edge touching a missing neighbor simply
/// does not exist. Requires `i < j`.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Instance;
/// use u_tsp::distance::{Distances, Metric};
/// use u_tsp::evaluation::{cycle_cost, two_opt_delta};
///
/// // a crossed square: (0,0) → (1,1) → (0,1) → (1,0)
/// let inst = Instance::from_points("x", &[(0.0, 0.0), (1.0, 1.0), (0.0, 1.0), (1.0, 0.0)]).unwrap();
/// let dm = Distances::dense(&inst, Metric::Euclidean);
/// let order = [0, 1, 2, 3];
/// let delta = two_opt_delta(&order, 1, 2, true, &dm);
/// let after = cycle_cost(&[0, 2, 1, 3], &dm);
/// assert!((cycle_cost(&order, &dm) + delta - after).abs() < 1e-10);
/// assert!(delta < 0.0);
/// ```
pub fn two_opt_delta<D: DistanceOracle + ?Sized>(
    order: &[usize],
    i: usize,
    j: usize,
    closed: bool,
    distances: &D,
) -> f64 {
    debug_assert!(i < j && j < order.len());
    let n = order.len();
    if closed && i == 0 && j == n - 1 {
        // whole cycle reversed: same edge set
        return 0.0;
    }
    let b = order[i];
    let c = order[j];

    let prev = if i > 0 {
        Some(order[i - 1])
    } else if closed {
        Some(order[n - 1])
    } else {
        None
    };
    let next = if j + 1 < n {
        Some(order[j + 1])
    } else if closed {
        Some(order[0])
    } else {
        None
    };

    let mut delta = 0.0;
    if let Some(a) = prev {
        delta += distances.distance(a, c) - distances.distance(a, b);
    }
    if let Some(d) = next {
        delta += distances.distance(b, d) - distances.distance(c, d);
    }
    delta
}

/// Evaluates id-based tours against an instance and a distance source.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Instance, Tour};
/// use u_tsp::distance::{Distances, Metric};
/// use u_tsp::evaluation::TourEvaluator;
///
/// let inst = Instance::from_points("line", &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]).unwrap();
/// let dm = Distances::dense(&inst, Metric::Euclidean);
/// let eval = TourEvaluator::new(&inst, &dm);
///
/// assert!((eval.cost(&Tour::closed(vec![1, 2, 3])).unwrap() - 4.0).abs() < 1e-10);
/// assert!((eval.cost(&Tour::open(vec![1, 2, 3])).unwrap() - 2.0).abs() < 1e-10);
/// assert!((eval.sequence_cost(&[1, 2, 3, 1]).unwrap() - 4.0).abs() < 1e-10);
/// ```
pub struct TourEvaluator<'a, D: DistanceOracle + ?Sized> {
    instance: &'a Instance,
    distances: &'a D,
}

impl<'a, D: DistanceOracle + ?Sized> TourEvaluator<'a, D> {
    pub fn new(instance: &'a Instance, distances: &'a D) -> Self {
        Self {
            instance,
            distances,
        }
    }

    /// Total length of `tour`, including the closing edge when it is closed.
    pub fn cost(&self, tour: &Tour) -> Result<f64> {
        let order = self.instance.indices_of(tour.order())?;
        Ok(if tour.is_closed() {
            cycle_cost(&order, self.distances)
        } else {
            path_cost(&order, self.distances)
        })
    }

    /// Sum of consecutive edges of a raw id sequence.
    ///
    /// A sequence whose last id repeats the first already contains its
    /// closing edge; nothing is added.
    pub fn sequence_cost(&self, sequence: &[usize]) -> Result<f64> {
        let order = self.instance.indices_of(sequence)?;
        Ok(path_cost(&order, self.distances))
    }

    /// Cycle cost of an open sequence: adds `last → first` explicitly.
    pub fn cycle_cost(&self, sequence: &[usize]) -> Result<f64> {
        let order = self.instance.indices_of(sequence)?;
        Ok(cycle_cost(&order, self.distances))
    }
}
