//! Distance models.
//!
//! - [`Metric`] — Euclidean or Chebyshev, selectable per instance
//! - [`DistanceOracle`] — lookup capability shared by every consumer, with a
//!   min-search wrapper that treats self-distance as `+∞`
//! - [`DistanceMatrix`] — dense precomputed table, O(n²) memory
//! - [`CoordinateOracle`] — on-demand metric evaluation, O(n) memory
//! - [`Distances`] — picks one of the two by instance size

mod matrix;
mod metric;
mod oracle;

pub use matrix::DistanceMatrix;
pub use metric::Metric;
pub use oracle::{CoordinateOracle, DistanceOracle, Distances, DEFAULT_DENSE_LIMIT};
