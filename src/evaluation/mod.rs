//! Tour cost evaluation.
//!
//! Full O(n) recomputation ([`TourEvaluator`], [`path_cost`], [`cycle_cost`])
//! and the O(1) cost change of a single 2-opt reversal ([`two_opt_delta`]).

mod cost;

pub use cost::{cycle_cost, path_cost, two_opt_delta, TourEvaluator};
