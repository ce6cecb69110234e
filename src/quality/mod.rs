//! Quality reporting against known optimal tour costs.
//!
//! Reporting only: nothing here feeds back into solving.

mod optima;

pub use optima::{optimal_gap, KnownOptima};
