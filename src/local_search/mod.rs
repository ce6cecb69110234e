//! Local search for improving constructed tours.
//!
//! - [`two_opt`] — time-budgeted 2-opt segment reversal with O(1) move
//!   evaluation, anytime termination

mod config;
mod two_opt;

pub use config::TwoOptConfig;
pub use two_opt::{two_opt, Termination, TwoOptResult};
