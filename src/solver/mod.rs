//! End-to-end pipeline: distances → partitioning → construction → 2-opt.

mod config;
mod pipeline;

pub use config::SolverConfig;
pub use pipeline::{solve, SolveReport};
