//! # u-tsp
//!
//! Heuristic solver for Euclidean and Chebyshev TSP benchmark instances:
//! grid-partitioned nearest-neighbor construction followed by time-budgeted
//! 2-opt, with cost evaluation and gap reporting against known optima.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Node, Instance, Tour)
//! - [`distance`] — Metrics and distance lookup (dense matrix or on demand)
//! - [`partition`] — Grid partitioning of the bounding box
//! - [`constructive`] — Partition-aware nearest-neighbor construction
//! - [`evaluation`] — Tour cost and 2-opt move deltas
//! - [`local_search`] — Anytime 2-opt
//! - [`quality`] — Gap against known optimal costs
//! - [`tsplib`] — TSPLIB coordinate file reader
//! - [`solver`] — End-to-end pipeline
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use u_tsp::models::Instance;
//! use u_tsp::local_search::TwoOptConfig;
//! use u_tsp::solver::{solve, SolverConfig};
//!
//! let inst = Instance::from_points(
//!     "square",
//!     &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)],
//! ).unwrap();
//! let config = SolverConfig::default()
//!     .with_two_opt(TwoOptConfig::default().with_time_budget(Duration::from_millis(200)));
//! let report = solve(&inst, &config).unwrap();
//! assert!((report.cost - 4.0).abs() < 1e-10);
//! ```

pub mod constructive;
pub mod distance;
mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
pub mod partition;
pub mod quality;
pub mod solver;
pub mod tsplib;

pub use error::{Error, Result};
