//! Tour construction.
//!
//! - [`build_tour`] — partition-aware nearest-neighbor: one greedy path per
//!   grid cell, stitched in partition order, O(Σ mᵢ²) for cell sizes mᵢ
//! - [`Selection::Lookahead`] — two-step lookahead variant of the greedy step,
//!   O(Σ mᵢ³)
//!
//! A single-cell grid ([`GridResolution::single`](crate::partition::GridResolution::single))
//! gives the classic unpartitioned nearest-neighbor heuristic.

mod config;
mod nearest_neighbor;

pub use config::{BuilderConfig, Selection, StartPolicy};
pub use nearest_neighbor::{build_tour, Construction, PartitionPath};
