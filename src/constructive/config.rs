//! Tour builder configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::partition::{BoundaryPolicy, GridResolution};

/// How each partition picks the node its path starts from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartPolicy {
    /// First unvisited member in instance order.
    #[default]
    First,
    /// Uniformly random unvisited member, drawn from a generator seeded once
    /// per construction. One draw per non-empty partition.
    Random { seed: u64 },
    /// A fixed node id. Applies to the partition that visits it; every other
    /// partition falls back to [`StartPolicy::First`].
    Node(usize),
}

/// Rule for picking the next node inside a partition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// Nearest unvisited member.
    #[default]
    Nearest,
    /// Two-step lookahead: the member `v` minimizing
    /// `d(current, v) + min_w d(v, w)` over the other unvisited members `w`.
    /// Falls back to [`Selection::Nearest`] when one member is left.
    Lookahead,
}

/// Configuration for [`build_tour`](super::build_tour).
///
/// # Examples
///
/// ```
/// use u_tsp::constructive::{BuilderConfig, Selection, StartPolicy};
/// use u_tsp::partition::{BoundaryPolicy, GridResolution};
///
/// let config = BuilderConfig::default()
///     .with_resolution(GridResolution::square(4))
///     .with_boundary(BoundaryPolicy::HalfOpen)
///     .with_start(StartPolicy::Random { seed: 42 })
///     .with_selection(Selection::Lookahead)
///     .with_close_tour(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Grid cells per axis.
    pub resolution: GridResolution,

    /// Assignment of nodes on internal cell edges.
    pub boundary: BoundaryPolicy,

    /// Start node selection per partition.
    pub start: StartPolicy,

    /// Next-node rule inside each partition.
    #[serde(default)]
    pub selection: Selection,

    /// Count the return edge to each partition's start in that partition's
    /// path cost. The global tour never repeats an id.
    pub close_partitions: bool,

    /// Close the global tour back to its first node.
    pub close_tour: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            resolution: GridResolution::default(),
            boundary: BoundaryPolicy::default(),
            start: StartPolicy::default(),
            selection: Selection::default(),
            close_partitions: false,
            close_tour: true,
        }
    }
}

impl BuilderConfig {
    pub fn with_resolution(mut self, resolution: GridResolution) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_start(mut self, start: StartPolicy) -> Self {
        self.start = start;
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_close_partitions(mut self, close: bool) -> Self {
        self.close_partitions = close;
        self
    }

    pub fn with_close_tour(mut self, close: bool) -> Self {
        self.close_tour = close;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        self.resolution.validate()
    }
}
