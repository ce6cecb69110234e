//! Grid partitioner.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Instance, Node};

/// Number of grid cells along each axis.
///
/// # Examples
///
/// ```
/// use u_tsp::partition::GridResolution;
///
/// let r = GridResolution::square(4);
/// assert_eq!(r.cells(), 16);
/// assert!(GridResolution::new(0, 2).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridResolution {
    pub x_cells: usize,
    pub y_cells: usize,
}

impl GridResolution {
    pub fn new(x_cells: usize, y_cells: usize) -> Self {
        Self { x_cells, y_cells }
    }

    /// `k × k` cells.
    pub fn square(k: usize) -> Self {
        Self::new(k, k)
    }

    /// A single cell covering the whole bounding box (no partitioning).
    pub fn single() -> Self {
        Self::new(1, 1)
    }

    /// Total number of cells.
    pub fn cells(&self) -> usize {
        self.x_cells * self.y_cells
    }

    /// Both axes need at least one cell.
    pub fn validate(&self) -> Result<()> {
        if self.x_cells == 0 || self.y_cells == 0 {
            return Err(Error::invalid_config(format!(
                "grid resolution must be at least 1x1, got {}x{}",
                self.x_cells, self.y_cells
            )));
        }
        Ok(())
    }
}

impl Default for GridResolution {
    fn default() -> Self {
        Self::square(2)
    }
}

/// How nodes lying exactly on an internal cell edge are assigned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Every cell is closed on all sides; a node on a shared edge belongs to
    /// every adjacent cell. The tour builder visits it in the first cell (in
    /// partition order) that claims it.
    #[default]
    Inclusive,
    /// Cells are `[min, max)` on each axis, except the last cell per axis
    /// which is closed at the outer bounding-box edge. Every node belongs to
    /// exactly one cell.
    HalfOpen,
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Smallest box containing every node. `None` for an empty slice.
    pub fn enclosing(nodes: &[Node]) -> Option<Self> {
        let first = nodes.first()?;
        let mut b = Bounds {
            min_x: first.x(),
            max_x: first.x(),
            min_y: first.y(),
            max_y: first.y(),
        };
        for n in &nodes[1..] {
            b.min_x = b.min_x.min(n.x());
            b.max_x = b.max_x.max(n.x());
            b.min_y = b.min_y.min(n.y());
            b.max_y = b.max_y.max(n.y());
        }
        Some(b)
    }

    /// Inclusive containment on all four sides.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.min_x <= x && x <= self.max_x && self.min_y <= y && y <= self.max_y
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// One grid cell and the dense indices of the nodes it claims.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    cell: (usize, usize),
    bounds: Bounds,
    members: Vec<usize>,
}

impl Partition {
    /// Grid position `(x_cell, y_cell)`.
    pub fn cell(&self) -> (usize, usize) {
        self.cell
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Dense node indices in instance order.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Splits the instance's bounding box into a grid and assigns nodes to cells.
///
/// Partitions are returned x-major: all y-cells of the first x-interval, then
/// the next x-interval. Every cell is returned, including empty ones; the
/// union of their boxes is exactly the global bounding box. An empty instance
/// yields no partitions.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Instance;
/// use u_tsp::partition::{partition_space, BoundaryPolicy, GridResolution};
///
/// let inst = Instance::from_points(
///     "corners",
///     &[(0.0, 0.0), (0.0, 10.0), (10.0, 0.0), (10.0, 10.0), (5.0, 5.0)],
/// ).unwrap();
///
/// let inclusive = partition_space(&inst, GridResolution::square(2), BoundaryPolicy::Inclusive).unwrap();
/// assert_eq!(inclusive.len(), 4);
/// // the centre node sits on every internal edge
/// assert!(inclusive.iter().all(|p| p.members().contains(&4)));
///
/// let half_open = partition_space(&inst, GridResolution::square(2), BoundaryPolicy::HalfOpen).unwrap();
/// let claimed: usize = half_open.iter().map(|p| p.len()).sum();
/// assert_eq!(claimed, 5);
/// ```
pub fn partition_space(
    instance: &Instance,
    resolution: GridResolution,
    policy: BoundaryPolicy,
) -> Result<Vec<Partition>> {
    resolution.validate()?;

    let Some(global) = Bounds::enclosing(instance.nodes()) else {
        return Ok(Vec::new());
    };

    let kx = resolution.x_cells;
    let ky = resolution.y_cells;
    let mut partitions = Vec::with_capacity(resolution.cells());

    for i in 0..kx {
        let (min_x, max_x) = (
            edge(global.min_x, global.max_x, kx, i),
            edge(global.min_x, global.max_x, kx, i + 1),
        );
        for j in 0..ky {
            let (min_y, max_y) = (
                edge(global.min_y, global.max_y, ky, j),
                edge(global.min_y, global.max_y, ky, j + 1),
            );
            let bounds = Bounds {
                min_x,
                max_x,
                min_y,
                max_y,
            };

            let members = instance
                .nodes()
                .iter()
                .enumerate()
                .filter(|(_, n)| match policy {
                    BoundaryPolicy::Inclusive => bounds.contains(n.x(), n.y()),
                    BoundaryPolicy::HalfOpen => {
                        in_half_open(n.x(), min_x, max_x, i + 1 == kx)
                            && in_half_open(n.y(), min_y, max_y, j + 1 == ky)
                    }
                })
                .map(|(idx, _)| idx)
                .collect::<Vec<_>>();

            partitions.push(Partition {
                cell: (i, j),
                bounds,
                members,
            });
        }
    }

    debug!(
        cells = partitions.len(),
        empty = partitions.iter().filter(|p| p.is_empty()).count(),
        ?policy,
        "partitioned node set"
    );

    Ok(partitions)
}

/// The `step`-th of `k` equally spaced edges over `[lo, hi]`; the outer
/// edges are returned exactly.
fn edge(lo: f64, hi: f64, k: usize, step: usize) -> f64 {
    if step == 0 {
        lo
    } else if step == k {
        hi
    } else {
        lo + (hi - lo) * step as f64 / k as f64
    }
}

fn in_half_open(v: f64, lo: f64, hi: f64, closed_at_hi: bool) -> bool {
    lo <= v && (v < hi || (closed_at_hi && v <= hi))
}
