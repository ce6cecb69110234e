//! Spatial partitioning of the node set into a grid of bounding boxes.
//!
//! Partitioning bounds each nearest-neighbor scan to a cell's members instead
//! of the whole instance. Cells are the Cartesian product of `x_cells`
//! equal-width x-intervals and `y_cells` equal-width y-intervals over the
//! global bounding box, ordered x-major.

mod grid;

pub use grid::{partition_space, BoundaryPolicy, Bounds, GridResolution, Partition};
