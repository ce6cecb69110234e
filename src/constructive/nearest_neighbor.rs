//! Partition-aware nearest-neighbor construction.
//!
//! Builds one greedy path per grid cell: starting from the cell's start node,
//! always move to the nearest unvisited member of the same cell. Paths are
//! concatenated in partition order and the result is optionally closed into a
//! single cycle.
//!
//! With [`Selection::Lookahead`] the greedy step also looks one node past the
//! candidate, scoring `d(current, v) + min_w d(v, w)`.
//!
//! # Complexity
//!
//! O(Σ mᵢ²) distance lookups for cell sizes mᵢ, about O(n²/k) for k roughly
//! equal cells instead of O(n²) unpartitioned. Lookahead is O(Σ mᵢ³).
//!
//! # Reference
//!
//! Quality is typically 20-25% above optimal unpartitioned and degrades near
//! cell seams, where consecutive paths are joined without search.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use tracing::{debug, info};

use super::config::{BuilderConfig, Selection, StartPolicy};
use crate::distance::DistanceOracle;
use crate::evaluation::{cycle_cost, path_cost};
use crate::error::Result;
use crate::models::{Instance, Tour};
use crate::partition::partition_space;

/// The greedy path built inside one partition.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionPath {
    /// Grid position of the partition.
    pub cell: (usize, usize),
    /// Node ids in visiting order.
    pub nodes: Vec<usize>,
    /// Path length, plus the return edge when `closed`.
    pub cost: f64,
    /// Whether the return edge to the start node was counted.
    pub closed: bool,
}

/// Output of [`build_tour`].
#[derive(Debug, Clone)]
pub struct Construction {
    /// The stitched global tour.
    pub tour: Tour,
    /// Total cost of `tour` (with the closing edge if the tour is closed).
    pub cost: f64,
    /// Per-partition paths, in partition order. Skipped partitions are absent.
    pub paths: Vec<PartitionPath>,
    /// Partitions with no unvisited member.
    pub skipped: usize,
}

/// Constructs a tour with the partition-aware nearest-neighbor heuristic.
///
/// Each node appears exactly once in the result. Under
/// [`BoundaryPolicy::Inclusive`](crate::partition::BoundaryPolicy::Inclusive)
/// a node claimed by several cells is visited by the first of them. Ties in
/// the nearest-unvisited scan go to the smallest node id.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Instance;
/// use u_tsp::distance::{Distances, Metric};
/// use u_tsp::constructive::{build_tour, BuilderConfig};
/// use u_tsp::partition::GridResolution;
///
/// let inst = Instance::from_points(
///     "square",
///     &[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)],
/// ).unwrap();
/// let dm = Distances::dense(&inst, Metric::Euclidean);
/// let config = BuilderConfig::default().with_resolution(GridResolution::single());
///
/// let built = build_tour(&inst, &dm, &config).unwrap();
/// assert_eq!(built.tour.sequence(), vec![1, 2, 3, 4, 1]);
/// assert!((built.cost - 4.0).abs() < 1e-10);
/// ```
pub fn build_tour<D: DistanceOracle + ?Sized>(
    instance: &Instance,
    distances: &D,
    config: &BuilderConfig,
) -> Result<Construction> {
    config.validate()?;
    let started = Instant::now();

    info!(
        event = "phase_start",
        phase = "Nearest Neighbor Construction",
        nodes = instance.len(),
        cells = config.resolution.cells(),
        selection = ?config.selection,
    );

    let partitions = partition_space(instance, config.resolution, config.boundary)?;

    let fixed_start = match config.start {
        StartPolicy::Node(id) => Some(instance.index_of(id)?),
        _ => None,
    };
    let mut rng = match config.start {
        StartPolicy::Random { seed } => Some(StdRng::seed_from_u64(seed)),
        _ => None,
    };

    let mut visited = vec![false; instance.len()];
    let mut order = Vec::with_capacity(instance.len());
    let mut paths = Vec::with_capacity(partitions.len());
    let mut skipped = 0usize;

    for partition in &partitions {
        // members already visited by an earlier cell sharing this boundary drop out
        let members: Vec<usize> = partition
            .members()
            .iter()
            .copied()
            .filter(|&m| !visited[m])
            .collect();

        if members.is_empty() {
            debug!(cell = ?partition.cell(), "skipping empty partition");
            skipped += 1;
            continue;
        }

        let start = match (fixed_start, rng.as_mut()) {
            (Some(f), _) if members.contains(&f) => f,
            (_, Some(rng)) => members[rng.random_range(0..members.len())],
            _ => members[0],
        };

        let mut pool = members;
        pool.retain(|&m| m != start);
        pool.sort_by_key(|&m| instance.node(m).id());

        let mut path = Vec::with_capacity(pool.len() + 1);
        path.push(start);
        visited[start] = true;
        let mut current = start;

        while let Some(next) = select_next(distances, current, &pool, config.selection) {
            if let Some(pos) = pool.iter().position(|&m| m == next) {
                pool.remove(pos);
            }
            visited[next] = true;
            path.push(next);
            current = next;
        }

        let cost = if config.close_partitions {
            cycle_cost(&path, distances)
        } else {
            path_cost(&path, distances)
        };

        debug!(
            cell = ?partition.cell(),
            nodes = path.len(),
            cost,
            "partition path built"
        );

        order.extend_from_slice(&path);
        paths.push(PartitionPath {
            cell: partition.cell(),
            nodes: instance.ids_of(&path),
            cost,
            closed: config.close_partitions,
        });
    }

    let cost = if config.close_tour {
        cycle_cost(&order, distances)
    } else {
        path_cost(&order, distances)
    };
    let ids = instance.ids_of(&order);
    let tour = if config.close_tour {
        Tour::closed(ids)
    } else {
        Tour::open(ids)
    };

    info!(
        event = "phase_end",
        phase = "Nearest Neighbor Construction",
        duration_ms = started.elapsed().as_millis() as u64,
        partitions = paths.len(),
        skipped,
        cost,
    );

    Ok(Construction {
        tour,
        cost,
        paths,
        skipped,
    })
}

/// Picks the next node from `pool`, which is sorted by node id.
fn select_next<D: DistanceOracle + ?Sized>(
    distances: &D,
    current: usize,
    pool: &[usize],
    selection: Selection,
) -> Option<usize> {
    match selection {
        Selection::Lookahead if pool.len() > 1 => lookahead(distances, current, pool),
        _ => distances.nearest(current, pool),
    }
}

/// The member `v` minimizing `d(current, v) + min_w d(v, w)` for `w ≠ v` in
/// `pool`. Only a strictly smaller score replaces the best, so ties keep the
/// smallest id.
fn lookahead<D: DistanceOracle + ?Sized>(
    distances: &D,
    current: usize,
    pool: &[usize],
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for &v in pool {
        let onward = pool
            .iter()
            .map(|&w| distances.search_distance(v, w))
            .fold(f64::INFINITY, f64::min);
        let score = distances.search_distance(current, v) + onward;
        match best {
            Some((_, best_score)) if score >= best_score => {}
            _ => best = Some((v, score)),
        }
    }
    best.map(|(v, _)| v)
}
