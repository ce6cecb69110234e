//! Time-budgeted 2-opt improvement.
//!
//! # Algorithm
//!
//! Repeats full sweeps over all position pairs `i < j`. For each pair the
//! cost change of reversing `tour[i..=j]` is computed from the four edge
//! endpoints it touches; a strictly negative change is applied immediately.
//! A sweep without an applied move is a local optimum.
//!
//! The search is a two-exit state machine: from `Sweeping` it moves to
//! `LocalOptimum` (a sweep found nothing) or `BudgetExhausted` (a clock check
//! found the budget spent). The clock is checked before every sweep and every
//! `check_interval` candidate evaluations within one.
//!
//! # Complexity
//!
//! O(n²) per sweep.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A Method for Solving Traveling-Salesman Problems",
//! *Operations Research* 6(6), 791-812.

use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

use super::config::TwoOptConfig;
use crate::distance::DistanceOracle;
use crate::evaluation::{cycle_cost, path_cost, two_opt_delta};
use crate::error::Result;
use crate::models::{Instance, Tour};

/// Moves must improve by more than this to be applied.
///
/// Guards strict improvement against floating-point noise so equal-cost
/// tours never alternate.
const IMPROVEMENT_EPS: f64 = 1e-10;

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A full sweep found no improving move.
    LocalOptimum,
    /// The time budget ran out; the tour is the best found so far.
    BudgetExhausted,
}

/// Result of a 2-opt run.
#[derive(Debug, Clone)]
pub struct TwoOptResult {
    /// The improved tour. Same node set and open/closed form as the input.
    pub tour: Tour,

    /// Cost of the input tour.
    pub initial_cost: f64,

    /// Cost of `tour`, recomputed from scratch.
    pub cost: f64,

    /// Sweeps started, including an interrupted last one.
    pub sweeps: usize,

    /// Improving moves applied.
    pub moves: usize,

    /// Exit transition taken.
    pub termination: Termination,

    /// Wall-clock time spent.
    pub elapsed: Duration,
}

#[derive(Clone, Copy)]
enum SearchState {
    Sweeping,
    Finished(Termination),
}

enum SweepOutcome {
    Improved,
    NoImprovement,
    Interrupted,
}

struct Clock {
    started: Instant,
    budget: Duration,
}

impl Clock {
    fn expired(&self) -> bool {
        self.started.elapsed() >= self.budget
    }
}

/// Improves `tour` with 2-opt until a local optimum or the time budget.
///
/// The tour cost never increases, and the returned tour is always a valid
/// permutation of the input. On a closed tour the first node stays in place
/// and the closing edge takes part in every move; on an open tour the path
/// endpoints may change.
///
/// # Errors
///
/// [`Error::InvalidBudget`](crate::Error::InvalidBudget) for a zero budget,
/// checked before any sweep; node errors if `tour` is not a permutation of
/// `instance`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::models::{Instance, Tour};
/// use u_tsp::distance::{Distances, Metric};
/// use u_tsp::local_search::{two_opt, Termination, TwoOptConfig};
///
/// // a crossed square
/// let inst = Instance::from_points(
///     "x",
///     &[(0.0, 0.0), (1.0, 1.0), (0.0, 1.0), (1.0, 0.0)],
/// ).unwrap();
/// let dm = Distances::dense(&inst, Metric::Euclidean);
/// let config = TwoOptConfig::default().with_time_budget(Duration::from_secs(1));
///
/// let result = two_opt(&inst, &dm, Tour::closed(vec![1, 2, 3, 4]), &config).unwrap();
/// assert!((result.cost - 4.0).abs() < 1e-10);
/// assert_eq!(result.termination, Termination::LocalOptimum);
/// ```
pub fn two_opt<D: DistanceOracle + ?Sized>(
    instance: &Instance,
    distances: &D,
    tour: Tour,
    config: &TwoOptConfig,
) -> Result<TwoOptResult> {
    config.validate()?;
    tour.validate(instance)?;

    let clock = Clock {
        started: Instant::now(),
        budget: config.time_budget,
    };
    let closed = tour.is_closed();
    let mut order = instance.indices_of(tour.order())?;
    let initial_cost = order_cost(&order, closed, distances);

    info!(
        event = "phase_start",
        phase = "2-opt",
        nodes = order.len(),
        budget_ms = config.time_budget.as_millis() as u64,
        cost = initial_cost,
    );

    let mut current_cost = initial_cost;
    let mut sweeps = 0usize;
    let mut moves = 0usize;
    let mut state = SearchState::Sweeping;

    let termination = loop {
        match state {
            SearchState::Finished(termination) => break termination,
            SearchState::Sweeping => {
                if clock.expired() {
                    state = SearchState::Finished(Termination::BudgetExhausted);
                    continue;
                }
                sweeps += 1;
                let (outcome, applied, gain) =
                    sweep(&mut order, closed, distances, &clock, config.check_interval);
                moves += applied;
                current_cost -= gain;

                debug!(sweep = sweeps, moves = applied, cost = current_cost, "2-opt sweep");

                state = match outcome {
                    SweepOutcome::Improved => SearchState::Sweeping,
                    SweepOutcome::NoImprovement => {
                        SearchState::Finished(Termination::LocalOptimum)
                    }
                    SweepOutcome::Interrupted => {
                        SearchState::Finished(Termination::BudgetExhausted)
                    }
                };
            }
        }
    };

    let cost = if moves == 0 {
        initial_cost
    } else {
        order_cost(&order, closed, distances)
    };
    let ids = instance.ids_of(&order);
    let tour = if closed {
        Tour::closed(ids)
    } else {
        Tour::open(ids)
    };
    let elapsed = clock.started.elapsed();

    info!(
        event = "phase_end",
        phase = "2-opt",
        duration_ms = elapsed.as_millis() as u64,
        sweeps,
        moves,
        ?termination,
        cost,
    );

    Ok(TwoOptResult {
        tour,
        initial_cost,
        cost,
        sweeps,
        moves,
        termination,
        elapsed,
    })
}

fn order_cost<D: DistanceOracle + ?Sized>(order: &[usize], closed: bool, distances: &D) -> f64 {
    if closed {
        cycle_cost(order, distances)
    } else {
        path_cost(order, distances)
    }
}

/// One pass over all position pairs, applying improving moves as found.
///
/// Returns the outcome, the number of applied moves, and the total cost
/// reduction.
fn sweep<D: DistanceOracle + ?Sized>(
    order: &mut [usize],
    closed: bool,
    distances: &D,
    clock: &Clock,
    check_interval: usize,
) -> (SweepOutcome, usize, f64) {
    let n = order.len();
    // a closed tour keeps its first node fixed
    let first = usize::from(closed);
    let mut applied = 0usize;
    let mut gain = 0.0;
    let mut since_check = 0usize;

    for i in first..n.saturating_sub(1) {
        for j in (i + 1)..n {
            since_check += 1;
            if since_check >= check_interval {
                since_check = 0;
                if clock.expired() {
                    return (SweepOutcome::Interrupted, applied, gain);
                }
            }

            let delta = two_opt_delta(order, i, j, closed, distances);
            if delta < -IMPROVEMENT_EPS {
                order[i..=j].reverse();
                applied += 1;
                gain -= delta;
                trace!(i, j, delta, "2-opt move applied");
            }
        }
    }

    let outcome = if applied > 0 {
        SweepOutcome::Improved
    } else {
        SweepOutcome::NoImprovement
    };
    (outcome, applied, gain)
}
