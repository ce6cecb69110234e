//! Solve pipeline with timing.

use std::time::{Duration, Instant};
use tracing::info;

use super::config::SolverConfig;
use crate::constructive::build_tour;
use crate::distance::Distances;
use crate::error::Result;
use crate::local_search::{two_opt, TwoOptResult};
use crate::models::{Instance, Tour};
use crate::quality::KnownOptima;

/// Outcome of [`solve`].
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Instance name the report belongs to.
    pub name: String,
    /// Final tour.
    pub tour: Tour,
    /// Cost of the constructed tour, before local search.
    pub construction_cost: f64,
    /// Cost of the final tour.
    pub cost: f64,
    /// Distance setup plus construction time.
    pub construction_time: Duration,
    /// Local search statistics, if it ran.
    pub optimization: Option<TwoOptResult>,
    /// Total wall-clock time.
    pub elapsed: Duration,
}

impl SolveReport {
    /// Percentage gap against the registered optimum for this instance.
    pub fn gap(&self, optima: &KnownOptima) -> Result<f64> {
        optima.gap(&self.name, self.cost)
    }
}

/// Runs the full pipeline on `instance`.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::models::Instance;
/// use u_tsp::local_search::TwoOptConfig;
/// use u_tsp::solver::{solve, SolverConfig};
///
/// let inst = Instance::from_points("line", &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]).unwrap();
/// let config = SolverConfig::default()
///     .with_two_opt(TwoOptConfig::default().with_time_budget(Duration::from_secs(1)));
///
/// let report = solve(&inst, &config).unwrap();
/// assert!((report.cost - 4.0).abs() < 1e-10);
/// assert_eq!(report.tour.sequence(), vec![1, 2, 3, 1]);
/// ```
pub fn solve(instance: &Instance, config: &SolverConfig) -> Result<SolveReport> {
    config.validate()?;
    let started = Instant::now();

    info!(
        event = "solve_start",
        instance = instance.name(),
        nodes = instance.len(),
        metric = ?config.metric,
    );

    let distances = Distances::for_instance(instance, config.metric, config.dense_limit);
    let construction = build_tour(instance, &distances, &config.builder)?;
    let construction_time = started.elapsed();

    let (tour, cost, optimization) = match &config.two_opt {
        Some(two_opt_config) => {
            let result = two_opt(instance, &distances, construction.tour, two_opt_config)?;
            (result.tour.clone(), result.cost, Some(result))
        }
        None => (construction.tour, construction.cost, None),
    };

    let elapsed = started.elapsed();

    info!(
        event = "solve_end",
        instance = instance.name(),
        duration_ms = elapsed.as_millis() as u64,
        construction_cost = construction.cost,
        cost,
    );

    Ok(SolveReport {
        name: instance.name().to_owned(),
        tour,
        construction_cost: construction.cost,
        cost,
        construction_time,
        optimization,
        elapsed,
    })
}
