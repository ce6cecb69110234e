//! Pipeline configuration.

use serde::{Deserialize, Serialize};

use crate::constructive::BuilderConfig;
use crate::distance::{Metric, DEFAULT_DENSE_LIMIT};
use crate::error::Result;
use crate::local_search::TwoOptConfig;

/// Configuration for [`solve`](super::solve).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::distance::Metric;
/// use u_tsp::local_search::TwoOptConfig;
/// use u_tsp::solver::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_metric(Metric::Chebyshev)
///     .with_two_opt(TwoOptConfig::default().with_time_budget(Duration::from_secs(2)));
/// assert!(config.validate().is_ok());
///
/// let construction_only = SolverConfig::default().without_two_opt();
/// assert!(construction_only.two_opt.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Distance metric.
    pub metric: Metric,

    /// Largest instance that gets a dense distance matrix.
    pub dense_limit: usize,

    /// Construction settings.
    pub builder: BuilderConfig,

    /// 2-opt settings; `None` skips local search.
    pub two_opt: Option<TwoOptConfig>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            metric: Metric::default(),
            dense_limit: DEFAULT_DENSE_LIMIT,
            builder: BuilderConfig::default(),
            two_opt: Some(TwoOptConfig::default()),
        }
    }
}

impl SolverConfig {
    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_dense_limit(mut self, limit: usize) -> Self {
        self.dense_limit = limit;
        self
    }

    pub fn with_builder(mut self, builder: BuilderConfig) -> Self {
        self.builder = builder;
        self
    }

    pub fn with_two_opt(mut self, two_opt: TwoOptConfig) -> Self {
        self.two_opt = Some(two_opt);
        self
    }

    pub fn without_two_opt(mut self) -> Self {
        self.two_opt = None;
        self
    }

    /// Validates every nested configuration.
    pub fn validate(&self) -> Result<()> {
        self.builder.validate()?;
        if let Some(two_opt) = &self.two_opt {
            two_opt.validate()?;
        }
        Ok(())
    }
}
