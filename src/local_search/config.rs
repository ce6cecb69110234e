//! 2-opt configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Error, Result};

/// Configuration for [`two_opt`](super::two_opt).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::local_search::TwoOptConfig;
///
/// let config = TwoOptConfig::default()
///     .with_time_budget(Duration::from_secs(5))
///     .with_check_interval(256);
/// assert!(config.validate().is_ok());
/// assert!(TwoOptConfig::default().with_time_budget(Duration::ZERO).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwoOptConfig {
    /// Wall-clock budget. The search stops at the first clock check past it
    /// and returns the best tour found so far.
    pub time_budget: Duration,

    /// Candidate moves evaluated between clock checks inside a sweep.
    ///
    /// The clock is also checked before every sweep.
    pub check_interval: usize,
}

impl Default for TwoOptConfig {
    fn default() -> Self {
        Self {
            time_budget: Duration::from_secs(60),
            check_interval: 1024,
        }
    }
}

impl TwoOptConfig {
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    pub fn with_check_interval(mut self, n: usize) -> Self {
        self.check_interval = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.time_budget.is_zero() {
            return Err(Error::InvalidBudget(self.time_budget));
        }
        if self.check_interval == 0 {
            return Err(Error::invalid_config("check_interval must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let c = TwoOptConfig::default();
        assert_eq!(c.time_budget, Duration::from_secs(60));
        assert_eq!(c.check_interval, 1024);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_zero_budget_rejected() {
        let c = TwoOptConfig::default().with_time_budget(Duration::ZERO);
        assert!(matches!(c.validate(), Err(Error::InvalidBudget(_))));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let c = TwoOptConfig::default().with_check_interval(0);
        assert!(matches!(c.validate(), Err(Error::InvalidConfig(_))));
    }
}
