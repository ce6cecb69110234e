//! Known optimum registry and gap computation.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Published optimal tour lengths for the TSPLIB instances used as benchmarks.
const BENCHMARK_OPTIMA: [(&str, u64); 5] = [
    ("lin105", 14379),
    ("tsp225", 3919),
    ("pr1002", 259045),
    ("pr2392", 378032),
    ("rl5934", 556045),
];

/// Percentage by which `achieved` exceeds `optimal`: `((achieved / optimal) − 1) × 100`.
///
/// # Examples
///
/// ```
/// use u_tsp::quality::optimal_gap;
///
/// assert!((optimal_gap(110.0, 100.0) - 10.0).abs() < 1e-10);
/// assert!(optimal_gap(100.0, 100.0).abs() < 1e-10);
/// ```
pub fn optimal_gap(achieved: f64, optimal: f64) -> f64 {
    ((achieved / optimal) - 1.0) * 100.0
}

/// Instance name → optimal integer cost.
///
/// Names are matched with any trailing `.tsp` extension removed, so both
/// `"lin105"` and `"lin105.tsp"` resolve.
///
/// # Examples
///
/// ```
/// use u_tsp::quality::KnownOptima;
///
/// let optima = KnownOptima::benchmarks();
/// assert_eq!(optima.get("lin105.tsp"), Some(14379));
/// assert!(optima.gap("nowhere", 1.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct KnownOptima {
    table: HashMap<String, u64>,
}

impl KnownOptima {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Registry preloaded with the benchmark instances.
    pub fn benchmarks() -> Self {
        let table = BENCHMARK_OPTIMA
            .iter()
            .map(|&(name, cost)| (name.to_owned(), cost))
            .collect();
        Self { table }
    }

    /// Adds or replaces an entry.
    ///
    /// Fails with [`Error::InvalidConfig`] if `optimal_cost` is zero.
    pub fn register(&mut self, name: &str, optimal_cost: u64) -> Result<()> {
        if optimal_cost == 0 {
            return Err(Error::invalid_config(format!(
                "optimal cost for {} must be positive",
                normalize(name)
            )));
        }
        self.table.insert(normalize(name).to_owned(), optimal_cost);
        Ok(())
    }

    /// Optimal cost for `name`, if registered.
    pub fn get(&self, name: &str) -> Option<u64> {
        self.table.get(normalize(name)).copied()
    }

    /// Number of registered instances.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Percentage gap of `achieved` against the registered optimum.
    ///
    /// Fails with [`Error::UnknownInstance`] if `name` is not registered.
    pub fn gap(&self, name: &str, achieved: f64) -> Result<f64> {
        let optimal = self
            .get(name)
            .ok_or_else(|| Error::UnknownInstance(name.to_owned()))?;
        Ok(optimal_gap(achieved, optimal as f64))
    }
}

impl Default for KnownOptima {
    fn default() -> Self {
        Self::benchmarks()
    }
}

fn normalize(name: &str) -> &str {
    let name = name.trim();
    name.strip_suffix(".tsp").unwrap_or(name)
}
