use serde::{Deserialize, Serialize};

use super::defaults;

/// Fixed-point iteration limits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvergenceConfig {
    /// A pass whose max delta falls below this value ends iteration.
    pub threshold: f64,
    /// Hard ceiling on forward passes per update.
    pub max_iterations: usize,
}

impl Default for ConvergenceConfig {
    fn default() -> Self {
        Self {
            threshold: defaults::DEFAULT_CONVERGENCE_THRESHOLD,
            max_iterations: defaults::DEFAULT_MAX_ITERATIONS,
        }
    }
}
