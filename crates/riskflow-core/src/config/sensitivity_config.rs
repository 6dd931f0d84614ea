use serde::{Deserialize, Serialize};

use super::defaults;

/// Finite-difference sensitivity configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensitivityConfig {
    /// Probability perturbation applied to each candidate node.
    pub delta: f64,
    /// Coefficients at or below this magnitude are omitted from results.
    pub epsilon: f64,
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        Self {
            delta: defaults::DEFAULT_PERTURBATION_DELTA,
            epsilon: defaults::DEFAULT_PROBABILITY_EPSILON,
        }
    }
}
