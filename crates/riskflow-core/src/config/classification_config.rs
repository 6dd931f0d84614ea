use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::StateThresholds;

/// Severity cut-points used when options don't supply their own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Probabilities strictly below this are safe.
    pub safe_below: f64,
    /// Probabilities strictly below this (and not safe) are warning; the rest critical.
    pub warning_below: f64,
}

impl ClassificationConfig {
    pub fn thresholds(&self) -> StateThresholds {
        StateThresholds {
            safe_below: self.safe_below,
            warning_below: self.warning_below,
        }
    }
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            safe_below: defaults::DEFAULT_SAFE_BELOW,
            warning_below: defaults::DEFAULT_WARNING_BELOW,
        }
    }
}
