use serde::{Deserialize, Serialize};

use super::defaults;

/// Noisy-OR propagation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropagationConfig {
    /// Blend factor between the prior and the freshly combined value, in [0, 1].
    pub dampening: f64,
    /// Strength used when neither a node override nor the edge table covers an edge.
    pub default_edge_strength: f64,
}

impl Default for PropagationConfig {
    fn default() -> Self {
        Self {
            dampening: defaults::DEFAULT_DAMPENING,
            default_edge_strength: defaults::DEFAULT_EDGE_STRENGTH,
        }
    }
}
