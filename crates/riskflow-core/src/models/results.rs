use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::RiskNode;

/// Outcome of one `update` / `inject_evidence` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkUpdateResult {
    /// New snapshot, in the input node order.
    pub nodes: Vec<RiskNode>,
    /// Forward passes performed.
    pub iterations: usize,
    /// True if the network stabilized within the iteration ceiling
    /// (always true for single-pass updates).
    pub converged: bool,
    /// Max absolute probability delta observed in the final pass.
    pub final_delta: f64,
}

impl NetworkUpdateResult {
    pub fn node(&self, id: &str) -> Option<&RiskNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn probability(&self, id: &str) -> Option<f64> {
        self.node(id).map(|n| n.probability)
    }
}

/// Structural and numeric findings for a network.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff `errors` is empty.
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Feedback loops found by the cycle detector.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CycleReport {
    pub has_cycles: bool,
    /// Each cycle as the ordered ids forming the loop, in discovery order.
    pub cycles: Vec<Vec<String>>,
}

/// Node id → non-negative sensitivity coefficient.
pub type SensitivityMap = BTreeMap<String, f64>;
