use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Two ordered cut-points separating safe / warning / critical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateThresholds {
    /// Probability below this value is safe.
    pub safe_below: f64,
    /// Probability below this value (and not safe) is warning.
    pub warning_below: f64,
}

impl Default for StateThresholds {
    fn default() -> Self {
        Self {
            safe_below: defaults::DEFAULT_SAFE_BELOW,
            warning_below: defaults::DEFAULT_WARNING_BELOW,
        }
    }
}

/// Node id → pinned probability for evidence injection.
pub type EvidenceMap = BTreeMap<String, f64>;

/// Per-call propagation options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropagationOptions {
    /// Smoothing weight in [0, 1] between the prior and the combined value.
    pub dampening: f64,
    /// Single pass when false; repeat passes to a fixed point when true.
    pub iterate_to_convergence: bool,
    /// Pinned node ids, never recomputed.
    pub evidence_nodes: BTreeSet<String>,
    pub thresholds: StateThresholds,
}

impl Default for PropagationOptions {
    fn default() -> Self {
        Self {
            dampening: defaults::DEFAULT_DAMPENING,
            iterate_to_convergence: false,
            evidence_nodes: BTreeSet::new(),
            thresholds: StateThresholds::default(),
        }
    }
}

impl PropagationOptions {
    pub fn with_dampening(mut self, dampening: f64) -> Self {
        self.dampening = dampening;
        self
    }

    pub fn iterating(mut self, iterate: bool) -> Self {
        self.iterate_to_convergence = iterate;
        self
    }

    pub fn with_evidence<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.evidence_nodes.extend(ids.into_iter().map(Into::into));
        self
    }

    pub fn with_thresholds(mut self, thresholds: StateThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }
}
