use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Layout/grouping category of a risk factor. Opaque to inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// External conditions (sea state, impact energy, ...).
    #[default]
    Environment,
    /// Structural condition of the asset.
    Structure,
    /// Stability and buoyancy effects.
    Stability,
    /// Terminal outcomes.
    Consequence,
}

impl NodeKind {
    pub const ALL: [NodeKind; 4] = [
        Self::Environment,
        Self::Structure,
        Self::Stability,
        Self::Consequence,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Environment => "environment",
            Self::Structure => "structure",
            Self::Stability => "stability",
            Self::Consequence => "consequence",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operational severity tier derived from a probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskState {
    #[default]
    Safe,
    Warning,
    Critical,
}

impl RiskState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for RiskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A risk factor in the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskNode {
    /// Unique key within a network.
    pub id: String,
    /// Display name.
    pub label: String,
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    /// Current probability, nominally in [0, 1].
    pub probability: f64,
    /// Derived from `probability`; never authoritative input.
    #[serde(default)]
    pub state: RiskState,
    /// Ids this node's probability depends on, in declaration order.
    #[serde(default)]
    pub parents: Vec<String>,
    /// Per-parent strength overrides. Checked before the network edge table.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub weights: BTreeMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

impl RiskNode {
    /// A node with the given prior and no parents; label defaults to the id.
    pub fn new(id: impl Into<String>, probability: f64) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            kind: NodeKind::default(),
            probability,
            state: RiskState::default(),
            parents: Vec::new(),
            weights: BTreeMap::new(),
            description: None,
            formula: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Append a parent dependency.
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parents.push(parent_id.into());
        self
    }

    /// Append a parent dependency with a node-local strength override.
    pub fn with_weighted_parent(mut self, parent_id: impl Into<String>, strength: f64) -> Self {
        let parent_id = parent_id.into();
        self.weights.insert(parent_id.clone(), strength);
        self.parents.push(parent_id);
        self
    }

    /// True when the node declares no parents. Such nodes are never recomputed.
    pub fn is_source(&self) -> bool {
        self.parents.is_empty()
    }
}
