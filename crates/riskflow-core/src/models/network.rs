use serde::{Deserialize, Serialize};

use super::{EdgeTable, RiskNode};
use crate::errors::RiskflowResult;

/// One snapshot of a risk network: nodes plus the edge-strength table.
///
/// Owned by its caller; engine operations borrow it and return a new snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskNetwork {
    pub nodes: Vec<RiskNode>,
    #[serde(default)]
    pub edges: EdgeTable,
}

impl RiskNetwork {
    pub fn new(nodes: Vec<RiskNode>, edges: EdgeTable) -> Self {
        Self { nodes, edges }
    }

    pub fn from_json(json: &str) -> RiskflowResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> RiskflowResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// First node with the given id.
    pub fn node(&self, id: &str) -> Option<&RiskNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn probability(&self, id: &str) -> Option<f64> {
        self.node(id).map(|n| n.probability)
    }
}
