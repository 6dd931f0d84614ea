use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A weighted causal link, as supplied by a network author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CausalEdge {
    pub source: String,
    pub target: String,
    /// Causal strength, nominally in [0, 1]; clamped at use.
    pub strength: f64,
}

impl CausalEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, strength: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            strength,
        }
    }
}

/// Ordered (source, target) pair keying the edge-strength table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    pub source: String,
    pub target: String,
}

impl EdgeKey {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl std::fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.source, self.target)
    }
}

/// Edge-strength table keyed by ordered pair.
///
/// Serializes as a list of [`CausalEdge`]. Iteration is ordered by key, so
/// anything derived from it (validation output, serialized form) is stable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<CausalEdge>", into = "Vec<CausalEdge>")]
pub struct EdgeTable {
    strengths: BTreeMap<EdgeKey, f64>,
}

impl EdgeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from an edge list. A later duplicate pair replaces an earlier one.
    pub fn from_edges(edges: &[CausalEdge]) -> Self {
        let mut table = Self::new();
        for edge in edges {
            table.insert(edge.source.clone(), edge.target.clone(), edge.strength);
        }
        table
    }

    /// Insert or replace a strength; returns the previous value.
    pub fn insert(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        strength: f64,
    ) -> Option<f64> {
        self.strengths.insert(EdgeKey::new(source, target), strength)
    }

    /// Raw (unclamped) strength for the ordered pair.
    pub fn get(&self, source: &str, target: &str) -> Option<f64> {
        self.strengths.get(&EdgeKey::new(source, target)).copied()
    }

    pub fn remove(&mut self, source: &str, target: &str) -> Option<f64> {
        self.strengths.remove(&EdgeKey::new(source, target))
    }

    pub fn len(&self) -> usize {
        self.strengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strengths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EdgeKey, f64)> {
        self.strengths.iter().map(|(k, &v)| (k, v))
    }

    pub fn to_edges(&self) -> Vec<CausalEdge> {
        self.iter()
            .map(|(key, strength)| CausalEdge::new(key.source.clone(), key.target.clone(), strength))
            .collect()
    }
}

impl From<Vec<CausalEdge>> for EdgeTable {
    fn from(edges: Vec<CausalEdge>) -> Self {
        Self::from_edges(&edges)
    }
}

impl From<EdgeTable> for Vec<CausalEdge> {
    fn from(table: EdgeTable) -> Self {
        table.to_edges()
    }
}

impl FromIterator<CausalEdge> for EdgeTable {
    fn from_iter<I: IntoIterator<Item = CausalEdge>>(iter: I) -> Self {
        let mut table = Self::new();
        for edge in iter {
            table.insert(edge.source, edge.target, edge.strength);
        }
        table
    }
}
