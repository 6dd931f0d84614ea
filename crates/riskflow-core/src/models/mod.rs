//! Network data model: nodes, edges, the edge-strength table, options, and results.

pub mod edge;
pub mod network;
pub mod node;
pub mod options;
pub mod results;

pub use edge::{CausalEdge, EdgeKey, EdgeTable};
pub use network::RiskNetwork;
pub use node::{NodeKind, RiskNode, RiskState};
pub use options::{EvidenceMap, PropagationOptions, StateThresholds};
pub use results::{CycleReport, NetworkUpdateResult, SensitivityMap, ValidationResult};
