//! # riskflow-core
//!
//! Foundation crate for the riskflow inference engine.
//! Defines the network data model, errors, config, defaults, tracing setup,
//! and the edge-strength lookup trait. Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod traits;

/// riskflow version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Re-export the most commonly used types at the crate root.
pub use config::RiskflowConfig;
pub use errors::{RiskflowError, RiskflowResult};
pub use models::{
    CausalEdge, CycleReport, EdgeKey, EdgeTable, EvidenceMap, NetworkUpdateResult, NodeKind,
    PropagationOptions, RiskNetwork, RiskNode, RiskState, SensitivityMap, StateThresholds,
    ValidationResult,
};
pub use traits::StrengthSource;
