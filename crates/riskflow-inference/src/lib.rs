//! # riskflow-inference
//!
//! The propagation engine. Orders a risk network despite feedback loops,
//! combines parent influence with Noisy-OR, iterates to a fixed point, pins
//! evidence, and measures how strongly each node drives a target.
//!
//! Every operation is a pure function of its input snapshot; nothing here
//! holds state between calls.

pub mod classify;
pub mod engine;
pub mod evidence;
pub mod graph;
pub mod noisy_or;
pub mod propagation;
pub mod sensitivity;
pub mod validation;

pub use classify::{classify, probability_color, state_color};
pub use engine::RiskEngine;
pub use evidence::inject_evidence;
pub use graph::{detect_cycles, topological_order, IndexedGraph};
pub use noisy_or::{posterior, recompute_node};
pub use propagation::{update, PropagationPlan};
pub use sensitivity::sensitivity;
pub use validation::validate;
