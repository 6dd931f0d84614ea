//! Structural and numeric diagnostics. Never blocks inference by itself.

use std::collections::{HashMap, HashSet};

use riskflow_core::models::{EdgeTable, RiskNode, ValidationResult};
use tracing::debug;

use crate::graph::detect_cycles;

/// Check a network snapshot.
///
/// Errors: out-of-range (or NaN) probabilities, unknown parent ids, and
/// repeated node ids. Warnings: out-of-range strengths, repeated parent
/// entries, strengths that propagation never consults, and feedback loops.
pub fn validate(nodes: &[RiskNode], edges: &EdgeTable) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let mut by_id: HashMap<&str, &RiskNode> = HashMap::with_capacity(nodes.len());
    for node in nodes {
        if by_id.contains_key(node.id.as_str()) {
            errors.push(format!(
                "Node \"{}\" is defined more than once; only the first definition is used.",
                node.id
            ));
        } else {
            by_id.insert(node.id.as_str(), node);
        }
    }

    for node in nodes {
        if !in_unit_range(node.probability) {
            errors.push(format!(
                "Node \"{}\" has an out-of-range probability: {}. Must be in [0, 1].",
                node.id, node.probability
            ));
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(node.parents.len());
        for parent_id in &node.parents {
            if !by_id.contains_key(parent_id.as_str()) {
                errors.push(format!(
                    "Node \"{}\" references unknown parent \"{}\".",
                    node.id, parent_id
                ));
            }
            if !seen.insert(parent_id.as_str()) {
                warnings.push(format!(
                    "Node \"{}\" lists parent \"{}\" more than once; each entry contributes separately.",
                    node.id, parent_id
                ));
            }
        }

        for (parent_id, &strength) in &node.weights {
            if !seen.contains(parent_id.as_str()) {
                warnings.push(format!(
                    "Node \"{}\" has a weight for \"{}\", which is not one of its parents. It will be ignored.",
                    node.id, parent_id
                ));
            } else if !in_unit_range(strength) {
                warnings.push(format!(
                    "Node \"{}\" has weight {} for parent \"{}\" outside [0, 1]. Values will be clamped during inference.",
                    node.id, strength, parent_id
                ));
            }
        }
    }

    for (key, strength) in edges.iter() {
        if !in_unit_range(strength) {
            warnings.push(format!(
                "Edge \"{key}\" has strength {strength} outside [0, 1]. Values will be clamped during inference."
            ));
        }
        match by_id.get(key.target.as_str()) {
            None => warnings.push(format!(
                "Edge \"{key}\" targets unknown node \"{}\". It will be ignored.",
                key.target
            )),
            Some(target) if !target.parents.contains(&key.source) => warnings.push(format!(
                "Edge \"{key}\" is not consulted: \"{}\" does not list \"{}\" as a parent.",
                key.target, key.source
            )),
            Some(_) => {}
        }
    }

    let report = detect_cycles(nodes);
    if report.has_cycles {
        let loops: Vec<String> = report.cycles.iter().map(|c| c.join(" -> ")).collect();
        warnings.push(format!(
            "Network contains {} cycle(s): {}. Belief propagation will approximate by ignoring back-edges.",
            report.cycles.len(),
            loops.join("; ")
        ));
    }

    debug!(
        errors = errors.len(),
        warnings = warnings.len(),
        "network validated"
    );
    ValidationResult {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}

fn in_unit_range(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}
