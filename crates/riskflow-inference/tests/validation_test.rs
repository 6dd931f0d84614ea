use riskflow_core::models::{CausalEdge, EdgeTable, RiskNode};
use riskflow_inference::validate;

fn clean() -> (Vec<RiskNode>, EdgeTable) {
    let nodes = vec![
        RiskNode::new("a", 0.5),
        RiskNode::new("b", 0.2).with_parent("a"),
    ];
    let edges = EdgeTable::from_edges(&[CausalEdge::new("a", "b", 0.8)]);
    (nodes, edges)
}

#[test]
fn clean_network_is_valid_without_findings() {
    let (nodes, edges) = clean();
    let result = validate(&nodes, &edges);
    assert!(result.valid);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn out_of_range_probability_is_an_error() {
    let (mut nodes, edges) = clean();
    nodes[0].probability = 1.5;
    let result = validate(&nodes, &edges);
    assert!(!result.valid);
    assert_eq!(
        result.errors,
        ["Node \"a\" has an out-of-range probability: 1.5. Must be in [0, 1]."]
    );
}

#[test]
fn nan_probability_is_an_error() {
    let (mut nodes, edges) = clean();
    nodes[1].probability = f64::NAN;
    assert!(!validate(&nodes, &edges).valid);
}

#[test]
fn unknown_parent_is_an_error() {
    let (mut nodes, edges) = clean();
    nodes[1].parents.push("ghost".into());
    let result = validate(&nodes, &edges);
    assert!(!result.valid);
    assert_eq!(
        result.errors,
        ["Node \"b\" references unknown parent \"ghost\"."]
    );
}

#[test]
fn duplicate_node_id_is_an_error() {
    let (mut nodes, edges) = clean();
    nodes.push(RiskNode::new("a", 0.1));
    let result = validate(&nodes, &edges);
    assert!(!result.valid);
    assert!(result.errors[0].contains("\"a\" is defined more than once"));
}

#[test]
fn out_of_range_edge_strength_is_only_a_warning() {
    let (nodes, mut edges) = clean();
    edges.insert("a", "b", 1.2);
    let result = validate(&nodes, &edges);
    assert!(result.valid);
    assert_eq!(
        result.warnings,
        ["Edge \"a->b\" has strength 1.2 outside [0, 1]. Values will be clamped during inference."]
    );
}

#[test]
fn cycles_are_reported_as_a_warning() {
    let nodes = vec![
        RiskNode::new("x", 0.2).with_parent("y"),
        RiskNode::new("y", 0.3).with_parent("x"),
    ];
    let result = validate(&nodes, &EdgeTable::new());
    assert!(result.valid);
    assert_eq!(
        result.warnings,
        ["Network contains 1 cycle(s): x -> y. Belief propagation will approximate by ignoring back-edges."]
    );
}

#[test]
fn unconsulted_strengths_are_warned_about() {
    let (mut nodes, mut edges) = clean();
    // b has no parent "c", and no node "z" exists.
    nodes.push(RiskNode::new("c", 0.1));
    edges.insert("c", "b", 0.5);
    edges.insert("a", "z", 0.5);
    nodes[1].weights.insert("c".into(), 0.4);

    let result = validate(&nodes, &edges);
    assert!(result.valid);
    assert_eq!(result.warnings.len(), 3);
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("weight for \"c\", which is not one of its parents")));
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("Edge \"c->b\" is not consulted")));
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("Edge \"a->z\" targets unknown node \"z\"")));
}

#[test]
fn repeated_parent_and_bad_weight_are_warnings() {
    let nodes = vec![
        RiskNode::new("a", 0.5),
        RiskNode::new("b", 0.2)
            .with_weighted_parent("a", -0.3)
            .with_parent("a"),
    ];
    let result = validate(&nodes, &EdgeTable::new());
    assert!(result.valid);
    assert_eq!(result.warnings.len(), 2);
    assert!(result.warnings[0].contains("lists parent \"a\" more than once"));
    assert!(result.warnings[1].contains("weight -0.3 for parent \"a\""));
}

#[test]
fn validation_does_not_block_propagation() {
    let nodes = vec![RiskNode::new("b", 0.2).with_parent("ghost")];
    assert!(!validate(&nodes, &EdgeTable::new()).valid);
    let result = riskflow_inference::update(
        &nodes,
        &EdgeTable::new(),
        &Default::default(),
        &Default::default(),
    );
    assert_eq!(result.nodes.len(), 1);
}
