//! Golden values for the LNG carrier grounding reference network.

use riskflow_core::config::RiskflowConfig;
use riskflow_core::models::{EvidenceMap, NodeKind, PropagationOptions, RiskState};
use riskflow_inference::{detect_cycles, inject_evidence, sensitivity, update, validate};

const TOL: f64 = 1e-9;

fn assert_close(actual: Option<f64>, expected: f64, id: &str) {
    let actual = actual.unwrap_or_else(|| panic!("missing node {id}"));
    assert!(
        (actual - expected).abs() < TOL,
        "{id}: got {actual}, expected {expected}"
    );
}

#[test]
fn fixture_loads_and_validates_clean() {
    let network = test_fixtures::lng_grounding();
    assert_eq!(network.nodes.len(), 14);
    assert_eq!(network.edges.len(), 17);
    assert_eq!(
        network.node("capsizing_risk").unwrap().kind,
        NodeKind::Consequence
    );

    let report = validate(&network.nodes, &network.edges);
    assert!(report.valid, "{:?}", report.errors);
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    assert!(!detect_cycles(&network.nodes).has_cycles);
}

#[test]
fn fixture_directory_lists_every_network() {
    let names: Vec<String> = test_fixtures::list_fixtures()
        .iter()
        .filter_map(|p| p.file_name()?.to_str().map(str::to_string))
        .collect();
    assert_eq!(names, ["feedback_loop.json", "lng_grounding.json"]);
    assert!(test_fixtures::fixture_path(test_fixtures::LNG_GROUNDING).exists());
}

#[test]
fn single_pass_matches_golden_posteriors() {
    let network = test_fixtures::lng_grounding();
    let result = update(
        &network.nodes,
        &network.edges,
        &PropagationOptions::default(),
        &RiskflowConfig::default(),
    );

    let golden = [
        ("impact_energy", 0.15),
        ("seabed_type", 0.2),
        ("significant_wave", 0.1),
        ("bottom_damage", 0.2029504),
        ("hull_girder_stress", 0.2505274),
        ("cargo_tank_breach", 0.16288369568),
        ("double_bottom_integrity", 0.78857349504),
        ("compartment_flooding", 0.3639680287601319),
        ("free_surface_effect", 0.24188966010521878),
        ("stability_loss", 0.2614054507646844),
        ("lng_release", 0.11545943402380962),
        ("structural_failure", 0.27285916428992074),
        ("capsizing_risk", 0.1984214437923899),
        ("environmental_impact", 0.07611747470145759),
    ];
    for (id, expected) in golden {
        assert_close(result.probability(id), expected, id);
    }

    assert_eq!(
        result.node("double_bottom_integrity").unwrap().state,
        RiskState::Critical
    );
    assert_eq!(
        result.node("compartment_flooding").unwrap().state,
        RiskState::Warning
    );
    assert_eq!(result.node("capsizing_risk").unwrap().state, RiskState::Safe);
}

#[test]
fn iterating_the_fixture_changes_nothing() {
    let network = test_fixtures::lng_grounding();
    let config = RiskflowConfig::default();
    let single = update(
        &network.nodes,
        &network.edges,
        &PropagationOptions::default(),
        &config,
    );
    let iterated = update(
        &network.nodes,
        &network.edges,
        &PropagationOptions::default().iterating(true),
        &config,
    );
    assert_eq!(iterated.iterations, 2);
    for (s, i) in single.nodes.iter().zip(&iterated.nodes) {
        assert_eq!(s.probability, i.probability, "{}", s.id);
    }
}

#[test]
fn bottom_damage_evidence_matches_golden_posteriors() {
    let network = test_fixtures::lng_grounding();
    let evidence: EvidenceMap = [("bottom_damage".to_string(), 0.9)].into_iter().collect();
    let result = inject_evidence(
        &evidence,
        &network.nodes,
        &network.edges,
        &PropagationOptions::default(),
        &RiskflowConfig::default(),
    );

    assert!(result.converged);
    assert_eq!(result.iterations, 2);
    let golden = [
        ("bottom_damage", 0.9),
        ("hull_girder_stress", 0.2505274),
        ("cargo_tank_breach", 0.586655),
        ("double_bottom_integrity", 0.91934),
        ("compartment_flooding", 0.57995262145),
        ("stability_loss", 0.4066640211626534),
        ("lng_release", 0.395294695975),
        ("structural_failure", 0.4905583481631999),
        ("capsizing_risk", 0.2867313916658351),
        ("environmental_impact", 0.24145394169638912),
    ];
    for (id, expected) in golden {
        assert_close(result.probability(id), expected, id);
    }
}

#[test]
fn capsizing_sensitivity_covers_exactly_its_ancestors() {
    let network = test_fixtures::lng_grounding();
    let map = sensitivity(
        "capsizing_risk",
        &network.nodes,
        &network.edges,
        0.01,
        &RiskflowConfig::default(),
    );

    let golden = [
        ("bottom_damage", 0.10492331787310127),
        ("cargo_tank_breach", 0.06092875055797031),
        ("compartment_flooding", 0.15930324506988058),
        ("double_bottom_integrity", 0.05917029963706244),
        ("free_surface_effect", 0.07687399202803147),
        ("impact_energy", 0.07219753609443713),
        ("seabed_type", 0.03455117706304134),
        ("stability_loss", 0.3824201962127738),
    ];
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    let expected_keys: Vec<&str> = golden.iter().map(|&(id, _)| id).collect();
    assert_eq!(keys, expected_keys);
    for (id, expected) in golden {
        assert!(
            (map[id] - expected).abs() < 1e-7,
            "{id}: got {}, expected {expected}",
            map[id]
        );
    }
}

#[test]
fn update_result_serializes_for_the_display_layer() {
    let network = test_fixtures::lng_grounding();
    let result = update(
        &network.nodes,
        &network.edges,
        &PropagationOptions::default(),
        &RiskflowConfig::default(),
    );
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["iterations"], 1);
    assert_eq!(value["converged"], true);
    assert_eq!(value["nodes"][0]["id"], "impact_energy");
    assert_eq!(value["nodes"][0]["type"], "environment");
    assert_eq!(value["nodes"][6]["state"], "critical");
}
