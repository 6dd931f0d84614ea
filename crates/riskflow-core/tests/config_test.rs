use std::io::Write;

use proptest::prelude::*;
use riskflow_core::config::*;
use riskflow_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = RiskflowConfig::from_toml("").unwrap();

    // Propagation defaults
    assert_eq!(config.propagation.dampening, 0.3);
    assert_eq!(config.propagation.default_edge_strength, 0.5);

    // Convergence defaults
    assert_eq!(config.convergence.threshold, 1e-6);
    assert_eq!(config.convergence.max_iterations, 100);

    // Sensitivity defaults
    assert_eq!(config.sensitivity.delta, 0.01);
    assert_eq!(config.sensitivity.epsilon, 1e-9);

    // Classification defaults
    assert_eq!(config.classification.safe_below, 0.3);
    assert_eq!(config.classification.warning_below, 0.7);

    assert!(!config.validation.strict);
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);

    assert_eq!(config, RiskflowConfig::default());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[propagation]
dampening = 0.1

[convergence]
max_iterations = 25

[validation]
strict = true
"#;
    let config = RiskflowConfig::from_toml(toml).unwrap();
    assert_eq!(config.propagation.dampening, 0.1);
    assert_eq!(config.convergence.max_iterations, 25);
    assert!(config.validation.strict);
    // Non-overridden fields keep defaults
    assert_eq!(config.propagation.default_edge_strength, 0.5);
    assert_eq!(config.convergence.threshold, 1e-6); // default
}

#[test]
fn config_serde_roundtrip() {
    let config = RiskflowConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = RiskflowConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped, config);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = RiskflowConfig::from_toml("[propagation\ndampening = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn from_toml_rejects_out_of_range_values() {
    let err = RiskflowConfig::from_toml("[propagation]\ndampening = 5.0").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "propagation.dampening");
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = RiskflowConfig::from_toml("[convergence]\nmax_iterations = 0").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn default_config_validates() {
    RiskflowConfig::default().validate().unwrap();
}

#[test]
fn validate_rejects_out_of_range_dampening() {
    let mut config = RiskflowConfig::default();
    config.propagation.dampening = 1.5;
    match config.validate().unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "propagation.dampening");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn validate_rejects_inverted_thresholds() {
    let mut config = RiskflowConfig::default();
    config.classification.safe_below = 0.8;
    config.classification.warning_below = 0.4;
    assert!(config.validate().is_err());
}

#[test]
fn validate_rejects_degenerate_convergence_and_sensitivity() {
    let mut config = RiskflowConfig::default();
    config.convergence.max_iterations = 0;
    assert!(config.validate().is_err());

    let mut config = RiskflowConfig::default();
    config.convergence.threshold = 0.0;
    assert!(config.validate().is_err());

    let mut config = RiskflowConfig::default();
    config.sensitivity.delta = f64::NAN;
    assert!(config.validate().is_err());

    let mut config = RiskflowConfig::default();
    config.sensitivity.delta = 0.0;
    assert!(config.validate().is_err());

    // A negative delta is a backward difference.
    let mut config = RiskflowConfig::default();
    config.sensitivity.delta = -0.01;
    config.validate().unwrap();

    let mut config = RiskflowConfig::default();
    config.sensitivity.epsilon = -1e-9;
    assert!(config.validate().is_err());
}

#[test]
fn load_reads_and_validates_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[sensitivity]\ndelta = 0.05").unwrap();
    let config = RiskflowConfig::load(file.path()).unwrap();
    assert_eq!(config.sensitivity.delta, 0.05);

    let mut bad = tempfile::NamedTempFile::new().unwrap();
    writeln!(bad, "[propagation]\ndefault_edge_strength = 2.0").unwrap();
    assert!(matches!(
        RiskflowConfig::load(bad.path()).unwrap_err(),
        ConfigError::ValidationFailed { .. }
    ));
}

#[test]
fn load_missing_file_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = RiskflowConfig::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn propagation_options_follow_config() {
    let mut config = RiskflowConfig::default();
    config.propagation.dampening = 0.45;
    config.classification.safe_below = 0.2;
    let options = config.propagation_options();
    assert_eq!(options.dampening, 0.45);
    assert_eq!(options.thresholds.safe_below, 0.2);
    assert!(!options.iterate_to_convergence);
    assert!(options.evidence_nodes.is_empty());
}

proptest! {
    #[test]
    fn any_unit_dampening_and_ordered_thresholds_validate(
        dampening in 0.0_f64..=1.0,
        a in 0.0_f64..=1.0,
        b in 0.0_f64..=1.0,
    ) {
        let mut config = RiskflowConfig::default();
        config.propagation.dampening = dampening;
        config.classification.safe_below = a.min(b);
        config.classification.warning_below = a.max(b);
        prop_assert!(config.validate().is_ok());
    }
}
