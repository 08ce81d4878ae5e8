//! PipelineConfig tests — defaults, effective accessors, TOML parsing.

use chrono::NaiveDate;
use tcgen_core::config::PipelineConfig;

#[test]
fn defaults_are_documented_values() {
    let config = PipelineConfig::default();

    assert_eq!(config.effective_determinism_seed(), 42);
    assert_eq!(config.effective_secondary_class_threshold(), 0.25);
    assert_eq!(config.effective_max_requirements_per_input(), 16);
    assert_eq!(config.effective_model_reference(), "rule-based-v1");
}

#[test]
fn explicit_values_override_defaults() {
    let config = PipelineConfig {
        determinism_seed: Some(7),
        run_date: NaiveDate::from_ymd_opt(2026, 1, 2),
        model_reference: Some("rule-based-v2".to_string()),
        ..Default::default()
    };

    assert_eq!(config.effective_determinism_seed(), 7);
    assert_eq!(
        config.effective_run_date(),
        NaiveDate::from_ymd_opt(2026, 1, 2).unwrap()
    );
    assert_eq!(config.effective_model_reference(), "rule-based-v2");
}

#[test]
fn parses_partial_toml() {
    let config = PipelineConfig::from_toml_str(
        r#"
determinism_seed = 99
secondary_class_threshold = 0.5
"#,
    )
    .unwrap();

    assert_eq!(config.effective_determinism_seed(), 99);
    assert_eq!(config.effective_secondary_class_threshold(), 0.5);
    // Unset fields keep their defaults.
    assert_eq!(config.effective_max_requirements_per_input(), 16);
}

#[test]
fn rejects_malformed_toml() {
    let err = PipelineConfig::from_toml_str("determinism_seed = [not a number").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("configuration error"), "got: {message}");
}
