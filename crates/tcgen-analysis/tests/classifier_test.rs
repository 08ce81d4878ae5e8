//! Classifier tests — per-class scoring, priority hints, reasoning.

use chrono::NaiveDate;

use tcgen_analysis::classifier::Classifier;
use tcgen_analysis::normalizer::Normalizer;
use tcgen_analysis::rules::CompiledRules;
use tcgen_core::types::classification::Classification;
use tcgen_core::{Priority, RequirementClass};

// ---- Helpers ----

fn classify(text: &str) -> Classification {
    let rules = CompiledRules::default_rules().unwrap();
    let mut normalizer = Normalizer::new(
        &rules,
        NaiveDate::from_ymd_opt(2026, 2, 11).unwrap(),
        16,
    );
    let normalized = normalizer.normalize(text).remove(0);
    Classifier::new(&rules, 0.25).classify(text, &normalized)
}

// ---- Primary class selection ----

#[test]
fn functional_requirement_classified_with_dominant_confidence() {
    let result = classify("User shall create a new account");

    assert_eq!(result.primary_class, RequirementClass::Functional);
    let score = result.confidence_scores[&RequirementClass::Functional];
    assert!((0.7..=1.0).contains(&score), "got {score}");
}

#[test]
fn security_requirement_classified() {
    let result = classify("System shall encrypt all sensitive data using AES-256");

    assert_eq!(result.primary_class, RequirementClass::Security);
}

#[test]
fn performance_requirement_classified_from_time_pattern() {
    let result = classify("API shall respond within 100 milliseconds");

    assert_eq!(result.primary_class, RequirementClass::Performance);
}

#[test]
fn validation_requirement_classified() {
    let result = classify("User input must be validated for format and length");

    assert_eq!(result.primary_class, RequirementClass::Validation);
}

#[test]
fn api_requirement_classified_from_verb_and_path() {
    let result = classify("POST /users endpoint shall create a new user");

    assert_eq!(result.primary_class, RequirementClass::ApiBehavior);
}

#[test]
fn nfr_requirement_classified_from_percentage() {
    let result = classify("System shall maintain 99.9% uptime");

    assert_eq!(result.primary_class, RequirementClass::Nfr);
}

#[test]
fn unmatched_text_defaults_to_functional() {
    let result = classify("Widget shall frobnicate the doohickey");

    assert_eq!(result.primary_class, RequirementClass::Functional);
}

// ---- Secondary classes ----

#[test]
fn secondary_classes_exclude_primary_and_order_by_score() {
    let result = classify("System shall encrypt the password and respond within 100 milliseconds");

    assert_eq!(result.primary_class, RequirementClass::Performance);
    assert!(result.secondary_classes.contains(&RequirementClass::Security));
    assert!(!result.secondary_classes.contains(&result.primary_class));

    let mut deduped = result.secondary_classes.to_vec();
    deduped.dedup();
    assert_eq!(deduped.len(), result.secondary_classes.len());
}

#[test]
fn tie_breaks_are_deterministic_and_prefer_security() {
    // One security hit versus the Functional baseline: equal raw
    // scores, fixed rank decides.
    let result = classify("System shall prevent unauthorized access");

    assert_eq!(result.primary_class, RequirementClass::Security);
}

// ---- Priority hints ----

#[test]
fn security_wording_gets_high_priority() {
    let result = classify("System shall prevent unauthorized access");

    assert_eq!(result.priority_hint, Priority::High);
}

#[test]
fn payment_wording_gets_high_priority() {
    let result = classify("Gateway shall process payment refunds");

    assert_eq!(result.priority_hint, Priority::High);
}

#[test]
fn cosmetic_wording_gets_low_priority() {
    let result = classify("The settings page should use a softer color scheme for each informational tooltip");

    assert_eq!(result.priority_hint, Priority::Low);
}

#[test]
fn default_priority_is_medium() {
    let result = classify("User shall view the activity feed");

    assert_eq!(result.priority_hint, Priority::Medium);
}

// ---- Reasoning and determinism ----

#[test]
fn reasoning_starts_with_primary_classification_and_cites_triggers() {
    let result = classify("System shall encrypt all sensitive data using AES-256");

    assert!(result.reasoning.starts_with("Primary classification:"));
    assert!(result.reasoning.contains("encrypt"));
}

#[test]
fn classification_is_deterministic() {
    let text = "System shall encrypt the password and respond within 100 milliseconds";
    let a = classify(text);
    let b = classify(text);

    assert_eq!(a.primary_class, b.primary_class);
    assert_eq!(a.secondary_classes, b.secondary_classes);
    assert_eq!(a.reasoning, b.reasoning);
}

#[test]
fn confidence_scores_cover_all_classes_in_unit_range() {
    let result = classify("User shall login with valid credentials");

    assert_eq!(result.confidence_scores.len(), RequirementClass::all().len());
    for (_, score) in &result.confidence_scores {
        assert!((0.0..=1.0).contains(score));
    }
}
