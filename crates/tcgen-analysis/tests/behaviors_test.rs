//! Behavior extractor tests — atomic decomposition, compound-action
//! splitting, malformed-action fallback.

use tcgen_analysis::behaviors::BehaviorExtractor;
use tcgen_analysis::rules::CompiledRules;
use tcgen_core::types::requirement::{NormalizedRequirement, Provenance};
use tcgen_core::RequirementClass;

// ---- Helpers ----

fn rules() -> CompiledRules {
    CompiledRules::default_rules().unwrap()
}

fn norm_req(actor: &str, action: &str, conditions: &[&str], outcome: &str) -> NormalizedRequirement {
    NormalizedRequirement {
        original_text: format!("{actor} shall {action}"),
        actor: actor.to_string(),
        action: action.to_string(),
        conditions: conditions.iter().map(|c| c.to_string()).collect(),
        expected_outcome: outcome.to_string(),
        is_ambiguous: false,
        ambiguity_issues: vec![],
        clarifying_questions: vec![],
        confidence: 1.0,
        provenance: Provenance {
            requirement_id: "FR-TEST".to_string(),
            original_text: format!("{actor} shall {action}"),
            transformation_steps: vec!["test fixture".to_string()],
            confidence: 1.0,
        },
    }
}

// ---- Atomic extraction ----

#[test]
fn single_behavior_extracted_with_verb_and_object() {
    let rules = rules();
    let extractor = BehaviorExtractor::new(&rules);
    let normalized = norm_req("User", "reserve parking slot", &["future time window"], "slot reserved");

    let result = extractor.extract("FR-3", &normalized, RequirementClass::Functional);

    assert_eq!(result.behaviors.len(), 1);
    let behavior = &result.behaviors[0];
    assert_eq!(behavior.requirement_id, "FR-3");
    assert!(behavior.action.contains("reserve"));
    assert!(
        behavior.object_name.contains("parking") || behavior.object_name.contains("slot")
    );
    assert_eq!(behavior.actor, "User");
}

#[test]
fn behavior_ids_are_sequential_within_requirement() {
    let rules = rules();
    let extractor = BehaviorExtractor::new(&rules);
    let normalized = norm_req("System", "authenticate user and redirect to dashboard", &[], "user authenticated");

    let result = extractor.extract("FR-1", &normalized, RequirementClass::Functional);

    assert_eq!(result.behaviors.len(), 2);
    assert_eq!(result.behaviors[0].behavior_id, "FR-1B01");
    assert_eq!(result.behaviors[1].behavior_id, "FR-1B02");
}

#[test]
fn single_verb_action_gets_b01_id() {
    let rules = rules();
    let extractor = BehaviorExtractor::new(&rules);
    let normalized = norm_req("User", "login", &[], "authenticated");

    let result = extractor.extract("FR-1", &normalized, RequirementClass::Functional);

    assert_eq!(result.behaviors.len(), 1);
    assert!(result.behaviors[0].behavior_id.contains("B01"));
}

// ---- Compound actions ----

#[test]
fn compound_action_splits_into_multiple_behaviors() {
    let rules = rules();
    let extractor = BehaviorExtractor::new(&rules);
    let normalized = norm_req(
        "User",
        "reserve slot for future time window and receive confirmation",
        &["slot available"],
        "reservation complete",
    );

    let result = extractor.extract("FR-3", &normalized, RequirementClass::Functional);

    assert_eq!(result.behaviors.len(), 2);
    assert!(result.behaviors[0].action.contains("reserve"));
    assert!(result.behaviors[1].action.contains("receive"));
    assert!(result.issues.iter().any(|i| i.contains("Compound")));
    assert!(result.confidence < 1.0);
}

#[test]
fn each_split_behavior_inherits_actor_and_condition() {
    let rules = rules();
    let extractor = BehaviorExtractor::new(&rules);
    let normalized = norm_req(
        "System",
        "validate the order and notify the customer",
        &["order is pending"],
        "order accepted",
    );

    let result = extractor.extract("FR-7", &normalized, RequirementClass::Functional);

    assert_eq!(result.behaviors.len(), 2);
    for behavior in &result.behaviors {
        assert_eq!(behavior.actor, "System");
        assert_eq!(behavior.condition.as_deref(), Some("order is pending"));
    }
}

// ---- Objects and conditions ----

#[test]
fn object_is_head_noun_phrase_after_verb() {
    let rules = rules();
    let extractor = BehaviorExtractor::new(&rules);
    let normalized = norm_req("Payment Gateway", "process credit card transaction", &[], "payment processed");

    let result = extractor.extract("FR-5", &normalized, RequirementClass::Functional);

    let behavior = &result.behaviors[0];
    assert!(
        behavior.object_name.contains("transaction") || behavior.object_name.contains("credit")
    );
}

#[test]
fn object_stops_at_conditional_marker() {
    let rules = rules();
    let extractor = BehaviorExtractor::new(&rules);
    let normalized = norm_req("User", "reserve slot for future time window", &[], "slot reserved");

    let result = extractor.extract("FR-3", &normalized, RequirementClass::Functional);

    assert_eq!(result.behaviors[0].object_name, "slot");
}

#[test]
fn leading_preposition_skipped_in_object() {
    let rules = rules();
    let extractor = BehaviorExtractor::new(&rules);
    let normalized = norm_req("User", "login with valid credentials", &[], "authenticated");

    let result = extractor.extract("FR-1", &normalized, RequirementClass::Functional);

    assert_eq!(result.behaviors[0].action, "login");
    assert_eq!(result.behaviors[0].object_name, "valid credentials");
}

#[test]
fn conditions_joined_into_behavior_condition() {
    let rules = rules();
    let extractor = BehaviorExtractor::new(&rules);
    let normalized = norm_req("User", "reserve slot", &["for future time window"], "reservation confirmed");

    let result = extractor.extract("FR-3", &normalized, RequirementClass::Functional);

    let condition = result.behaviors[0].condition.as_deref().unwrap();
    assert!(condition.contains("future") || condition.contains("time"));
}

#[test]
fn description_names_actor_and_action() {
    let rules = rules();
    let extractor = BehaviorExtractor::new(&rules);
    let normalized = norm_req("User", "login with credentials", &["valid username"], "authenticated");

    let result = extractor.extract("FR-1", &normalized, RequirementClass::Functional);

    let description = &result.behaviors[0].description;
    assert!(description.contains("login") || description.contains("User"));
}

// ---- Malformed input ----

#[test]
fn malformed_action_still_yields_exactly_one_behavior() {
    let rules = rules();
    let extractor = BehaviorExtractor::new(&rules);
    let normalized = norm_req(
        "System",
        "System (SPMS) 1 Product Overview Product Name",
        &[],
        "",
    );

    let result = extractor.extract("REQ-20260211-001", &normalized, RequirementClass::Nfr);

    assert_eq!(result.behaviors.len(), 1);
    assert!(!result.issues.is_empty());
    assert!(result
        .issues
        .iter()
        .any(|i| i.to_lowercase().contains("malformed") || i.to_lowercase().contains("missing")));
    assert!(result.confidence < 1.0);

    let behavior = &result.behaviors[0];
    assert!(!behavior.behavior_id.is_empty());
    assert_eq!(behavior.requirement_id, "REQ-20260211-001");
}

#[test]
fn missing_verb_without_noise_degrades_confidence() {
    let rules = rules();
    let extractor = BehaviorExtractor::new(&rules);
    let normalized = norm_req("System", "seamless onboarding experience", &[], "");

    let result = extractor.extract("FR-9", &normalized, RequirementClass::Functional);

    assert_eq!(result.behaviors.len(), 1);
    assert!(result.confidence < 1.0);
    assert!(result.issues.iter().any(|i| i.to_lowercase().contains("verb")));
}

#[test]
fn never_returns_zero_behaviors_for_non_empty_action() {
    let rules = rules();
    let extractor = BehaviorExtractor::new(&rules);

    for action in [
        "login",
        "do the thing",
        "1 2 3",
        "Title Case Heading Run",
        "validate input and notify user and record outcome",
    ] {
        let normalized = norm_req("System", action, &[], "done");
        let result = extractor.extract("FR-X", &normalized, RequirementClass::Functional);
        assert!(
            !result.behaviors.is_empty(),
            "action '{action}' produced zero behaviors"
        );
    }
}
