//! Normalizer tests — compound splitting, slot extraction, ambiguity
//! detection, and provenance tracking.

use chrono::NaiveDate;

use tcgen_analysis::normalizer::Normalizer;
use tcgen_analysis::rules::CompiledRules;

// ---- Helpers ----

fn rules() -> CompiledRules {
    CompiledRules::default_rules().unwrap()
}

fn run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 11).unwrap()
}

fn normalize(text: &str) -> Vec<tcgen_core::types::requirement::NormalizedRequirement> {
    let rules = rules();
    let mut normalizer = Normalizer::new(&rules, run_date(), 16);
    normalizer.normalize(text)
}

// ---- Simple normalization ----

#[test]
fn simple_requirement_normalizes_to_single_result() {
    let text = "User shall login with valid credentials";
    let results = normalize(text);

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.original_text, text);
    assert_eq!(result.actor, "User");
    assert!(result.action.to_lowercase().contains("login"));
    assert!(!result.expected_outcome.is_empty());
    assert!(!result.provenance.transformation_steps.is_empty());
    assert!(!result.is_ambiguous);
}

#[test]
fn logout_requirement_has_full_provenance() {
    let results = normalize("User shall logout");

    assert_eq!(results.len(), 1);
    let prov = &results[0].provenance;
    assert!(prov.requirement_id.starts_with("REQ-20260211-"));
    assert_eq!(prov.original_text, "User shall logout");
    assert!(!prov.transformation_steps.is_empty());
    assert_eq!(prov.confidence, results[0].confidence);
}

// ---- Compound splitting ----

#[test]
fn compound_requirement_splits_per_actor() {
    let results = normalize("User shall login and system shall authenticate");

    assert_eq!(results.len(), 2);
    let actors: Vec<&str> = results.iter().map(|r| r.actor.as_str()).collect();
    assert!(actors.contains(&"User"));
    assert!(actors.contains(&"System"));

    // Each split clause gets its own id.
    assert_ne!(
        results[0].provenance.requirement_id,
        results[1].provenance.requirement_id
    );
}

#[test]
fn three_way_compound_splits_at_every_boundary() {
    let results = normalize(
        "User shall login and system shall authenticate and gateway shall record the attempt",
    );

    assert_eq!(results.len(), 3);
}

#[test]
fn same_actor_with_multiple_actions_stays_one_requirement() {
    // Compound-action splitting belongs to the behavior extractor.
    let results = normalize("System shall authenticate the user and redirect to dashboard");

    assert_eq!(results.len(), 1);
    assert!(results[0].action.contains("authenticate"));
    assert!(results[0].action.contains("redirect"));
}

#[test]
fn conjunction_inside_condition_does_not_split() {
    let results =
        normalize("System shall retry when the network is down and the backup link shall activate");

    assert_eq!(results.len(), 1);
}

#[test]
fn conjoined_subjects_split_per_actor() {
    let results = normalize("Users and admins shall view the dashboard");

    assert_eq!(results.len(), 2);
    let actors: Vec<&str> = results.iter().map(|r| r.actor.as_str()).collect();
    assert!(actors.contains(&"Users"));
    assert!(actors.contains(&"Admins"));
    assert_eq!(results[0].action, results[1].action);
}

// ---- Ambiguity detection ----

#[test]
fn vague_terms_flag_ambiguity() {
    let results = normalize("The system shall be fast and secure");

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert!(result.is_ambiguous || !result.clarifying_questions.is_empty());
    assert!(result.ambiguity_issues.len() >= 2);
    assert_eq!(result.ambiguity_issues.len(), result.clarifying_questions.len());
    assert!(result.confidence < 1.0);
}

#[test]
fn vague_term_with_measurable_quantity_is_not_flagged() {
    let results = normalize("System shall be fast, responding within 100 milliseconds");

    assert!(!results[0].is_ambiguous);
    assert!(results[0].ambiguity_issues.is_empty());
}

#[test]
fn ambiguity_never_set_without_issues() {
    for text in [
        "User shall login with valid credentials",
        "The system shall be fast and secure",
        "Shall perform the action successfully",
    ] {
        for result in normalize(text) {
            if result.is_ambiguous {
                assert!(
                    !result.ambiguity_issues.is_empty()
                        || !result.clarifying_questions.is_empty()
                );
            }
        }
    }
}

#[test]
fn confidence_decreases_monotonically_with_issue_count() {
    let one_vague = normalize("System shall be fast")[0].confidence;
    let three_vague = normalize("System shall be fast and secure and intuitive")[0].confidence;

    assert!(three_vague < one_vague);
}

// ---- Missing structure ----

#[test]
fn missing_actor_is_detected_not_fatal() {
    let results = normalize("Shall perform the action successfully");

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert!(result.confidence < 1.0 || !result.ambiguity_issues.is_empty());
    // Actor slot is backfilled, never left blank.
    assert!(!result.actor.is_empty());
}

#[test]
fn text_without_modal_still_returns_low_confidence_result() {
    let results = normalize("Parking slot availability overview");

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert!(result.confidence < 1.0);
    assert!(!result.ambiguity_issues.is_empty());
    assert!(!result.provenance.transformation_steps.is_empty());
    assert!(!result.action.is_empty());
}

// ---- Conditions and outcomes ----

#[test]
fn condition_extracted_from_when_clause() {
    let results = normalize("User shall login when credentials are valid");

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.conditions.len(), 1);
    assert!(result.conditions[0].contains("credentials are valid"));
    assert_eq!(result.action, "login");
}

#[test]
fn multiple_conditions_extracted_in_order() {
    let results =
        normalize("System shall lock the account if attempts exceed the limit while the user is active");

    let conditions = &results[0].conditions;
    assert_eq!(conditions.len(), 2);
    assert!(conditions[0].contains("attempts exceed"));
    assert!(conditions[1].contains("user is active"));
}

#[test]
fn outcome_marker_captures_trailing_clause() {
    let results =
        normalize("System shall send a receipt so that the customer has proof of purchase");

    let result = &results[0];
    assert!(result.expected_outcome.contains("proof of purchase"));
    assert!(!result.action.contains("proof"));
}

#[test]
fn outcome_defaults_to_action_paraphrase() {
    let results = normalize("User shall logout");

    assert!(results[0].expected_outcome.contains("logout"));
}

// ---- Identifier discipline ----

#[test]
fn requirement_ids_are_unique_and_sequential_within_batch() {
    let rules = rules();
    let mut normalizer = Normalizer::new(&rules, run_date(), 16);

    let first = normalizer.normalize("User shall login and system shall authenticate");
    let second = normalizer.normalize("Admin shall export the report");

    let mut ids: Vec<String> = first
        .iter()
        .chain(second.iter())
        .map(|r| r.provenance.requirement_id.clone())
        .collect();
    assert_eq!(ids.len(), 3);
    ids.dedup();
    assert_eq!(ids.len(), 3, "ids must never repeat within a batch");
    assert_eq!(ids[0], "REQ-20260211-0001");
    assert_eq!(ids[2], "REQ-20260211-0003");
}
