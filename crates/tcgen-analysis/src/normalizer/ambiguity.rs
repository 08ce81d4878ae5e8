//! Ambiguity detection — vague qualifiers and missing structure.

use tcgen_core::types::requirement::AmbiguityIssue;

use crate::rules::CompiledRules;

pub(crate) struct AmbiguityFindings {
    pub issues: Vec<AmbiguityIssue>,
    pub questions: Vec<String>,
}

/// Scan one clause for ambiguity. Every issue gets a matching
/// clarifying question, so `is_ambiguous` downstream never holds
/// without at least one of each.
pub(crate) fn detect(
    clause: &str,
    actor_missing: bool,
    modal_missing: bool,
    rules: &CompiledRules,
) -> AmbiguityFindings {
    let mut issues = Vec::new();
    let mut questions = Vec::new();

    // Vague qualifiers only count when no measurable quantity appears
    // nearby in the same clause.
    if !rules.has_measurable_quantity(clause) {
        let lower = clause.to_lowercase();
        for term in rules.vague_hits(&lower) {
            issues.push(AmbiguityIssue::new(format!(
                "Vague term '{term}' used without measurable criteria"
            )));
            questions.push(format!(
                "What measurable criteria define '{term}' for this requirement?"
            ));
        }
    }

    if actor_missing {
        issues.push(AmbiguityIssue::new(
            "No actor found preceding the modal verb",
        ));
        questions.push("Who or what performs this action?".to_string());
    }

    if modal_missing {
        issues.push(AmbiguityIssue::new(
            "No modal verb found; requirement strength is unclear",
        ));
        questions.push(
            "Is this requirement mandatory (shall/must) or optional (may)?".to_string(),
        );
    }

    AmbiguityFindings { issues, questions }
}
