//! Classifier — requirement-type labels, priority hint, reasoning.
//!
//! Pure keyword/pattern scoring over the rule tables: keyword hits
//! score 1, regex pattern hits score 2. The highest score wins,
//! defaulting to Functional — a requirement with a modal verb and an
//! action always has baseline Functional applicability. Ties break by
//! the fixed class rank so output stays deterministic.

use std::collections::BTreeMap;

use smallvec::SmallVec;

use tcgen_core::types::classification::Classification;
use tcgen_core::types::requirement::NormalizedRequirement;
use tcgen_core::{Priority, RequirementClass};

use crate::rules::CompiledRules;

/// Baseline raw score granted to Functional for any classified text.
const FUNCTIONAL_BASELINE: u32 = 1;
/// Minimum raw hits for a dimension to qualify as a secondary class.
const SECONDARY_MIN_RAW: u32 = 1;

pub struct Classifier<'r> {
    rules: &'r CompiledRules,
    secondary_threshold: f32,
}

struct ClassScore {
    class: RequirementClass,
    raw: u32,
    triggers: Vec<String>,
}

impl<'r> Classifier<'r> {
    pub fn new(rules: &'r CompiledRules, secondary_threshold: f32) -> Self {
        Self {
            rules,
            secondary_threshold,
        }
    }

    /// Classify one requirement. Pure and total over any string input;
    /// the only degradation path is the Functional default.
    pub fn classify(&self, text: &str, normalized: &NormalizedRequirement) -> Classification {
        let lower = text.to_lowercase();

        let mut scores: Vec<ClassScore> = Vec::with_capacity(RequirementClass::all().len());
        for table in self.rules.class_tables() {
            let mut triggers: Vec<String> =
                table.keyword_hits(&lower).iter().map(|t| t.to_string()).collect();
            let keyword_raw = triggers.len() as u32;
            let pattern_hits = table.pattern_hits(text);
            let pattern_raw = 2 * pattern_hits.len() as u32;
            triggers.extend(pattern_hits);

            let mut raw = keyword_raw + pattern_raw;
            if table.class == RequirementClass::Functional {
                raw += FUNCTIONAL_BASELINE;
            }
            scores.push(ClassScore {
                class: table.class,
                raw,
                triggers,
            });
        }

        // An override that empties the tables still classifies: fall
        // back to the unconditional Functional baseline.
        if scores.is_empty() {
            scores.push(ClassScore {
                class: RequirementClass::Functional,
                raw: FUNCTIONAL_BASELINE,
                triggers: Vec::new(),
            });
        }

        // Highest raw score first; ties break by the fixed class rank.
        scores.sort_by(|a, b| {
            b.raw
                .cmp(&a.raw)
                .then_with(|| a.class.tie_break_rank().cmp(&b.class.tie_break_rank()))
        });

        let primary = &scores[0];
        let primary_raw = primary.raw.max(1);
        let second_raw = scores.get(1).map(|s| s.raw).unwrap_or(0);

        let mut confidence_scores: BTreeMap<RequirementClass, f32> = BTreeMap::new();
        for score in &scores {
            let value = if score.class == primary.class {
                // Primary sits in [0.7, 1.0]; the margin over the
                // runner-up pushes it toward 1.0.
                let margin = 1.0 - second_raw as f32 / primary_raw as f32;
                (0.7 + 0.3 * margin).clamp(0.7, 1.0)
            } else if score.raw == 0 {
                0.0
            } else {
                0.6 * score.raw as f32 / primary_raw as f32
            };
            confidence_scores.insert(score.class, value);
        }

        let secondary_classes: SmallVec<[RequirementClass; 3]> = scores[1..]
            .iter()
            .filter(|s| {
                s.raw >= SECONDARY_MIN_RAW
                    && confidence_scores[&s.class] >= self.secondary_threshold
            })
            .map(|s| s.class)
            .collect();

        let priority_hint = self.priority_hint(&lower, primary.class);
        let reasoning = build_reasoning(primary, &scores[1..], &secondary_classes, priority_hint);

        tracing::debug!(
            primary = %primary.class,
            secondaries = secondary_classes.len(),
            priority = %priority_hint,
            "classified requirement '{}'",
            normalized.requirement_id()
        );

        Classification {
            primary_class: primary.class,
            secondary_classes,
            confidence_scores,
            priority_hint,
            reasoning,
        }
    }

    /// Total priority mapping: High for security-sensitive or
    /// irreversibility wording, Low only for cosmetic/informational
    /// wording, Medium otherwise.
    fn priority_hint(&self, lower: &str, primary: RequirementClass) -> Priority {
        let high_hits = self.rules.high_priority_hits(lower);
        if !high_hits.is_empty() || primary == RequirementClass::Security {
            return Priority::High;
        }
        if !self.rules.low_priority_hits(lower).is_empty() {
            return Priority::Low;
        }
        Priority::Medium
    }
}

fn build_reasoning(
    primary: &ClassScore,
    rest: &[ClassScore],
    secondaries: &[RequirementClass],
    priority: Priority,
) -> String {
    let mut out = String::from("Primary classification: ");
    out.push_str(primary.class.name());
    if primary.triggers.is_empty() {
        out.push_str(" (default: modal verb with action present)");
    } else {
        out.push_str(&format!(" (matched: {})", primary.triggers.join(", ")));
    }
    out.push('.');

    for class in secondaries {
        if let Some(score) = rest.iter().find(|s| s.class == *class) {
            out.push_str(&format!(
                " Secondary: {} (matched: {}).",
                score.class.name(),
                score.triggers.join(", ")
            ));
        }
    }

    out.push_str(&format!(" Priority hint: {priority}."));
    out
}
