//! Normalizer — raw text to atomic Actor-Action-Conditions-Outcome
//! statements with ambiguity and provenance metadata.
//!
//! This stage never fails outward: missing information degrades
//! confidence and appends issues. For any non-empty input it returns at
//! least one result.

mod ambiguity;
mod splitting;
mod slots;

use chrono::NaiveDate;

use tcgen_core::ids::RequirementIdAllocator;
use tcgen_core::types::requirement::{NormalizedRequirement, Provenance};

use crate::rules::CompiledRules;
use crate::text::{capitalize, clean_fragment};

use self::slots::{extract_slots, Slots};
use self::splitting::split_compound;

/// Confidence penalties per detected problem. Confidence decreases
/// monotonically with the number of issues and never drops below the
/// floor.
const PENALTY_MISSING_ACTOR: f32 = 0.25;
const PENALTY_MISSING_MODAL: f32 = 0.30;
const PENALTY_VAGUE_TERM: f32 = 0.15;
const CONFIDENCE_FLOOR: f32 = 0.10;

pub struct Normalizer<'r> {
    rules: &'r CompiledRules,
    ids: RequirementIdAllocator,
    max_per_input: usize,
}

impl<'r> Normalizer<'r> {
    pub fn new(rules: &'r CompiledRules, run_date: NaiveDate, max_per_input: usize) -> Self {
        Self {
            rules,
            ids: RequirementIdAllocator::new(run_date),
            max_per_input: max_per_input.max(1),
        }
    }

    /// Normalize one input text into atomic requirements.
    ///
    /// Never returns an empty sequence for non-empty input: text with
    /// no modal verb and no recognizable actor still yields one
    /// low-confidence result with an explicit issue.
    pub fn normalize(&mut self, text: &str) -> Vec<NormalizedRequirement> {
        let trimmed = text.trim();

        let mut split = split_compound(trimmed, self.rules);
        if split.clauses.is_empty() {
            split.clauses.push(trimmed.to_string());
        }
        let clause_total = split.clauses.len();
        if clause_total > self.max_per_input {
            tracing::warn!(
                clauses = clause_total,
                cap = self.max_per_input,
                "clause count exceeds per-input cap; truncating"
            );
            split.clauses.truncate(self.max_per_input);
        }

        let mut results = Vec::with_capacity(split.clauses.len());
        for (clause_idx, clause) in split.clauses.iter().enumerate() {
            let slots = extract_slots(clause, self.rules);

            // Conjoined subjects before one modal ("Users and admins
            // shall …") become one requirement per actor.
            let actors = conjoined_actors(slots.actor.as_deref());
            for actor in &actors {
                results.push(self.build_requirement(
                    clause,
                    &slots,
                    actor.as_deref(),
                    split.split_applied.then_some((clause_idx, clause_total)),
                    actors.len(),
                ));
            }
        }

        tracing::debug!(
            input_len = trimmed.len(),
            requirements = results.len(),
            "normalization complete"
        );
        results
    }

    fn build_requirement(
        &mut self,
        clause: &str,
        slots: &Slots,
        actor: Option<&str>,
        compound: Option<(usize, usize)>,
        actor_count: usize,
    ) -> NormalizedRequirement {
        let mut steps: Vec<String> = Vec::new();

        if let Some((idx, total)) = compound {
            steps.push(format!(
                "Split compound text at actor boundary; clause {} of {}",
                idx + 1,
                total
            ));
        }
        if actor_count > 1 {
            steps.push(format!(
                "Split conjoined subjects into {actor_count} requirements sharing one action"
            ));
        }

        let actor_missing = actor.is_none();
        let modal_missing = slots.modal.is_none();

        let actor_name = match actor {
            Some(a) => {
                steps.push(match &slots.modal {
                    Some(modal) => {
                        format!("Identified actor '{a}' preceding modal '{modal}'")
                    }
                    None => format!("Identified actor '{a}'"),
                });
                a.to_string()
            }
            None => {
                steps.push("No actor detected; defaulted to 'Unspecified'".to_string());
                "Unspecified".to_string()
            }
        };

        let mut action = slots.action.clone();
        if action.is_empty() {
            action = clean_fragment(clause);
            steps.push("Action slot empty; fell back to full clause text".to_string());
            if action.is_empty() {
                action = "unspecified action".to_string();
                steps.push("Clause carried no usable text; recorded placeholder action".to_string());
            }
        } else if modal_missing {
            steps.push("No modal verb found; treated full clause as action".to_string());
        } else {
            steps.push(format!("Extracted action '{action}' following modal"));
        }

        let mut conditions = Vec::with_capacity(slots.conditions.len());
        for (marker, cond) in &slots.conditions {
            steps.push(format!("Extracted condition '{cond}' introduced by '{marker}'"));
            conditions.push(cond.clone());
        }

        let expected_outcome = match &slots.expected_outcome {
            Some(out) => {
                steps.push(format!("Captured expected outcome '{out}'"));
                out.clone()
            }
            None => {
                steps.push("Defaulted expected outcome from action".to_string());
                format!("{action} completed successfully")
            }
        };

        let findings = ambiguity::detect(clause, actor_missing, modal_missing, self.rules);
        if !findings.issues.is_empty() {
            steps.push(format!(
                "Recorded {} ambiguity issue(s) with clarifying questions",
                findings.issues.len()
            ));
        }

        let mut confidence = 1.0f32;
        if actor_missing {
            confidence -= PENALTY_MISSING_ACTOR;
        }
        if modal_missing {
            confidence -= PENALTY_MISSING_MODAL;
        }
        let vague_count = findings
            .issues
            .len()
            .saturating_sub(usize::from(actor_missing) + usize::from(modal_missing));
        confidence -= PENALTY_VAGUE_TERM * vague_count as f32;
        let confidence = confidence.max(CONFIDENCE_FLOOR);

        let requirement_id = self.ids.next_id();
        let is_ambiguous = !findings.issues.is_empty();
        if is_ambiguous {
            tracing::debug!(
                requirement_id = %requirement_id,
                issues = findings.issues.len(),
                confidence,
                "requirement flagged as ambiguous"
            );
        }

        NormalizedRequirement {
            original_text: clause.to_string(),
            actor: actor_name,
            action,
            conditions,
            expected_outcome,
            is_ambiguous,
            ambiguity_issues: findings.issues,
            clarifying_questions: findings.questions,
            confidence,
            provenance: Provenance {
                requirement_id,
                original_text: clause.to_string(),
                transformation_steps: steps,
                confidence,
            },
        }
    }
}

/// Split a conjoined-subject actor ("Users and admins") into its parts.
/// A single actor comes back as a one-element list; `None` stays as a
/// single missing actor.
fn conjoined_actors(actor: Option<&str>) -> Vec<Option<String>> {
    let Some(actor) = actor else {
        return vec![None];
    };

    let lower = actor.to_lowercase();
    if !lower.contains(" and ") {
        return vec![Some(actor.to_string())];
    }

    let parts: Vec<String> = lower
        .split(" and ")
        .flat_map(|p| p.split(','))
        .map(|p| clean_fragment(p))
        .filter(|p| !p.is_empty())
        .map(|p| capitalize(&p))
        .collect();

    if parts.len() < 2 {
        vec![Some(actor.to_string())]
    } else {
        parts.into_iter().map(Some).collect()
    }
}
