//! Behavior extractor — one actor, one action, one object per unit.
//!
//! Splits compound action phrases on coordinating conjunctions that
//! join two verb phrases sharing the same actor. Malformed action text
//! still produces exactly one fallback behavior — never zero — with a
//! reduced confidence and an explicit issue.

use regex::Regex;

use tcgen_core::ids::behavior_id;
use tcgen_core::types::behavior::AtomicBehavior;
use tcgen_core::types::requirement::NormalizedRequirement;
use tcgen_core::RequirementClass;

use crate::rules::CompiledRules;
use crate::text::{norm_token, tokenize};

/// Result of extracting atomic behaviors from one requirement.
#[derive(Debug, Clone)]
pub struct BehaviorExtraction {
    pub behaviors: Vec<AtomicBehavior>,
    pub confidence: f32,
    pub issues: Vec<String>,
}

const CONFIDENCE_CLEAN: f32 = 1.0;
const CONFIDENCE_SPLIT: f32 = 0.9;
const CONFIDENCE_NO_VERB: f32 = 0.7;
const CONFIDENCE_MALFORMED: f32 = 0.5;

pub struct BehaviorExtractor<'r> {
    rules: &'r CompiledRules,
    paren_code: Regex,
    numbering: Regex,
}

impl<'r> BehaviorExtractor<'r> {
    pub fn new(rules: &'r CompiledRules) -> Self {
        Self {
            rules,
            // Structural noise left over from copy-pasted document
            // headings: parenthetical codes and stray numbering.
            paren_code: Regex::new(r"\([A-Z0-9]{2,}\)").expect("static regex"),
            numbering: Regex::new(r"(?:^|\s)\d+(?:\s|$)").expect("static regex"),
        }
    }

    /// Extract atomic behaviors. Never returns zero behaviors for a
    /// non-empty action; issues are informational, not fatal.
    pub fn extract(
        &self,
        requirement_id: &str,
        normalized: &NormalizedRequirement,
        requirement_type: RequirementClass,
    ) -> BehaviorExtraction {
        let action = normalized.action.trim();
        let condition = joined_condition(&normalized.conditions);

        if action.is_empty() {
            // The normalizer backfills the action slot, so this is a
            // degenerate input; still emit one behavior.
            let behavior = self.fallback_behavior(
                requirement_id,
                normalized,
                &normalized.original_text,
                condition.clone(),
            );
            return BehaviorExtraction {
                behaviors: vec![behavior],
                confidence: 0.4,
                issues: vec!["Missing action text; used original text as fallback".to_string()],
            };
        }

        let has_verb = tokenize(action)
            .iter()
            .any(|t| self.rules.is_action_verb(&norm_token(t)));

        if !has_verb {
            let noisy = self.is_structural_noise(action);
            let (issue, confidence) = if noisy {
                (
                    format!(
                        "Malformed action text '{action}': no recognizable verb and \
                         structural noise present; used raw text as fallback"
                    ),
                    CONFIDENCE_MALFORMED,
                )
            } else {
                (
                    "Missing recognizable verb in action; treated phrase as one behavior"
                        .to_string(),
                    CONFIDENCE_NO_VERB,
                )
            };
            tracing::warn!(
                requirement_id,
                requirement_type = %requirement_type,
                "degraded behavior extraction: {issue}"
            );
            let behavior =
                self.fallback_behavior(requirement_id, normalized, action, condition);
            return BehaviorExtraction {
                behaviors: vec![behavior],
                confidence,
                issues: vec![issue],
            };
        }

        let parts = self.split_compound_action(action);
        let mut issues = Vec::new();
        let confidence = if parts.len() > 1 {
            issues.push(format!(
                "Compound action detected; split into {} behaviors",
                parts.len()
            ));
            CONFIDENCE_SPLIT
        } else {
            CONFIDENCE_CLEAN
        };

        let behaviors: Vec<AtomicBehavior> = parts
            .iter()
            .enumerate()
            .map(|(idx, part)| {
                let (verb, object) = self.verb_and_object(part);
                let description = describe(&normalized.actor, part, condition.as_deref());
                AtomicBehavior {
                    behavior_id: behavior_id(requirement_id, idx),
                    requirement_id: requirement_id.to_string(),
                    actor: normalized.actor.clone(),
                    action: verb,
                    object_name: object,
                    condition: condition.clone(),
                    description,
                }
            })
            .collect();

        tracing::debug!(
            requirement_id,
            behaviors = behaviors.len(),
            confidence,
            "behavior extraction complete"
        );

        BehaviorExtraction {
            behaviors,
            confidence,
            issues,
        }
    }

    /// Split an action phrase at conjunctions that introduce a new verb
    /// phrase ("authenticate user and redirect to dashboard").
    fn split_compound_action(&self, action: &str) -> Vec<String> {
        let tokens = tokenize(action);
        let mut parts: Vec<String> = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        let mut i = 0;
        while i < tokens.len() {
            let norm = norm_token(tokens[i]);
            if (norm == "and" || norm == "then") && !current.is_empty() {
                // Split only when the next non-article token is a verb.
                let mut j = i + 1;
                while j < tokens.len() && self.rules.is_article(&norm_token(tokens[j])) {
                    j += 1;
                }
                if j < tokens.len() && self.rules.is_action_verb(&norm_token(tokens[j])) {
                    parts.push(current.join(" "));
                    current = Vec::new();
                    i += 1;
                    continue;
                }
            }
            current.push(tokens[i]);
            i += 1;
        }
        if !current.is_empty() {
            parts.push(current.join(" "));
        }
        if parts.is_empty() {
            parts.push(action.to_string());
        }
        parts
    }

    /// Pull the verb and the head noun phrase out of one atomic part.
    /// The object stops at the first conditional marker and skips a
    /// leading preposition ("login with valid credentials" → verb
    /// "login", object "valid credentials").
    fn verb_and_object(&self, part: &str) -> (String, String) {
        let tokens = tokenize(part);
        let verb_at = tokens
            .iter()
            .position(|t| self.rules.is_action_verb(&norm_token(t)))
            .unwrap_or(0);
        let verb = norm_token(tokens[verb_at]);

        let rest = &tokens[verb_at + 1..];
        let cut = rest
            .iter()
            .position(|t| self.rules.is_conditional_marker(&norm_token(t)))
            .filter(|&c| c > 0)
            .unwrap_or(rest.len());
        let mut head = &rest[..cut];

        while let Some(first) = head.first() {
            let norm = norm_token(first);
            if self.rules.is_article(&norm) || self.rules.is_preposition(&norm) {
                head = &head[1..];
            } else {
                break;
            }
        }

        let object = head.join(" ");
        (verb, object)
    }

    fn is_structural_noise(&self, action: &str) -> bool {
        if self.paren_code.is_match(action) || self.numbering.is_match(action) {
            return true;
        }
        // A run of 3+ title-case words reads as a pasted heading, not
        // a verb phrase.
        let mut run = 0usize;
        for token in tokenize(action) {
            if token.chars().next().is_some_and(|c| c.is_uppercase()) {
                run += 1;
                if run >= 3 {
                    return true;
                }
            } else {
                run = 0;
            }
        }
        false
    }

    fn fallback_behavior(
        &self,
        requirement_id: &str,
        normalized: &NormalizedRequirement,
        action: &str,
        condition: Option<String>,
    ) -> AtomicBehavior {
        AtomicBehavior {
            behavior_id: behavior_id(requirement_id, 0),
            requirement_id: requirement_id.to_string(),
            actor: normalized.actor.clone(),
            action: action.to_string(),
            object_name: action.to_string(),
            condition: condition.clone(),
            description: describe(&normalized.actor, action, condition.as_deref()),
        }
    }
}

fn joined_condition(conditions: &[String]) -> Option<String> {
    if conditions.is_empty() {
        None
    } else {
        Some(conditions.join("; "))
    }
}

fn describe(actor: &str, part: &str, condition: Option<&str>) -> String {
    match condition {
        Some(cond) => format!("{actor} {part} (when {cond})"),
        None => format!("{actor} {part}"),
    }
}
