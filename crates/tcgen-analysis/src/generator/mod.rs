//! Generator — templated test-case construction per required dimension.
//!
//! Fully deterministic given identical inputs: templates are fixed,
//! the dimension order is fixed, and confidence/seed values are carried
//! through from upstream — no fresh randomness anywhere.

pub mod templates;

pub use templates::RequirementShape;

use regex::Regex;

use tcgen_core::ids;
use tcgen_core::types::classification::Classification;
use tcgen_core::types::requirement::NormalizedRequirement;
use tcgen_core::types::test_case::GeneratedTestCase;
use tcgen_core::{Priority, RequirementClass};

use crate::coverage::ApplicabilityChecker;
use crate::rules::CompiledRules;
use crate::text::{norm_token, tokenize};

use self::templates::{instantiate, TemplateContext};

/// Ambiguity context forwarded from normalization. When present, the
/// generated cases note the pending clarification instead of silently
/// testing a vague requirement.
#[derive(Debug, Clone)]
pub struct AmbiguityInfo {
    pub is_ambiguous: bool,
    pub issues: Vec<String>,
    pub clarifying_questions: Vec<String>,
}

pub struct Generator<'r> {
    rules: &'r CompiledRules,
    checker: ApplicabilityChecker<'r>,
    api_re: Regex,
    range_re: Regex,
}

impl<'r> Generator<'r> {
    pub fn new(rules: &'r CompiledRules) -> Self {
        Self {
            rules,
            checker: ApplicabilityChecker::new(rules),
            api_re: Regex::new(r"\b(GET|POST|PUT|PATCH|DELETE)\s+(/\S*)").expect("static regex"),
            range_re: Regex::new(r"(?i)\bbetween\s+(\d+)\s+and\s+(\d+)").expect("static regex"),
        }
    }

    /// Generate one test case per required dimension.
    pub fn generate(
        &self,
        normalized: &NormalizedRequirement,
        classification: &Classification,
        ambiguity: Option<&AmbiguityInfo>,
    ) -> Vec<GeneratedTestCase> {
        let classes = classification.all_classes();
        let dims = self.checker.required_dimensions(
            &normalized.original_text,
            &classes,
            !normalized.conditions.is_empty(),
        );
        let shape = self.shape_of(&classes, &normalized.actor);

        let api = self.api_re.captures(&normalized.original_text).map(|c| {
            (c[1].to_string(), c[2].to_string())
        });
        let bounds = self.range_re.captures(&normalized.original_text).and_then(|c| {
            let min = c[1].parse::<i64>().ok()?;
            let max = c[2].parse::<i64>().ok()?;
            Some((min, max))
        });

        let ctx = TemplateContext {
            requirement_id: normalized.requirement_id(),
            actor: &normalized.actor,
            action: &normalized.action,
            conditions: &normalized.conditions,
            outcome: &normalized.expected_outcome,
            api,
            bounds,
            confidence: normalized.confidence,
        };

        let mut cases: Vec<GeneratedTestCase> = dims
            .iter()
            .map(|&dim| instantiate(dim, shape, &ctx))
            .collect();

        if let Some(amb) = ambiguity.filter(|a| a.is_ambiguous) {
            for case in &mut cases {
                case.rules_applied.push("ambiguity-noted".to_string());
                if let Some(question) = amb.clarifying_questions.first() {
                    case.preconditions
                        .push(format!("Clarification pending: {question}"));
                }
                case.confidence *= 0.95;
            }
        }

        tracing::debug!(
            requirement_id = normalized.requirement_id(),
            cases = cases.len(),
            shape = shape.code(),
            "generated test cases"
        );

        cases
    }

    /// Pure, collision-resistant id per (requirement_id, type_code).
    pub fn generate_test_case_id(&self, requirement_id: &str, type_code: &str) -> String {
        ids::test_case_id(requirement_id, type_code)
    }

    /// Map the classification's priority hint onto one test case.
    /// Security and Negative cases are never downgraded below Medium.
    pub fn map_priority(hint: Priority, type_code: &str) -> Priority {
        let floor = match type_code {
            "SEC" | "NEG" => Priority::Medium,
            _ => Priority::Low,
        };
        hint.max(floor)
    }

    fn shape_of(&self, classes: &[RequirementClass], actor: &str) -> RequirementShape {
        if classes.contains(&RequirementClass::ApiBehavior) {
            return RequirementShape::ApiEndpoint;
        }
        let user_driven = tokenize(actor)
            .iter()
            .any(|t| self.rules.is_user_actor_term(&norm_token(t)));
        if user_driven {
            RequirementShape::UserAction
        } else {
            RequirementShape::SystemAction
        }
    }
}
