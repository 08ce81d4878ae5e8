//! Dimension applicability rules.
//!
//! Derives the required test-dimension set for one requirement.
//! Functional and Negative are unconditional, so the set is never
//! empty.

use tcgen_core::{Dimension, RequirementClass};

use crate::rules::CompiledRules;

pub struct ApplicabilityChecker<'r> {
    rules: &'r CompiledRules,
}

impl<'r> ApplicabilityChecker<'r> {
    pub fn new(rules: &'r CompiledRules) -> Self {
        Self { rules }
    }

    /// Required dimensions for a requirement, in generation order.
    pub fn required_dimensions(
        &self,
        text: &str,
        classes: &[RequirementClass],
        has_conditions: bool,
    ) -> Vec<Dimension> {
        let lower = text.to_lowercase();
        let mut required = vec![Dimension::Functional, Dimension::Negative];

        if self.rules.has_boundary_range(text) {
            required.push(Dimension::Boundary);
        }

        if has_conditions {
            required.push(Dimension::Edge);
        }

        let performance_cued = classes.contains(&RequirementClass::Performance)
            || classes.contains(&RequirementClass::Nfr)
            || self.class_hits(RequirementClass::Performance, text, &lower);
        if performance_cued {
            required.push(Dimension::Performance);
            required.push(Dimension::Failure);
        }

        let security_cued = classes.contains(&RequirementClass::Security)
            || self.rules.has_payment_auth_language(&lower);
        if security_cued {
            required.push(Dimension::Security);
            if !required.contains(&Dimension::Failure) {
                required.push(Dimension::Failure);
            }
        }

        let concurrency_cued = classes.contains(&RequirementClass::Concurrency)
            || self.rules.has_concurrency_language(&lower)
            || self.rules.has_shared_resource_language(&lower);
        if concurrency_cued {
            required.push(Dimension::Concurrency);
        }

        // Stable order regardless of which rule fired first.
        required.sort_by_key(|d| Dimension::all().iter().position(|x| x == d));
        required.dedup();
        required
    }

    fn class_hits(&self, class: RequirementClass, text: &str, lower: &str) -> bool {
        self.rules
            .class_tables()
            .iter()
            .find(|t| t.class == class)
            .is_some_and(|t| {
                !t.keyword_hits(lower).is_empty() || !t.pattern_hits(text).is_empty()
            })
    }
}
