//! Coverage calculator — per-requirement and batch-wide dimension
//! coverage with a gap list.
//!
//! Rounding policy: coverage percentages round down (integer
//! truncation) at both the per-requirement and the overall level, so
//! coverage is never overstated. Capped at 100 regardless of how many
//! test types are supplied.

pub mod applicability;

pub use applicability::ApplicabilityChecker;

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use tcgen_core::types::behavior::AtomicBehavior;
use tcgen_core::{CoverageResult, Dimension, RequirementClass};

use crate::rules::CompiledRules;

/// The requirement facts coverage needs — id, source text, classes,
/// and whether the normalized form carries conditions.
#[derive(Debug, Clone)]
pub struct RequirementSummary {
    pub requirement_id: String,
    pub source_text: String,
    pub classes: Vec<RequirementClass>,
    pub has_conditions: bool,
}

/// One test case as seen by the coverage calculator. Mapping to a
/// requirement goes through `mapped_requirement_id` when present,
/// falling back to the owning requirement of `behavior_id`.
#[derive(Debug, Clone)]
pub struct CoverageCase {
    pub mapped_requirement_id: Option<String>,
    pub behavior_id: Option<String>,
    pub test_type: String,
}

pub struct CoverageCalculator<'r> {
    checker: ApplicabilityChecker<'r>,
}

impl<'r> CoverageCalculator<'r> {
    pub fn new(rules: &'r CompiledRules) -> Self {
        Self {
            checker: ApplicabilityChecker::new(rules),
        }
    }

    /// Compute coverage for a whole batch. Zero test cases yields
    /// coverage 0 everywhere — never a division error.
    pub fn calculate(
        &self,
        test_cases: &[CoverageCase],
        requirements: &[RequirementSummary],
        behaviors: &[AtomicBehavior],
    ) -> CoverageResult {
        let behavior_owner: FxHashMap<&str, &str> = behaviors
            .iter()
            .map(|b| (b.behavior_id.as_str(), b.requirement_id.as_str()))
            .collect();

        // Distinct dimensions present per requirement.
        let mut present: FxHashMap<&str, BTreeSet<Dimension>> = FxHashMap::default();
        for case in test_cases {
            let Some(dim) = Dimension::from_test_type(&case.test_type) else {
                tracing::warn!(test_type = %case.test_type, "unknown test type in coverage input");
                continue;
            };
            let owner = case
                .mapped_requirement_id
                .as_deref()
                .or_else(|| {
                    case.behavior_id
                        .as_deref()
                        .and_then(|b| behavior_owner.get(b).copied())
                });
            if let Some(req_id) = owner {
                present.entry(req_id).or_default().insert(dim);
            }
        }

        let mut result = CoverageResult::default();

        for req in requirements {
            let required = self.checker.required_dimensions(
                &req.source_text,
                &req.classes,
                req.has_conditions,
            );
            let present_dims = present.get(req.requirement_id.as_str());
            let present_count = present_dims.map(|s| s.len()).unwrap_or(0);

            // Integer division rounds down; cap before narrowing.
            let pct = (100 * present_count / required.len()).min(100) as u8;
            result
                .requirement_coverage
                .insert(req.requirement_id.clone(), pct);

            for dim in &required {
                let covered = present_dims.is_some_and(|s| s.contains(dim));
                if !covered {
                    result
                        .gaps_detected
                        .push(format!("{}: Missing {} tests", req.requirement_id, dim));
                }
            }
        }

        result.overall_coverage = if result.requirement_coverage.is_empty() {
            0
        } else {
            let sum: usize = result
                .requirement_coverage
                .values()
                .map(|&v| v as usize)
                .sum();
            (sum / result.requirement_coverage.len()) as u8
        };

        // Batch-wide tally per dimension, independent of requirement
        // mapping.
        for case in test_cases {
            if let Some(dim) = Dimension::from_test_type(&case.test_type) {
                *result
                    .dimension_coverage
                    .entry(dim.name().to_string())
                    .or_insert(0) += 1;
            }
        }

        tracing::debug!(
            requirements = requirements.len(),
            overall = result.overall_coverage,
            gaps = result.gaps_detected.len(),
            "coverage calculation complete"
        );

        result
    }
}
