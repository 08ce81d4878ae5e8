//! Batch pipeline — chains all five stages and assembles the stable
//! report contract.
//!
//! Per-requirement work is parallelized with rayon; output order always
//! matches input order. The stages themselves never fail — the only
//! rejected input is an empty batch.

use rayon::prelude::*;

use tcgen_core::ids;
use tcgen_core::report::{
    AmbiguityRecord, AuditLog, AutomationFeasibility, BatchOutput, ChangeEntry, Explainability,
    NormalizedFields, RequirementRecord, TestCaseRecord,
};
use tcgen_core::types::classification::Classification;
use tcgen_core::types::requirement::NormalizedRequirement;
use tcgen_core::types::test_case::GeneratedTestCase;
use tcgen_core::{Dimension, PipelineConfig, PipelineError};

use crate::behaviors::{BehaviorExtraction, BehaviorExtractor};
use crate::classifier::Classifier;
use crate::coverage::{CoverageCalculator, CoverageCase, RequirementSummary};
use crate::generator::{AmbiguityInfo, Generator};
use crate::normalizer::Normalizer;
use crate::rules::{CompiledRules, RuleSet};

pub struct Pipeline {
    rules: CompiledRules,
    config: PipelineConfig,
}

struct ProcessedRequirement {
    classification: Classification,
    extraction: BehaviorExtraction,
    cases: Vec<GeneratedTestCase>,
}

impl Pipeline {
    /// Build a pipeline from config, compiling the built-in rule tables
    /// or the config's TOML override.
    pub fn new(config: PipelineConfig) -> Result<Self, PipelineError> {
        let ruleset = match &config.rule_table_toml {
            Some(toml) => RuleSet::from_toml_str(toml)?,
            None => RuleSet::default(),
        };
        Self::with_rules(&ruleset, config)
    }

    /// Build a pipeline with an explicit rule set.
    pub fn with_rules(ruleset: &RuleSet, config: PipelineConfig) -> Result<Self, PipelineError> {
        let rules = CompiledRules::compile(ruleset)?;
        Ok(Self { rules, config })
    }

    /// Compiled rule tables, shared read-only by all stages.
    pub fn rules(&self) -> &CompiledRules {
        &self.rules
    }

    /// Run the batch over the given requirement texts.
    pub fn run(&self, texts: &[&str]) -> Result<BatchOutput, PipelineError> {
        self.run_with_warnings(texts, &[])
    }

    /// Run the batch, recording sanitization warnings from the upstream
    /// ingestion step in the audit log. Warnings are audit-only — they
    /// never alter stage behavior.
    pub fn run_with_warnings(
        &self,
        texts: &[&str],
        sanitization_warnings: &[String],
    ) -> Result<BatchOutput, PipelineError> {
        let mut audit_errors: Vec<String> = sanitization_warnings
            .iter()
            .map(|w| format!("sanitization: {w}"))
            .collect();

        let mut non_blank: Vec<&str> = Vec::with_capacity(texts.len());
        for (i, text) in texts.iter().enumerate() {
            if text.trim().is_empty() {
                tracing::warn!(index = i, "skipping blank input");
                audit_errors.push(format!("warning: input {} is blank; skipped", i + 1));
            } else {
                non_blank.push(*text);
            }
        }
        if non_blank.is_empty() {
            return Err(PipelineError::EmptyInput);
        }

        // Normalization runs sequentially so requirement ids stay a
        // deterministic sequence over the batch.
        let mut normalizer = Normalizer::new(
            &self.rules,
            self.config.effective_run_date(),
            self.config.effective_max_requirements_per_input(),
        );
        let normalized: Vec<NormalizedRequirement> = non_blank
            .iter()
            .flat_map(|text| normalizer.normalize(text))
            .collect();

        let classifier = Classifier::new(
            &self.rules,
            self.config.effective_secondary_class_threshold(),
        );
        let extractor = BehaviorExtractor::new(&self.rules);
        let generator = Generator::new(&self.rules);

        // The remaining stages are pure per requirement; fan out.
        let processed: Vec<ProcessedRequirement> = normalized
            .par_iter()
            .map(|norm| {
                let classification = classifier.classify(&norm.original_text, norm);
                let extraction = extractor.extract(
                    norm.requirement_id(),
                    norm,
                    classification.primary_class,
                );
                let ambiguity = norm.is_ambiguous.then(|| AmbiguityInfo {
                    is_ambiguous: true,
                    issues: norm
                        .ambiguity_issues
                        .iter()
                        .map(|i| i.description.clone())
                        .collect(),
                    clarifying_questions: norm.clarifying_questions.clone(),
                });
                let cases = generator.generate(norm, &classification, ambiguity.as_ref());
                ProcessedRequirement {
                    classification,
                    extraction,
                    cases,
                }
            })
            .collect();

        let coverage = self.calculate_coverage(&normalized, &processed);
        let output = self.assemble(&normalized, processed, coverage, audit_errors);

        tracing::info!(
            requirements = output.normalized_requirements.len(),
            test_cases = output.test_cases.len(),
            overall_coverage = output.coverage.overall_coverage,
            "batch pipeline complete"
        );
        Ok(output)
    }

    fn calculate_coverage(
        &self,
        normalized: &[NormalizedRequirement],
        processed: &[ProcessedRequirement],
    ) -> tcgen_core::CoverageResult {
        let summaries: Vec<RequirementSummary> = normalized
            .iter()
            .zip(processed)
            .map(|(norm, proc)| RequirementSummary {
                requirement_id: norm.requirement_id().to_string(),
                source_text: norm.original_text.clone(),
                classes: proc.classification.all_classes(),
                has_conditions: !norm.conditions.is_empty(),
            })
            .collect();

        let cases: Vec<CoverageCase> = processed
            .iter()
            .flat_map(|proc| {
                proc.cases.iter().map(|case| CoverageCase {
                    mapped_requirement_id: Some(case.requirement_id.clone()),
                    behavior_id: None,
                    test_type: case.test_type.clone(),
                })
            })
            .collect();

        let behaviors: Vec<_> = processed
            .iter()
            .flat_map(|proc| proc.extraction.behaviors.iter().cloned())
            .collect();

        CoverageCalculator::new(&self.rules).calculate(&cases, &summaries, &behaviors)
    }

    fn assemble(
        &self,
        normalized: &[NormalizedRequirement],
        processed: Vec<ProcessedRequirement>,
        coverage: tcgen_core::CoverageResult,
        audit_errors: Vec<String>,
    ) -> BatchOutput {
        let timestamp = self.config.effective_generation_timestamp();
        let seed = self.config.effective_determinism_seed();

        let mut requirement_records = Vec::with_capacity(normalized.len());
        let mut test_case_records = Vec::new();

        for (norm, proc) in normalized.iter().zip(&processed) {
            requirement_records.push(RequirementRecord {
                requirement_id: norm.requirement_id().to_string(),
                source_text: norm.original_text.clone(),
                normalized: NormalizedFields {
                    actor: norm.actor.clone(),
                    action: norm.action.clone(),
                    conditions: norm.conditions.clone(),
                    expected_outcome: norm.expected_outcome.clone(),
                },
                classification: proc
                    .classification
                    .all_classes()
                    .iter()
                    .map(|c| c.name().to_string())
                    .collect(),
                priority_hint: proc.classification.priority_hint,
                ambiguity: AmbiguityRecord {
                    is_ambiguous: norm.is_ambiguous,
                    issues: norm
                        .ambiguity_issues
                        .iter()
                        .map(|i| i.description.clone())
                        .collect(),
                    clarifying_questions: norm.clarifying_questions.clone(),
                },
                provenance: norm.provenance.clone(),
            });

            for case in &proc.cases {
                let type_code = Dimension::from_test_type(&case.test_type)
                    .map(|d| d.type_code().to_string())
                    .unwrap_or_else(|| {
                        case.test_type.chars().take(3).collect::<String>().to_uppercase()
                    });

                test_case_records.push(TestCaseRecord {
                    test_case_id: ids::test_case_id(&case.requirement_id, &type_code),
                    title: case.title.clone(),
                    mapped_requirement_id: case.requirement_id.clone(),
                    test_type: case.test_type.clone(),
                    preconditions: case.preconditions.clone(),
                    steps: case.steps.clone(),
                    test_data: case.test_data.clone(),
                    expected_result: case.expected_result.clone(),
                    priority: Generator::map_priority(
                        proc.classification.priority_hint,
                        &type_code,
                    ),
                    automation_feasibility: feasibility_for(&case.test_type),
                    determinism_seed: seed,
                    explainability: Explainability {
                        generation_template_id: case.template_id.clone(),
                        rules_applied: case.rules_applied.clone(),
                        confidence: norm.confidence * 0.9,
                    },
                });
            }
        }

        let change = format!(
            "Generated {} test cases from {} requirements ({})",
            test_case_records.len(),
            requirement_records.len(),
            self.rules.version(),
        );

        BatchOutput {
            normalized_requirements: requirement_records,
            test_cases: test_case_records,
            coverage,
            audit_log: AuditLog {
                generation_timestamp: timestamp.clone(),
                generator_version: env!("CARGO_PKG_VERSION").to_string(),
                model_reference: self.config.effective_model_reference().to_string(),
                validation_status: "passed".to_string(),
                errors: audit_errors,
                change_history: vec![ChangeEntry {
                    timestamp,
                    actor: "system".to_string(),
                    change,
                    diff: None,
                }],
            },
        }
    }
}

fn feasibility_for(test_type: &str) -> AutomationFeasibility {
    let (notes, effort) = match Dimension::from_test_type(test_type) {
        Some(Dimension::Performance) => ("Requires load tooling", "High"),
        Some(Dimension::Concurrency) => ("Requires a parallel execution harness", "High"),
        Some(Dimension::Failure) => ("Requires fault injection", "High"),
        Some(Dimension::Integration) => ("Requires collaborating components", "Medium"),
        _ => ("Standard test case", "Medium"),
    };
    AutomationFeasibility {
        feasible: true,
        notes: notes.to_string(),
        estimated_effort: effort.to_string(),
    }
}
