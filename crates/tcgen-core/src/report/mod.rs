//! Stable report contract.
//!
//! The batch output serialized to JSON/Markdown by out-of-scope report
//! writers. Field names and nesting here are a compatibility contract —
//! do not rename without versioning the consumers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::classes::Priority;
use crate::types::coverage::CoverageResult;
use crate::types::requirement::Provenance;
use crate::types::test_case::{TestData, TestStep};

/// Complete output of one batch pipeline invocation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BatchOutput {
    pub normalized_requirements: Vec<RequirementRecord>,
    pub test_cases: Vec<TestCaseRecord>,
    pub coverage: CoverageResult,
    pub audit_log: AuditLog,
}

/// One normalized requirement as carried into reports.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RequirementRecord {
    pub requirement_id: String,
    pub source_text: String,
    pub normalized: NormalizedFields,
    /// Class names, primary first.
    pub classification: Vec<String>,
    pub priority_hint: Priority,
    pub ambiguity: AmbiguityRecord,
    pub provenance: Provenance,
}

/// The Actor-Action-Conditions-Outcome slots of a requirement.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NormalizedFields {
    pub actor: String,
    pub action: String,
    pub conditions: Vec<String>,
    pub expected_outcome: String,
}

/// Ambiguity block per requirement.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AmbiguityRecord {
    pub is_ambiguous: bool,
    pub issues: Vec<String>,
    pub clarifying_questions: Vec<String>,
}

/// One generated test case as carried into reports.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TestCaseRecord {
    pub test_case_id: String,
    pub title: String,
    pub mapped_requirement_id: String,
    pub test_type: String,
    pub preconditions: Vec<String>,
    pub steps: Vec<TestStep>,
    pub test_data: TestData,
    pub expected_result: String,
    pub priority: Priority,
    pub automation_feasibility: AutomationFeasibility,
    pub determinism_seed: u64,
    pub explainability: Explainability,
}

/// Automation feasibility assessment per test case.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AutomationFeasibility {
    pub feasible: bool,
    pub notes: String,
    pub estimated_effort: String,
}

/// Explainability block per test case.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Explainability {
    pub generation_template_id: String,
    pub rules_applied: Vec<String>,
    pub confidence: f32,
}

/// Audit trail for the whole batch.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AuditLog {
    /// RFC 3339 timestamp of the run.
    pub generation_timestamp: String,
    pub generator_version: String,
    pub model_reference: String,
    pub validation_status: String,
    pub errors: Vec<String>,
    pub change_history: Vec<ChangeEntry>,
}

/// One audit change-history entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ChangeEntry {
    pub timestamp: String,
    pub actor: String,
    pub change: String,
    pub diff: Option<String>,
}
