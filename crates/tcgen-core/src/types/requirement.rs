//! Normalized requirement — the output shape of the normalizer stage.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One atomic Actor-Action-Conditions-Outcome statement extracted from
/// raw requirement text, with ambiguity and provenance metadata.
///
/// `actor` and `action` are always non-empty after post-processing —
/// a missing slot is recorded as an ambiguity issue and filled with a
/// fallback value, never left blank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedRequirement {
    pub original_text: String,
    pub actor: String,
    pub action: String,
    pub conditions: Vec<String>,
    pub expected_outcome: String,
    pub is_ambiguous: bool,
    pub ambiguity_issues: Vec<AmbiguityIssue>,
    pub clarifying_questions: Vec<String>,
    /// Extraction confidence in [0, 1]. Decreases monotonically with
    /// the number of detected issues.
    pub confidence: f32,
    pub provenance: Provenance,
}

impl NormalizedRequirement {
    /// The batch-unique requirement id carried in provenance.
    pub fn requirement_id(&self) -> &str {
        &self.provenance.requirement_id
    }
}

/// A single detected ambiguity finding.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AmbiguityIssue {
    pub description: String,
}

impl AmbiguityIssue {
    pub fn new(description: impl Into<String>) -> Self {
        Self { description: description.into() }
    }
}

/// Ordered trace of the transformations that produced a normalized
/// requirement, for audit and explainability. `transformation_steps`
/// is never empty.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Provenance {
    pub requirement_id: String,
    pub original_text: String,
    pub transformation_steps: Vec<String>,
    pub confidence: f32,
}
