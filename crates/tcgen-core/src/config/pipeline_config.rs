//! Pipeline configuration.
//!
//! Passed explicitly and immutably into each pipeline invocation; the
//! stages never read process-wide settings. All fields are optional
//! with documented defaults via the `effective_*` accessors.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::PipelineError;

/// Configuration for one pipeline invocation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PipelineConfig {
    /// Seed carried verbatim onto every generated test case. The
    /// pipeline introduces no randomness; the seed exists so downstream
    /// tooling can reproduce a run. Default: 42.
    pub determinism_seed: Option<u64>,
    /// Date stamped into requirement ids. Default: today (UTC).
    pub run_date: Option<NaiveDate>,
    /// Timestamp recorded in the audit log. Default: now (UTC).
    pub generation_timestamp: Option<DateTime<Utc>>,
    /// Minimum normalized score for a dimension to become a secondary
    /// class. Default: 0.25.
    pub secondary_class_threshold: Option<f32>,
    /// Cap on normalized requirements produced from a single input
    /// text. Default: 16.
    pub max_requirements_per_input: Option<usize>,
    /// Model reference recorded in the audit log. Default: "rule-based-v1".
    pub model_reference: Option<String>,
    /// TOML rule-table override. When set, replaces the built-in
    /// vocabulary for the whole run.
    pub rule_table_toml: Option<String>,
}

impl PipelineConfig {
    /// Effective determinism seed, defaulting to 42.
    pub fn effective_determinism_seed(&self) -> u64 {
        self.determinism_seed.unwrap_or(42)
    }

    /// Effective run date, defaulting to today (UTC).
    pub fn effective_run_date(&self) -> NaiveDate {
        self.run_date.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Effective audit timestamp as RFC 3339, defaulting to now (UTC).
    pub fn effective_generation_timestamp(&self) -> String {
        self.generation_timestamp
            .unwrap_or_else(Utc::now)
            .to_rfc3339()
    }

    /// Effective secondary-class threshold, defaulting to 0.25.
    pub fn effective_secondary_class_threshold(&self) -> f32 {
        self.secondary_class_threshold.unwrap_or(0.25)
    }

    /// Effective per-input requirement cap, defaulting to 16.
    pub fn effective_max_requirements_per_input(&self) -> usize {
        self.max_requirements_per_input.unwrap_or(16)
    }

    /// Effective model reference, defaulting to "rule-based-v1".
    pub fn effective_model_reference(&self) -> &str {
        self.model_reference.as_deref().unwrap_or("rule-based-v1")
    }

    /// Parse a config from TOML.
    pub fn from_toml_str(s: &str) -> Result<Self, PipelineError> {
        toml::from_str(s).map_err(|e| PipelineError::Config { message: e.to_string() })
    }
}
