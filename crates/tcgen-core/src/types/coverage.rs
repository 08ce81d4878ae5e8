//! Coverage result — per-requirement and batch-wide dimension coverage.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output of the coverage calculator.
///
/// Percentages are integers in [0, 100]. Rounding policy: round down
/// (integer truncation) at both the per-requirement and overall level,
/// so coverage is never overstated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CoverageResult {
    /// requirement_id → coverage percentage.
    pub requirement_coverage: BTreeMap<String, u8>,
    /// Mean of all per-requirement coverages, rounded down.
    pub overall_coverage: u8,
    /// One entry per requirement per missing required dimension.
    pub gaps_detected: Vec<String>,
    /// dimension name → count of generated test cases across the batch.
    pub dimension_coverage: BTreeMap<String, usize>,
}
