//! Requirement-type classes and priority levels.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The 9 requirement-type classes scored by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum RequirementClass {
    #[default]
    Functional,
    Security,
    Performance,
    Validation,
    ApiBehavior,
    Concurrency,
    Nfr,
    Usability,
    DataIntegrity,
}

impl RequirementClass {
    /// All 9 classes, in declaration order.
    pub fn all() -> &'static [RequirementClass] {
        &[
            Self::Functional, Self::Security, Self::Performance,
            Self::Validation, Self::ApiBehavior, Self::Concurrency,
            Self::Nfr, Self::Usability, Self::DataIntegrity,
        ]
    }

    /// Human-readable class name, as carried into reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Functional => "Functional",
            Self::Security => "Security",
            Self::Performance => "Performance",
            Self::Validation => "Validation",
            Self::ApiBehavior => "API behavior",
            Self::Concurrency => "Concurrency",
            Self::Nfr => "NFR",
            Self::Usability => "Usability",
            Self::DataIntegrity => "Data integrity",
        }
    }

    /// Parse from the report-facing name.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "Functional" => Some(Self::Functional),
            "Security" => Some(Self::Security),
            "Performance" => Some(Self::Performance),
            "Validation" => Some(Self::Validation),
            "API behavior" => Some(Self::ApiBehavior),
            "Concurrency" => Some(Self::Concurrency),
            "NFR" => Some(Self::Nfr),
            "Usability" => Some(Self::Usability),
            "Data integrity" => Some(Self::DataIntegrity),
            _ => None,
        }
    }

    /// Fixed tie-break rank for equal classifier scores. Lower wins.
    /// Security > Performance > Concurrency > Validation > API behavior,
    /// then declaration order.
    pub fn tie_break_rank(&self) -> u8 {
        match self {
            Self::Security => 0,
            Self::Performance => 1,
            Self::Concurrency => 2,
            Self::Validation => 3,
            Self::ApiBehavior => 4,
            Self::Functional => 5,
            Self::Nfr => 6,
            Self::Usability => 7,
            Self::DataIntegrity => 8,
        }
    }
}

impl std::fmt::Display for RequirementClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Priority hint carried from classification into generated test cases.
/// Ordering: Low < Medium < High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[derive(Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Priority name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
