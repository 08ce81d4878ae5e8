//! Test-coverage dimensions and their generated test-type labels.

use serde::{Deserialize, Serialize};

/// The 9 test-coverage dimensions.
///
/// A dimension names a coverage category a requirement may need; the
/// generator emits one test case per required dimension. The Functional
/// dimension's generated cases are labeled "Positive" — all others carry
/// the dimension name as their test type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Dimension {
    #[default]
    Functional,
    Negative,
    Boundary,
    Edge,
    Performance,
    Security,
    Concurrency,
    Failure,
    Integration,
}

impl Dimension {
    /// All 9 dimensions, in generation order.
    pub fn all() -> &'static [Dimension] {
        &[
            Self::Functional, Self::Negative, Self::Boundary, Self::Edge,
            Self::Performance, Self::Security, Self::Concurrency,
            Self::Failure, Self::Integration,
        ]
    }

    /// Dimension name, as used in coverage gaps and tallies.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Functional => "Functional",
            Self::Negative => "Negative",
            Self::Boundary => "Boundary",
            Self::Edge => "Edge",
            Self::Performance => "Performance",
            Self::Security => "Security",
            Self::Concurrency => "Concurrency",
            Self::Failure => "Failure",
            Self::Integration => "Integration",
        }
    }

    /// The test-type label stamped on generated cases of this dimension.
    pub fn test_type_label(&self) -> &'static str {
        match self {
            Self::Functional => "Positive",
            other => other.name(),
        }
    }

    /// 3-letter type code used in test-case ids (first three letters of
    /// the test-type label, uppercased).
    pub fn type_code(&self) -> &'static str {
        match self {
            Self::Functional => "POS",
            Self::Negative => "NEG",
            Self::Boundary => "BOU",
            Self::Edge => "EDG",
            Self::Performance => "PER",
            Self::Security => "SEC",
            Self::Concurrency => "CON",
            Self::Failure => "FAI",
            Self::Integration => "INT",
        }
    }

    /// Resolve a test-type label back to its dimension. Accepts both the
    /// generated label ("Positive") and the bare dimension name
    /// ("Functional") so externally supplied test cases tally correctly.
    pub fn from_test_type(label: &str) -> Option<Self> {
        match label {
            "Positive" | "Functional" => Some(Self::Functional),
            "Negative" => Some(Self::Negative),
            "Boundary" => Some(Self::Boundary),
            "Edge" => Some(Self::Edge),
            "Performance" => Some(Self::Performance),
            "Security" => Some(Self::Security),
            "Concurrency" => Some(Self::Concurrency),
            "Failure" => Some(Self::Failure),
            "Integration" => Some(Self::Integration),
            _ => None,
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
