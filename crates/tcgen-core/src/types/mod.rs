//! Shared data model for the pipeline stages.
//!
//! Every entity here is created fresh per pipeline invocation and never
//! mutated after construction — downstream stages build new structures
//! referencing upstream ones by id.

pub mod behavior;
pub mod classes;
pub mod classification;
pub mod collections;
pub mod coverage;
pub mod dimensions;
pub mod requirement;
pub mod test_case;

pub use behavior::AtomicBehavior;
pub use classes::{Priority, RequirementClass};
pub use classification::Classification;
pub use coverage::CoverageResult;
pub use dimensions::Dimension;
pub use requirement::{AmbiguityIssue, NormalizedRequirement, Provenance};
pub use test_case::{GeneratedTestCase, TestData, TestStep};
