//! # tcgen-core
//!
//! Foundation crate for the tcgen test-case generation engine.
//! Defines all shared types, identifiers, errors, config, the stable
//! report contract, and tracing setup. Every other crate in the
//! workspace depends on this.

pub mod config;
pub mod errors;
pub mod ids;
pub mod report;
pub mod trace;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::PipelineConfig;
pub use errors::error_code::TcgenErrorCode;
pub use errors::pipeline_error::PipelineError;
pub use types::classes::{Priority, RequirementClass};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::coverage::CoverageResult;
pub use types::dimensions::Dimension;
