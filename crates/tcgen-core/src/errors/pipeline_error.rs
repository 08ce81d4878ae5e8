//! Pipeline entry errors.
//!
//! The five stages themselves never fail outward — missing information
//! degrades confidence and appends issues. These errors cover the batch
//! entry point only: rejected input and rule-table/config problems
//! detected before any stage runs.

use super::error_code::TcgenErrorCode;

/// Errors surfaced by the batch pipeline entry point.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("input text is empty; callers must validate before invoking the pipeline")]
    EmptyInput,

    #[error("rule table error: {message}")]
    RuleTable { message: String },

    #[error("configuration error: {message}")]
    Config { message: String },
}

impl TcgenErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "PIPELINE_EMPTY_INPUT",
            Self::RuleTable { .. } => "PIPELINE_RULE_TABLE_ERROR",
            Self::Config { .. } => "PIPELINE_CONFIG_ERROR",
        }
    }
}
