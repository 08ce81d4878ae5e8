//! # tcgen-analysis
//!
//! Rule engine for the tcgen test-case generation tool.
//! Contains the rule tables, normalizer, classifier, behavior
//! extractor, coverage calculator, generator, and batch pipeline.
//!
//! Every stage is a pure, synchronous function of its inputs: no shared
//! mutable state, no I/O. Data flows strictly forward — text →
//! normalized requirements → {classification, behaviors} → test cases →
//! coverage report.

pub mod behaviors;
pub mod classifier;
pub mod coverage;
pub mod generator;
pub mod normalizer;
pub mod pipeline;
pub mod rules;

pub(crate) mod text;
