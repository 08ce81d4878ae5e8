//! Rule tables — the versioned vocabulary behind every stage.
//!
//! All keyword and pattern sets live in one [`RuleSet`] structure so
//! they are independently testable and auditable. The set is
//! TOML-overridable per field and compiled once into [`CompiledRules`]
//! (Aho-Corasick automata + regexes) shared read-only by all stages.

pub mod compiled;
pub mod tables;

pub use compiled::{CompiledClassRules, CompiledRules};
pub use tables::{ClassRules, RuleSet};
