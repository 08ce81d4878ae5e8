//! Compiled rule tables.
//!
//! Term sets become Aho-Corasick automata with word-boundary checks;
//! pattern lists become compiled regexes. Compilation happens once per
//! pipeline and the result is shared read-only by all stages.

use aho_corasick::{AhoCorasick, MatchKind};
use regex::Regex;

use tcgen_core::{FxHashSet, PipelineError, RequirementClass};

use super::tables::RuleSet;

/// A lowercased term list compiled to an Aho-Corasick automaton.
///
/// Matches are word-boundary-checked: a term only hits when the
/// surrounding bytes are non-alphanumeric, so "for" never fires inside
/// "perform". Callers pass lowercased haystacks.
#[derive(Debug)]
pub struct TermSet {
    ac: AhoCorasick,
    terms: Vec<String>,
}

impl TermSet {
    fn build(terms: &[String]) -> Result<Self, PipelineError> {
        let lowered: Vec<String> = terms.iter().map(|t| t.to_lowercase()).collect();
        let ac = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&lowered)
            .map_err(|e| PipelineError::RuleTable { message: e.to_string() })?;
        Ok(Self { ac, terms: lowered })
    }

    /// Distinct matching terms in first-occurrence order.
    pub fn hits<'a>(&'a self, text_lower: &str) -> Vec<&'a str> {
        let bytes = text_lower.as_bytes();
        let mut seen: Vec<usize> = Vec::new();
        for m in self.ac.find_iter(text_lower) {
            let before_ok = m.start() == 0 || !bytes[m.start() - 1].is_ascii_alphanumeric();
            let after_ok = m.end() == bytes.len() || !bytes[m.end()].is_ascii_alphanumeric();
            if before_ok && after_ok {
                let idx = m.pattern().as_usize();
                if !seen.contains(&idx) {
                    seen.push(idx);
                }
            }
        }
        seen.into_iter().map(|i| self.terms[i].as_str()).collect()
    }

    /// True when at least one term matches on a word boundary.
    pub fn any(&self, text_lower: &str) -> bool {
        !self.hits(text_lower).is_empty()
    }
}

/// Compiled keyword/pattern table for one requirement class.
#[derive(Debug)]
pub struct CompiledClassRules {
    pub class: RequirementClass,
    keywords: TermSet,
    patterns: Vec<Regex>,
}

impl CompiledClassRules {
    /// Distinct keyword hits, first-occurrence order.
    pub fn keyword_hits<'a>(&'a self, text_lower: &str) -> Vec<&'a str> {
        self.keywords.hits(text_lower)
    }

    /// Matched text of each firing regex pattern.
    pub fn pattern_hits(&self, text: &str) -> Vec<String> {
        self.patterns
            .iter()
            .filter_map(|re| re.find(text).map(|m| m.as_str().to_string()))
            .collect()
    }
}

/// All rule tables, compiled and ready for matching.
#[derive(Debug)]
pub struct CompiledRules {
    version: String,
    modal_verbs: FxHashSet<String>,
    conditional_markers: FxHashSet<String>,
    outcome_markers: Vec<String>,
    articles: FxHashSet<String>,
    prepositions: FxHashSet<String>,
    user_actor_terms: FxHashSet<String>,
    action_verbs: FxHashSet<String>,
    vague: TermSet,
    classes: Vec<CompiledClassRules>,
    high_priority: TermSet,
    low_priority: TermSet,
    shared_resource: TermSet,
    concurrency: TermSet,
    payment_auth: TermSet,
    measurable: Vec<Regex>,
    boundary_range: Vec<Regex>,
}

fn token_set(terms: &[String]) -> FxHashSet<String> {
    terms.iter().map(|t| t.to_lowercase()).collect()
}

fn compile_regexes(patterns: &[String]) -> Result<Vec<Regex>, PipelineError> {
    patterns
        .iter()
        .map(|p| Regex::new(p).map_err(|e| PipelineError::RuleTable { message: e.to_string() }))
        .collect()
}

impl CompiledRules {
    /// Compile a rule set. Fails on an unknown class name or a
    /// malformed regex — never mid-run.
    pub fn compile(rules: &RuleSet) -> Result<Self, PipelineError> {
        let mut classes = Vec::with_capacity(rules.classification.len());
        for table in &rules.classification {
            let class = RequirementClass::parse_str(&table.class).ok_or_else(|| {
                PipelineError::RuleTable {
                    message: format!("unknown requirement class '{}'", table.class),
                }
            })?;
            classes.push(CompiledClassRules {
                class,
                keywords: TermSet::build(&table.keywords)?,
                patterns: compile_regexes(&table.patterns)?,
            });
        }

        Ok(Self {
            version: rules.version.clone(),
            modal_verbs: token_set(&rules.modal_verbs),
            conditional_markers: token_set(&rules.conditional_markers),
            outcome_markers: rules.outcome_markers.iter().map(|m| m.to_lowercase()).collect(),
            articles: token_set(&rules.articles),
            prepositions: token_set(&rules.prepositions),
            user_actor_terms: token_set(&rules.user_actor_terms),
            action_verbs: token_set(&rules.action_verbs),
            vague: TermSet::build(&rules.vague_terms)?,
            classes,
            high_priority: TermSet::build(&rules.high_priority_terms)?,
            low_priority: TermSet::build(&rules.low_priority_terms)?,
            shared_resource: TermSet::build(&rules.shared_resource_terms)?,
            concurrency: TermSet::build(&rules.concurrency_terms)?,
            payment_auth: TermSet::build(&rules.payment_auth_terms)?,
            measurable: compile_regexes(&rules.measurable_patterns)?,
            boundary_range: compile_regexes(&rules.boundary_range_patterns)?,
        })
    }

    /// Compile the built-in vocabulary.
    pub fn default_rules() -> Result<Self, PipelineError> {
        Self::compile(&RuleSet::default())
    }

    /// Rule-table version string, for audit.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn is_modal(&self, token: &str) -> bool {
        self.modal_verbs.contains(token)
    }

    pub fn is_conditional_marker(&self, token: &str) -> bool {
        self.conditional_markers.contains(token)
    }

    pub fn is_article(&self, token: &str) -> bool {
        self.articles.contains(token)
    }

    pub fn is_preposition(&self, token: &str) -> bool {
        self.prepositions.contains(token)
    }

    pub fn is_user_actor_term(&self, token: &str) -> bool {
        self.user_actor_terms.contains(token)
    }

    pub fn is_action_verb(&self, token: &str) -> bool {
        self.action_verbs.contains(token)
    }

    /// Outcome-clause markers, lowercased.
    pub fn outcome_markers(&self) -> &[String] {
        &self.outcome_markers
    }

    /// Distinct vague-term hits in first-occurrence order.
    pub fn vague_hits<'a>(&'a self, text_lower: &str) -> Vec<&'a str> {
        self.vague.hits(text_lower)
    }

    /// Compiled per-class tables, in declaration order.
    pub fn class_tables(&self) -> &[CompiledClassRules] {
        &self.classes
    }

    pub fn high_priority_hits<'a>(&'a self, text_lower: &str) -> Vec<&'a str> {
        self.high_priority.hits(text_lower)
    }

    pub fn low_priority_hits<'a>(&'a self, text_lower: &str) -> Vec<&'a str> {
        self.low_priority.hits(text_lower)
    }

    pub fn has_shared_resource_language(&self, text_lower: &str) -> bool {
        self.shared_resource.any(text_lower)
    }

    pub fn has_concurrency_language(&self, text_lower: &str) -> bool {
        self.concurrency.any(text_lower)
    }

    pub fn has_payment_auth_language(&self, text_lower: &str) -> bool {
        self.payment_auth.any(text_lower)
    }

    /// True when the text carries any measurable quantity (digit/unit).
    pub fn has_measurable_quantity(&self, text: &str) -> bool {
        self.measurable.iter().any(|re| re.is_match(text))
    }

    /// True when the text expresses a numeric input range.
    pub fn has_boundary_range(&self, text: &str) -> bool {
        self.boundary_range.iter().any(|re| re.is_match(text))
    }
}
