//! Compound-requirement splitting.
//!
//! Splitting rule: a coordinating conjunction starts a new requirement
//! only when it is followed by a new subject and that subject's own
//! modal verb ("… and the system shall …"). Same actor with multiple
//! verb phrases stays one requirement — that split belongs to the
//! behavior extractor. Conjunctions inside a conditional clause never
//! split.

use crate::rules::CompiledRules;
use crate::text::{norm_token, words_with_offsets};

/// Maximum tokens scanned after a conjunction for the new clause's
/// modal verb.
const MODAL_LOOKAHEAD: usize = 4;

pub(crate) struct SplitOutcome {
    pub clauses: Vec<String>,
    pub split_applied: bool,
}

pub(crate) fn split_compound(text: &str, rules: &CompiledRules) -> SplitOutcome {
    let words = words_with_offsets(text);
    let norms: Vec<String> = words.iter().map(|(_, w)| norm_token(w)).collect();

    let mut boundaries: Vec<usize> = Vec::new(); // word index of each qualifying "and"
    let mut segment_start = 0usize;

    for i in 0..words.len() {
        if norms[i] != "and" {
            continue;
        }

        // The clause so far must itself carry a modal verb, otherwise
        // this is a conjoined subject ("Users and admins shall …").
        let prefix_has_modal = norms[segment_start..i].iter().any(|t| rules.is_modal(t));
        if !prefix_has_modal {
            continue;
        }

        // A conjunction inside a conditional clause never splits.
        let inside_condition = norms[segment_start..i]
            .iter()
            .any(|t| rules.is_conditional_marker(t));
        if inside_condition {
            continue;
        }

        // The suffix must introduce a new subject and its own modal.
        let lookahead_end = (i + 1 + MODAL_LOOKAHEAD).min(words.len());
        let modal_at = norms[i + 1..lookahead_end]
            .iter()
            .position(|t| rules.is_modal(t));
        match modal_at {
            Some(j) if j >= 1 => {
                let crosses_marker = norms[i + 1..i + 1 + j]
                    .iter()
                    .any(|t| rules.is_conditional_marker(t));
                if !crosses_marker {
                    boundaries.push(i);
                    segment_start = i + 1;
                }
            }
            _ => {}
        }
    }

    if boundaries.is_empty() {
        return SplitOutcome {
            clauses: vec![text.trim().to_string()],
            split_applied: false,
        };
    }

    let mut clauses = Vec::with_capacity(boundaries.len() + 1);
    let mut start_byte = 0usize;
    for &b in &boundaries {
        let end_byte = words[b].0;
        clauses.push(clean_clause(&text[start_byte..end_byte]));
        start_byte = words[b].0 + words[b].1.len();
    }
    clauses.push(clean_clause(&text[start_byte..]));
    clauses.retain(|c| !c.is_empty());

    SplitOutcome {
        clauses,
        split_applied: true,
    }
}

fn clean_clause(raw: &str) -> String {
    raw.trim().trim_matches(|c| c == ',' || c == ';').trim().to_string()
}
