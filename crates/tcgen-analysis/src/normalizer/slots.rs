//! Actor-Action-Conditions-Outcome slot extraction for one clause.

use crate::rules::CompiledRules;
use crate::text::{capitalize, clean_fragment, norm_token, words_with_offsets};

/// Raw slot extraction result. `actor`/`outcome` stay `None` when the
/// clause does not carry them — the normalizer decides the fallback and
/// records the issue.
pub(crate) struct Slots {
    pub actor: Option<String>,
    pub modal: Option<String>,
    pub action: String,
    pub conditions: Vec<(String, String)>, // (marker, condition text)
    pub expected_outcome: Option<String>,
}

pub(crate) fn extract_slots(clause: &str, rules: &CompiledRules) -> Slots {
    // Pull a trailing outcome clause first so its wording never leaks
    // into the action or conditions.
    let (main, expected_outcome) = split_outcome(clause, rules);

    let words = words_with_offsets(&main);
    let norms: Vec<String> = words.iter().map(|(_, w)| norm_token(w)).collect();

    let modal_at = norms.iter().position(|t| rules.is_modal(t));

    let Some(m) = modal_at else {
        // No modal verb: treat the whole clause as the action and let
        // the normalizer flag the missing structure.
        return Slots {
            actor: None,
            modal: None,
            action: clean_fragment(&main),
            conditions: Vec::new(),
            expected_outcome,
        };
    };

    let actor = {
        let mut head: Vec<&str> = Vec::new();
        for (idx, (_, raw)) in words[..m].iter().enumerate() {
            if head.is_empty() && rules.is_article(&norms[idx]) {
                continue;
            }
            head.push(raw);
        }
        if head.is_empty() {
            None
        } else {
            Some(capitalize(&clean_fragment(&head.join(" "))))
        }
    };

    let rest = &words[m + 1..];
    let rest_norms = &norms[m + 1..];

    // Action runs from the modal to the first conditional marker.
    let marker_positions: Vec<usize> = rest_norms
        .iter()
        .enumerate()
        .filter(|(_, t)| rules.is_conditional_marker(t))
        .map(|(i, _)| i)
        .collect();

    let action_end = marker_positions.first().copied().unwrap_or(rest.len());
    let action_words: Vec<&str> = rest[..action_end].iter().map(|(_, w)| *w).collect();
    let mut action = clean_fragment(&action_words.join(" "));
    if action.is_empty() {
        // Marker immediately after the modal; fall back to everything
        // after the modal so the action slot is never blank.
        let all: Vec<&str> = rest.iter().map(|(_, w)| *w).collect();
        action = clean_fragment(&all.join(" "));
    }

    let mut conditions = Vec::new();
    for (k, &start) in marker_positions.iter().enumerate() {
        let end = marker_positions.get(k + 1).copied().unwrap_or(rest.len());
        if start + 1 >= end {
            continue;
        }
        let marker = rest_norms[start].clone();
        let text_words: Vec<&str> = rest[start + 1..end].iter().map(|(_, w)| *w).collect();
        let cond = clean_fragment(&text_words.join(" "));
        if !cond.is_empty() {
            conditions.push((marker, cond));
        }
    }

    Slots {
        actor,
        modal: Some(norms[m].clone()),
        action,
        conditions,
        expected_outcome,
    }
}

/// Split a trailing outcome clause off the main clause. The earliest
/// outcome marker wins; ties prefer the longest marker.
fn split_outcome(clause: &str, rules: &CompiledRules) -> (String, Option<String>) {
    let lower = clause.to_lowercase();
    let mut best: Option<(usize, usize)> = None; // (byte pos, marker len)
    for marker in rules.outcome_markers() {
        if let Some(pos) = lower.find(marker.as_str()) {
            let better = match best {
                None => true,
                Some((bp, bl)) => pos < bp || (pos == bp && marker.len() > bl),
            };
            if better {
                best = Some((pos, marker.len()));
            }
        }
    }

    match best {
        // Offsets come from the lowercased copy; only trust them when
        // they land on char boundaries of the original.
        Some((pos, len))
            if clause.len() >= pos + len
                && clause.is_char_boundary(pos)
                && clause.is_char_boundary(pos + len) =>
        {
            let outcome = clause[pos + len..].trim();
            let outcome = outcome.strip_prefix("that ").unwrap_or(outcome);
            let outcome = clean_fragment(outcome);
            let main = clause[..pos].trim().to_string();
            if outcome.is_empty() || main.is_empty() {
                (clause.to_string(), None)
            } else {
                (main, Some(outcome))
            }
        }
        _ => (clause.to_string(), None),
    }
}

