//! Shared tokenization helpers for the text-processing stages.

/// Whitespace-separated tokens, in order.
pub(crate) fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Lowercased token with surrounding punctuation stripped.
pub(crate) fn norm_token(raw: &str) -> String {
    raw.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase()
}

/// Words of `text` with their byte offsets, in order.
pub(crate) fn words_with_offsets(text: &str) -> Vec<(usize, &str)> {
    let mut words = Vec::new();
    let mut pos = 0;
    for w in text.split_whitespace() {
        if let Some(found) = text[pos..].find(w) {
            let idx = found + pos;
            words.push((idx, w));
            pos = idx + w.len();
        }
    }
    words
}

/// Trim a fragment and strip boundary punctuation.
pub(crate) fn clean_fragment(s: &str) -> String {
    s.trim()
        .trim_matches(|c| c == '.' || c == ',' || c == ';' || c == ':')
        .trim()
        .to_string()
}

/// Uppercase the first character, leaving the rest untouched.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
