//! Word-level diff for inline highlighting inside a changed line.
//!
//! Whitespace runs are kept as tokens of their own, so concatenating the
//! tokens of either side reproduces that side's text byte for byte.

use redline_types::{ChangeKind, DiffToken};

use crate::lcs::lcs;

/// Split `text` into alternating runs of whitespace and non-whitespace.
pub fn tokenize_words(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_space: Option<bool> = None;

    for (idx, ch) in text.char_indices() {
        let space = ch.is_whitespace();
        if in_space.is_some_and(|prev| prev != space) {
            tokens.push(&text[start..idx]);
            start = idx;
        }
        in_space = Some(space);
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}

/// Compute a token-level diff between two strings.
///
/// Uses the same emission order as the line differencer: unmatched original
/// tokens, then unmatched revised tokens, then the matched token.
pub fn word_diff(original: &str, revised: &str) -> Vec<DiffToken> {
    let old = tokenize_words(original);
    let new = tokenize_words(revised);
    let matches = lcs(&old, &new);

    let mut out = Vec::with_capacity(old.len() + new.len() - matches.len());
    let mut old_idx = 0;
    let mut new_idx = 0;

    for m in &matches {
        out.extend(old[old_idx..m.a_idx].iter().map(|t| token(ChangeKind::Removed, t)));
        out.extend(new[new_idx..m.b_idx].iter().map(|t| token(ChangeKind::Added, t)));
        out.push(token(ChangeKind::Unchanged, old[m.a_idx]));
        old_idx = m.a_idx + 1;
        new_idx = m.b_idx + 1;
    }

    out.extend(old[old_idx..].iter().map(|t| token(ChangeKind::Removed, t)));
    out.extend(new[new_idx..].iter().map(|t| token(ChangeKind::Added, t)));
    out
}

fn token(kind: ChangeKind, text: &str) -> DiffToken {
    DiffToken {
        kind,
        text: text.to_string(),
    }
}
