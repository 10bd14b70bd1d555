// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query/filename tokenization: turning noise into comparable token sets.
//!
//! Peer-reported filenames are a mess: "Artist_-_Title_(Extended_Mix)[2019].mp3",
//! "artist - title feat. somebody.flac", and worse. The tokenizer reduces both
//! a free-text query and a filename to lowercase token sequences that can be
//! compared by set membership.
//!
//! Deliberately dumb: no stemming, no stop-word removal beyond the joiner
//! list. Short words ("a", "the") are preserved - dropping them could let a
//! wrong-track match slip through the admission gate.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Joining words stripped in fuzzy mode. "Artist feat. Somebody" and
/// "Artist" should tokenize compatibly when the caller asks for leniency.
const JOINERS: &[&str] = &["feat", "ft", "featuring", "vs", "with", "prod"];

/// A `.` this close to the end of a string marks a filename extension.
const EXTENSION_WINDOW: usize = 6;

/// Normalize a string for matching: lowercase, strip diacritics, collapse
/// whitespace.
///
/// - "Café del Mar" → "cafe del mar"
/// - "Tiësto" → "tiesto"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks (category Mn = Mark, Nonspacing)
/// 3. Lowercase
/// 4. Collapse whitespace
///
/// # Algorithm (without unicode-normalization)
///
/// 1. Lowercase only (assumes input is pre-normalized or ASCII)
/// 2. Collapse whitespace
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lightweight normalization without the unicode-normalization dependency.
/// Just lowercases and collapses whitespace.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Tokenize a query or filename into lowercase tokens.
///
/// Steps, in order:
/// 1. Normalize (lowercase + diacritic strip).
/// 2. If the string looks like a filename - a `.` within six characters of
///    the end - strip the trailing extension.
/// 3. Split on runs of whitespace, `-`, `_`, `,`, `.`, and brackets.
/// 4. When `fuzzy`, drop whole-word joiners (feat, ft, featuring, vs, with,
///    prod) so "feat."-laden filenames still admit a plain query.
/// 5. Drop empty tokens.
///
/// # Example
///
/// ```
/// use cratedig::tokenize;
///
/// let tokens = tokenize("Artist_-_Title_(Extended Mix).mp3", false);
/// assert_eq!(tokens, vec!["artist", "title", "extended", "mix"]);
/// ```
pub fn tokenize(text: &str, fuzzy: bool) -> Vec<String> {
    let normalized = normalize(text);
    let stripped = strip_extension(&normalized);

    stripped
        .split(is_token_separator)
        .filter(|t| !t.is_empty())
        .filter(|t| !(fuzzy && JOINERS.contains(t)))
        .map(str::to_string)
        .collect()
}

/// True iff every token of the query appears in the candidate text.
///
/// This is an admission gate, not a score - binary by design. An empty query
/// vacuously matches everything.
///
/// Membership is set-based: token order and duplicates in the query don't
/// matter, only presence.
pub fn matches_all_tokens(query: &str, candidate_text: &str, fuzzy: bool) -> bool {
    let query_tokens = tokenize(query, fuzzy);
    if query_tokens.is_empty() {
        return true;
    }
    let candidate_tokens = tokenize(candidate_text, fuzzy);
    query_tokens
        .iter()
        .all(|q| candidate_tokens.iter().any(|c| c == q))
}

/// Strip a trailing filename extension, if one is present.
///
/// "present" means a `.` within [`EXTENSION_WINDOW`] characters of the end;
/// "artist - st. germain.mp3" loses ".mp3" but keeps "st." intact. The
/// window is counted in characters, not bytes, so a multi-byte extension
/// tail doesn't shrink it.
fn strip_extension(text: &str) -> &str {
    match text.rfind('.') {
        Some(pos) if text[pos..].chars().count() <= EXTENSION_WINDOW => &text[..pos],
        _ => text,
    }
}

fn is_token_separator(c: char) -> bool {
    c.is_whitespace()
        || matches!(c, '-' | '_' | ',' | '.' | '(' | ')' | '[' | ']' | '{' | '}')
}
