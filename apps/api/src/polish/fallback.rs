//! Fallback polish — the deterministic, non-AI normalizer used whenever the
//! external service is unavailable or returns nothing usable.
//!
//! Cosmetic only: whitespace, first-letter case, terminal punctuation.
//! It never corrects grammar.

use std::sync::OnceLock;

use regex::Regex;

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"))
}

fn space_before_punctuation() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+([.,!?])").expect("valid punctuation pattern"))
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Normalizes `input` into a capitalized, punctuated single line.
///
/// Callers are expected to reject blank input first; blank input yields `"."`.
pub fn basic_polish(input: &str) -> String {
    let text = input.trim();
    let text = whitespace_run().replace_all(text, " ");
    let text = space_before_punctuation().replace_all(&text, "$1");

    let mut chars = text.chars();
    let mut polished: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };

    if !polished.ends_with(is_terminal) {
        polished.push('.');
    }
    polished
}
