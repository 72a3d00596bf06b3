//! Whitespace normalization and the network-free fallback summarizer.

use std::sync::LazyLock;

use regex::Regex;

/// Fragments whose trimmed length is at or below this are dropped.
const MIN_FRAGMENT_CHARS: usize = 15;
/// Length of the raw-text fallback when no fragment survives filtering.
const FALLBACK_CHARS: usize = 240;
/// Maximum characters kept per bullet line, excluding the marker.
pub const MAX_LINE_CHARS: usize = 220;

pub const BULLET: &str = "• ";

const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?', '。', '！', '？'];

/// Collapse every run of whitespace into a single space and trim both ends.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Produce a bullet summary by picking the first meaningful sentences of `text`.
///
/// Sentences end at `.`, `!`, `?` (or their full-width forms) followed by
/// whitespace, or at a line break. Short fragments are ignored; if nothing
/// survives, the start of the original text is used instead.
#[must_use]
pub fn summarize_locally(text: &str, max_sentences: usize) -> String {
    let mut selected: Vec<String> = split_sentences(text)
        .into_iter()
        .filter(|chunk| chunk.trim().chars().count() > MIN_FRAGMENT_CHARS)
        .map(|chunk| chunk.trim_matches(&[' ', '-', '•'][..]).to_string())
        .collect();

    if selected.is_empty() {
        selected.push(take_chars(text, FALLBACK_CHARS).to_string());
    }

    selected
        .iter()
        .take(max_sentences)
        .map(|s| format!("{BULLET}{}", take_chars(s, MAX_LINE_CHARS)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split on whitespace that follows a sentence terminator, or on runs of
/// newlines. The terminator stays with its sentence; the separator is dropped.
fn split_sentences(text: &str) -> Vec<&str> {
    static SENTENCE_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"[.!?。！？]\s+|\n+")
            .unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
    });

    let mut chunks = Vec::new();
    let mut start = 0;
    for m in SENTENCE_BREAK_RE.find_iter(text) {
        let end = match m.as_str().chars().next() {
            Some(c) if SENTENCE_TERMINATORS.contains(&c) => m.start() + c.len_utf8(),
            _ => m.start(),
        };
        chunks.push(&text[start..end]);
        start = m.end();
    }
    chunks.push(&text[start..]);
    chunks
}

/// Prefix of `s` holding at most `n` characters.
#[must_use]
pub fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
