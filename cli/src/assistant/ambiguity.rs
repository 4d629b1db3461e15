//! # Ambiguity Detection
//!
//! File: cli/src/assistant/ambiguity.rs
//! Author: Christi Mahu
//!
//! A message that matched no guide and is either very short or just asks for
//! "help" carries too little signal for a specific answer; the assistant asks a
//! clarifying question instead. A keyword hit always wins over this check.
//!
use super::catalogue::ServiceGuide;
use super::text::utf16_len;
use regex::Regex;
use std::sync::LazyLock;

/// Unmatched messages shorter than this many UTF-16 code units are ambiguous.
pub const MIN_SPECIFIC_LEN: usize = 8;

/// "help" between ASCII word boundaries: only `[A-Za-z0-9_]` counts as a word
/// character, so "मुझेhelp" and "helpé" still contain the word.
static HELP_WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?-u:\b)help(?-u:\b)").expect("help word pattern is valid")
});

/// Returns `true` when `trimmed` should get the clarifying follow-up reply.
///
/// `trimmed` is the already-trimmed message and `matched` the intent matcher's
/// result for it. Length is counted in UTF-16 code units.
pub fn is_ambiguous(trimmed: &str, matched: Option<&ServiceGuide>) -> bool {
    if matched.is_some() {
        return false;
    }
    utf16_len(trimmed) < MIN_SPECIFIC_LEN || mentions_help(trimmed)
}

/// Whether `text` contains "help" as a standalone word, ignoring case.
pub fn mentions_help(text: &str) -> bool {
    HELP_WORD_RE.is_match(text)
}
