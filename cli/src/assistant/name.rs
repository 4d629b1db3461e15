//! # Display Name Formatting
//!
//! File: cli/src/assistant/name.rs
//! Author: Christi Mahu
//!
//! Turns whatever the user typed into the name box into the form used in the
//! greeting line: trimmed, split on single spaces, each token title-cased.
//! No validation is done; digits and punctuation pass through untouched.
//!
use super::text;
use std::fmt;

/// # Display Name (`DisplayName`)
///
/// A normalized, non-empty user name ready for the greeting line. It is derived
/// fresh from raw input on every reply and never stored by the reply engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    /// Normalizes `raw`, returning `None` when it is empty or only whitespace.
    ///
    /// ```
    /// use vikas::assistant::DisplayName;
    ///
    /// let name = DisplayName::parse("  ramesh KUMAR ").unwrap();
    /// assert_eq!(name.as_str(), "Ramesh Kumar");
    /// assert!(DisplayName::parse("   ").is_none());
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = text::trim(raw);
        if trimmed.is_empty() {
            return None;
        }
        let formatted = trimmed
            .split(' ')
            .map(title_case)
            .collect::<Vec<_>>()
            .join(" ");
        Some(Self(formatted))
    }

    /// Normalizes an optional raw name; `None` and blank input both yield `None`.
    pub fn from_optional(raw: Option<&str>) -> Option<Self> {
        raw.and_then(Self::parse)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Uppercases the first character and lowercases the rest. Empty tokens (from
/// repeated spaces) stay empty so the original spacing survives the rejoin.
fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}
