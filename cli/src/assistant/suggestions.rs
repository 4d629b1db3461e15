//! # Suggestion Line Composition
//!
//! File: cli/src/assistant/suggestions.rs
//! Author: Christi Mahu
//!
//! Builds the "Upyogi seva sujhav" line: the default topics, then the matched
//! guide's topics, then any extra topics, with duplicates collapsed (first
//! occurrence wins) and the list capped at [`MAX_SUGGESTIONS`].
//!
//! The defaults alone already fill every slot, so with the current catalogue
//! guide and extra topics are always truncated away. The composition order is
//! kept regardless so a shorter default list would surface them.
//!
use super::catalogue::{ServiceGuide, DEFAULT_SUGGESTIONS};

/// Upper bound on topics shown in one suggestion line.
pub const MAX_SUGGESTIONS: usize = 4;

/// Separator placed between topics in the rendered line.
pub const SEPARATOR: &str = " | ";

/// Ordered, deduplicated, truncated topic list.
pub fn suggestion_list<'a>(guide: Option<&'a ServiceGuide>, extra: &[&'a str]) -> Vec<&'a str> {
    let guide_topics = guide.map(|g| g.suggestions).unwrap_or_default();
    let candidates = DEFAULT_SUGGESTIONS
        .iter()
        .chain(guide_topics)
        .chain(extra)
        .copied();

    let mut topics: Vec<&str> = Vec::with_capacity(MAX_SUGGESTIONS);
    for topic in candidates {
        if topics.len() == MAX_SUGGESTIONS {
            break;
        }
        if !topics.contains(&topic) {
            topics.push(topic);
        }
    }
    topics
}

/// Renders [`suggestion_list`] joined with [`SEPARATOR`].
pub fn compose_suggestions(guide: Option<&ServiceGuide>, extra: &[&str]) -> String {
    suggestion_list(guide, extra).join(SEPARATOR)
}
