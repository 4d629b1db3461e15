//! # Intent Matching
//!
//! File: cli/src/assistant/matcher.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Picks the service guide a message is about. The message is lowercased once
//! and the catalogue is scanned in declaration order; the first guide with any
//! keyword contained in the message wins. There is no scoring and no tie-break
//! beyond catalogue order.
//!
//! Matching is unanchored substring containment, not word matching. Short
//! keywords such as "pm" or "pan" will also fire inside longer words
//! ("shipment", "pandemic"). That imprecision is the established behaviour and is
//! kept as is.
//!
use super::catalogue::{ServiceGuide, SERVICE_GUIDES};
use tracing::trace;

/// Matches `message` against the built-in catalogue.
///
/// Returns `None` when no keyword of any guide occurs in the message.
pub fn match_guide(message: &str) -> Option<&'static ServiceGuide> {
    match_guide_in(SERVICE_GUIDES, message)
}

/// Matches `message` against an arbitrary ordered list of guides.
///
/// The first guide (by slice position) owning a keyword contained in the
/// lowercased message is returned.
pub fn match_guide_in<'a>(guides: &'a [ServiceGuide], message: &str) -> Option<&'a ServiceGuide> {
    let lowered = message.to_lowercase();
    guides.iter().find(|guide| match guide.matched_keyword(&lowered) {
        Some(keyword) => {
            trace!(guide = guide.id, keyword, "keyword hit");
            true
        }
        None => false,
    })
}
