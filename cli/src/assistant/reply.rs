//! # Reply Composition
//!
//! File: cli/src/assistant/reply.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Turns a `(name, message)` pair into the text block shown to the user. Every
//! reply has one of four fixed shapes:
//!
//! 1. **Greeting**: the onboarding message shown once when a session opens.
//! 2. **Follow-up**: a clarifying question, for empty or ambiguous messages.
//! 3. **Service**: the numbered steps of the guide the message matched.
//! 4. **General**: a generic next-steps answer when nothing matched.
//!
//! ## Routing
//!
//! ```text
//! trim(message) == ""            -> Follow-up
//! match_guide(trimmed) = Some(g) -> Service(g)
//! is_ambiguous(trimmed, None)    -> Follow-up
//! otherwise                      -> General
//! ```
//!
//! Each section is one line (numbered steps one per line) and sections are
//! joined with `\n`. The closing line is always last. Composition is a pure,
//! total function: the same input always produces the same bytes and no input
//! produces an error.
//!
use super::ambiguity::is_ambiguous;
use super::catalogue::{ServiceGuide, CLOSING_LINE};
use super::matcher::match_guide;
use super::name::DisplayName;
use super::suggestions::compose_suggestions;
use super::text;
use serde::Serialize;
use tracing::debug;

const ASSISTANT_INTRO: &str = "Main VIKAS AI Assistant hoon.";
const SUGGESTION_PREFIX: &str = "Upyogi seva sujhav: ";

const GREETING_OPENER: &str = "Namaste! Main VIKAS AI Assistant hoon. Kripya apna naam aur seva ki jarurat likhiye taaki main sahi madad de sakun.";
const GREETING_STEPS: &[&str] = &[
    "Apna naam ya parichay share kijiye.",
    "Seva ka naam aur short detail bataye.",
    "Agar documents ready hain to unka zikr kijiye.",
];

const FOLLOW_UP_INTRO: &str = "Mujhe aapki madad ke liye thoda aur jaankari chahiye.";
const FOLLOW_UP_STEPS: &[&str] = &[
    "Kripya bataye kaunsi seva chahiye: Pension, Aadhaar, Banking, PM Yojana ya koi aur?",
    "Aapke paas jo documents ya details hain unka short list share kijiye.",
    "Main turant agle kadam samjhaunga jaisi hi aap detail denge.",
];

const SERVICE_INTRO: &str = "Aapke liye yeh saral kadam follow kijiye:";
const MISSING_DOCUMENTS_PROMPT: &str =
    "Agar koi document missing ho ya ghar se seva chahiye to mujhe bataiye.";

const GENERAL_INTRO: &str = "Aapke sawaal ko dhyan se samajh raha hoon.";
const GENERAL_STEPS: &[&str] = &[
    "Apni requirement bhejte waqt document ya reference number mention kijiye.",
    "VIKAS CSC par visit ya video call scheduling ke liye preferred time bataye.",
    "Main confirm karne ke baad receipt aur tracking help bhi dunga.",
];
const GENERAL_CROSS_SELL: &str = "Aap chahe to pension, Aadhaar, banking, ya kisi PM scheme ki seva bhi yahin se le sakte hain.";

/// Extra topic injected into the suggestion line of general replies.
pub const DOORSTEP_TOPIC: &str = "Doorstep Support Booking";

/// # Reply Kind (`ReplyKind`)
///
/// Which of the four shapes a reply was rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyKind {
    Greeting,
    FollowUp,
    Service,
    General,
}

/// # Composed Reply (`Reply`)
///
/// The rendered text together with how it was chosen. Front-ends display `text`
/// verbatim; `kind` and `guide` are for logging and the JSON API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub kind: ReplyKind,
    /// Id of the matched guide, present only for [`ReplyKind::Service`].
    pub guide: Option<&'static str>,
    pub text: String,
}

/// Produces the reply text for `message` from a user who gave `name`.
///
/// `name` is the raw, caller-remembered name; it is normalized on every call.
pub fn generate_reply(name: Option<&str>, message: &str) -> String {
    compose_reply(name, message).text
}

/// Like [`generate_reply`] but also reports the chosen shape and guide.
pub fn compose_reply(name: Option<&str>, message: &str) -> Reply {
    let display_name = DisplayName::from_optional(name);
    let greeting = greeting_line(display_name.as_ref());
    let trimmed = text::trim(message);

    if trimmed.is_empty() {
        debug!("empty message, asking for details");
        return follow_up(&greeting);
    }

    let matched = match_guide(trimmed);
    if is_ambiguous(trimmed, matched) {
        debug!(len = text::utf16_len(trimmed), "ambiguous message, asking for details");
        return follow_up(&greeting);
    }

    match matched {
        Some(guide) => {
            debug!(guide = guide.id, "composing service reply");
            Reply {
                kind: ReplyKind::Service,
                guide: Some(guide.id),
                text: service_text(&greeting, guide),
            }
        }
        None => {
            debug!("no guide matched, composing general reply");
            Reply {
                kind: ReplyKind::General,
                guide: None,
                text: general_text(&greeting),
            }
        }
    }
}

/// The onboarding message shown once at the start of a session.
pub fn initial_greeting() -> String {
    [
        GREETING_OPENER.to_string(),
        format_steps(GREETING_STEPS),
        suggestion_line(None, &[]),
        CLOSING_LINE.to_string(),
    ]
    .join("\n")
}

/// [`initial_greeting`] wrapped as a [`Reply`].
pub fn greeting_reply() -> Reply {
    Reply {
        kind: ReplyKind::Greeting,
        guide: None,
        text: initial_greeting(),
    }
}

/// Renders steps as `"1. first"`, `"2. second"`, ... one per line.
pub fn format_steps(steps: &[&str]) -> String {
    steps
        .iter()
        .enumerate()
        .map(|(index, step)| format!("{}. {}", index + 1, step))
        .collect::<Vec<_>>()
        .join("\n")
}

fn greeting_line(name: Option<&DisplayName>) -> String {
    match name {
        Some(name) => format!("Namaste {name} ji!"),
        None => "Namaste ji!".to_string(),
    }
}

fn suggestion_line(guide: Option<&ServiceGuide>, extra: &[&str]) -> String {
    format!("{SUGGESTION_PREFIX}{}", compose_suggestions(guide, extra))
}

fn follow_up(greeting: &str) -> Reply {
    let text = [
        format!("{greeting} {ASSISTANT_INTRO} {FOLLOW_UP_INTRO}"),
        format_steps(FOLLOW_UP_STEPS),
        suggestion_line(None, &[]),
        CLOSING_LINE.to_string(),
    ]
    .join("\n");
    Reply {
        kind: ReplyKind::FollowUp,
        guide: None,
        text,
    }
}

fn service_text(greeting: &str, guide: &ServiceGuide) -> String {
    [
        format!("{greeting} {ASSISTANT_INTRO} {SERVICE_INTRO}"),
        format_steps(guide.steps),
        guide.reassurance().to_string(),
        MISSING_DOCUMENTS_PROMPT.to_string(),
        suggestion_line(Some(guide), &[]),
        CLOSING_LINE.to_string(),
    ]
    .join("\n")
}

fn general_text(greeting: &str) -> String {
    [
        format!("{greeting} {ASSISTANT_INTRO} {GENERAL_INTRO}"),
        format_steps(GENERAL_STEPS),
        GENERAL_CROSS_SELL.to_string(),
        suggestion_line(None, &[DOORSTEP_TOPIC]),
        CLOSING_LINE.to_string(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::catalogue::DEFAULT_REASSURANCE;

    #[test]
    fn test_format_steps_numbers_from_one() {
        assert_eq!(format_steps(&["a", "b", "c"]), "1. a\n2. b\n3. c");
        assert_eq!(format_steps(&[]), "");
    }

    #[test]
    fn test_empty_message_gives_follow_up() {
        let reply = compose_reply(Some("ramesh kumar"), "   ");
        assert_eq!(reply.kind, ReplyKind::FollowUp);
        assert!(reply.text.starts_with("Namaste Ramesh Kumar ji! Main VIKAS AI Assistant hoon."));
    }

    #[test]
    fn test_byte_order_mark_only_message_gives_follow_up() {
        let reply = compose_reply(Some("\u{FEFF}"), "\u{FEFF}");
        assert_eq!(reply.kind, ReplyKind::FollowUp);
        assert!(reply.text.starts_with("Namaste ji! "));
    }

    #[test]
    fn test_help_glued_to_devanagari_asks_for_details() {
        let reply = compose_reply(None, "मुझेhelp chahiye yaar");
        assert_eq!(reply.kind, ReplyKind::FollowUp);
    }

    #[test]
    fn test_blank_name_uses_generic_greeting() {
        let reply = compose_reply(Some("   "), "help");
        assert!(reply.text.starts_with("Namaste ji! "));
    }

    #[test]
    fn test_follow_up_exact_text() {
        let expected = "Namaste ji! Main VIKAS AI Assistant hoon. Mujhe aapki madad ke liye thoda aur jaankari chahiye.\n\
1. Kripya bataye kaunsi seva chahiye: Pension, Aadhaar, Banking, PM Yojana ya koi aur?\n\
2. Aapke paas jo documents ya details hain unka short list share kijiye.\n\
3. Main turant agle kadam samjhaunga jaisi hi aap detail denge.\n\
Upyogi seva sujhav: Pension / Life Certificate (DLC, Sparsh) | Samman / Sambhal Card | Banking, Aadhaar, PAN, Passport Services | PM Schemes, Bill Payment, Recharge\n\
धन्यवाद! 🙏 Aapka apna VIKAS CSC – Vikas ke sath aapke vikas ki baat.";
        assert_eq!(generate_reply(None, "xyz"), expected);
    }

    #[test]
    fn test_service_reply_uses_default_reassurance() {
        let reply = compose_reply(None, "AEPS withdrawal karna hai");
        assert_eq!(reply.kind, ReplyKind::Service);
        assert_eq!(reply.guide, Some("banking"));
        let lines: Vec<&str> = reply.text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Namaste ji! Main VIKAS AI Assistant hoon. Aapke liye yeh saral kadam follow kijiye:");
        assert!(lines[1].starts_with("1. Valid Aadhaar"));
        assert_eq!(lines[4], DEFAULT_REASSURANCE);
        assert_eq!(lines[5], MISSING_DOCUMENTS_PROMPT);
        assert!(lines[6].starts_with(SUGGESTION_PREFIX));
        assert_eq!(lines[7], CLOSING_LINE);
    }

    #[test]
    fn test_keyword_hit_beats_short_message_rule() {
        let reply = compose_reply(None, "dlc");
        assert_eq!(reply.kind, ReplyKind::Service);
        assert_eq!(reply.guide, Some("pension"));
    }

    #[test]
    fn test_keyword_hit_beats_help_word() {
        let reply = compose_reply(None, "help me with my pension please");
        assert_eq!(reply.guide, Some("pension"));
    }

    #[test]
    fn test_general_reply_shape() {
        let reply = compose_reply(Some("x"), "Mera kaam kab tak ho jayega?");
        assert_eq!(reply.kind, ReplyKind::General);
        assert_eq!(reply.guide, None);
        let lines: Vec<&str> = reply.text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Namaste X ji! Main VIKAS AI Assistant hoon. Aapke sawaal ko dhyan se samajh raha hoon.");
        assert_eq!(lines[4], GENERAL_CROSS_SELL);
        assert!(lines[5].starts_with(SUGGESTION_PREFIX));
    }

    #[test]
    fn test_initial_greeting_shape() {
        let greeting = initial_greeting();
        let lines: Vec<&str> = greeting.lines().collect();
        assert_eq!(lines[0], GREETING_OPENER);
        assert_eq!(lines[1], "1. Apna naam ya parichay share kijiye.");
        assert_eq!(lines[3], "3. Agar documents ready hain to unka zikr kijiye.");
        assert_eq!(lines.last(), Some(&CLOSING_LINE));
        assert_eq!(greeting_reply().kind, ReplyKind::Greeting);
    }

    #[test]
    fn test_reply_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ReplyKind::FollowUp).unwrap();
        assert_eq!(json, "\"follow_up\"");
    }
}
