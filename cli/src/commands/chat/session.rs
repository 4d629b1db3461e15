//! # Chat Session State
//!
//! File: cli/src/commands/chat/session.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The per-session state of `vikas chat`: the raw name the user gave (the only
//! thing remembered between turns) and an in-memory transcript of messages.
//! The transcript lives exactly as long as the session and is never written
//! anywhere.
//!
//! Each turn hands the remembered name and the new message to the reply engine;
//! the engine itself keeps nothing.
//!
use chrono::Utc;
use std::fmt;
use vikas::assistant::{compose_reply, initial_greeting, text, Reply};

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Assistant,
    User,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Assistant => f.write_str("assistant"),
            Role::User => f.write_str("user"),
        }
    }
}

/// # Chat Message (`ChatMessage`)
///
/// One entry of the transcript. Ids are millisecond timestamps, bumped when
/// needed so they stay strictly increasing within a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: i64,
    pub role: Role,
    pub content: String,
}

/// # Chat Session (`ChatSession`)
#[derive(Debug)]
pub struct ChatSession {
    name: Option<String>,
    messages: Vec<ChatMessage>,
    last_id: i64,
}

impl ChatSession {
    /// Opens a session. The transcript starts with the onboarding greeting.
    pub fn new(name: Option<String>) -> Self {
        let mut session = Self {
            name,
            messages: Vec::new(),
            last_id: 0,
        };
        session.record(Role::Assistant, initial_greeting());
        session
    }

    /// The raw remembered name, exactly as the user typed it.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Replaces the remembered name. Blank input forgets it.
    pub fn set_name(&mut self, raw: &str) {
        self.name = if text::trim(raw).is_empty() {
            None
        } else {
            Some(raw.to_string())
        };
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Records a user message and the assistant's reply to it.
    ///
    /// Blank input is not sent, matching a chat box that refuses to submit an
    /// empty message; `None` is returned and nothing is recorded.
    pub fn submit(&mut self, input: &str) -> Option<Reply> {
        let message = text::trim(input);
        if message.is_empty() {
            return None;
        }
        self.record(Role::User, message.to_string());
        let reply = compose_reply(self.name.as_deref(), message);
        self.record(Role::Assistant, reply.text.clone());
        Some(reply)
    }

    fn record(&mut self, role: Role, content: String) {
        let id = Utc::now().timestamp_millis().max(self.last_id + 1);
        self.last_id = id;
        self.messages.push(ChatMessage { id, role, content });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vikas::assistant::ReplyKind;

    #[test]
    fn test_new_session_starts_with_greeting() {
        let session = ChatSession::new(None);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, Role::Assistant);
        assert_eq!(session.messages()[0].content, initial_greeting());
    }

    #[test]
    fn test_blank_input_is_not_sent() {
        let mut session = ChatSession::new(None);
        assert!(session.submit("   ").is_none());
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_submit_records_both_sides() {
        let mut session = ChatSession::new(Some("priya".into()));
        let reply = session.submit("  sparsh portal  ").unwrap();
        assert_eq!(reply.kind, ReplyKind::Service);

        let messages = session.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "sparsh portal");
        assert_eq!(messages[2].role, Role::Assistant);
        assert!(messages[2].content.starts_with("Namaste Priya ji!"));
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut session = ChatSession::new(None);
        for _ in 0..5 {
            session.submit("bank account kholna hai");
        }
        let ids: Vec<i64> = session.messages().iter().map(|m| m.id).collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_name_persists_and_can_change() {
        let mut session = ChatSession::new(None);
        assert!(session.submit("xyz").unwrap().text.starts_with("Namaste ji!"));

        session.set_name("ramesh kumar");
        assert_eq!(session.name(), Some("ramesh kumar"));
        assert!(session
            .submit("xyz")
            .unwrap()
            .text
            .starts_with("Namaste Ramesh Kumar ji!"));

        session.set_name("  ");
        assert_eq!(session.name(), None);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Assistant.to_string(), "assistant");
        assert_eq!(Role::User.to_string(), "user");
    }
}
