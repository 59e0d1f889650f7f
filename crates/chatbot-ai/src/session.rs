//! Conversation session.
//!
//! A `Session` holds the ordered transcript of one interactive
//! conversation. Turns can only be appended; nothing is removed or edited
//! for the lifetime of the session. The presentation surface owns each
//! session, so concurrent conversations never share a transcript.

use chatbot_common::SessionId;

use crate::{Role, Turn};

#[derive(Debug, Default)]
pub struct Session {
    id: SessionId,
    turns: Vec<Turn>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn append_user(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::user(text));
    }

    pub fn append_assistant(&mut self, text: impl Into<String>) {
        self.turns.push(Turn::assistant(text));
    }

    /// The full transcript, oldest first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Most recent assistant turn, if any.
    pub fn last_assistant(&self) -> Option<&Turn> {
        self.turns.iter().rev().find(|t| t.role == Role::Assistant)
    }
}
