use log::debug;

use crate::prompts::GREETING;
use crate::schema::{Message, UserId};

/// State of one interactive chat: the message log and the last identifier used.
///
/// The log is append-only and unbounded; the whole of it is resent to the
/// model on every turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationSession {
    messages: Vec<Message>,
    last_user_id: Option<UserId>,
}

impl ConversationSession {
    /// A fresh session seeded with the assistant greeting.
    pub fn new() -> Self {
        Self {
            messages: vec![Message::assistant(GREETING)],
            last_user_id: None,
        }
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.append(Message::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.append(Message::assistant(content));
    }

    pub fn remember_identifier(&mut self, id: UserId) {
        if self.last_user_id.as_ref() != Some(&id) {
            debug!("Session now tracking {}", id);
        }
        self.last_user_id = Some(id);
    }

    pub fn recall(&self) -> Option<&UserId> {
        self.last_user_id.as_ref()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}
