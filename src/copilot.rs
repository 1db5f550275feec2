use std::sync::Arc;

use log::{debug, info, warn};

use crate::error::{CopilotError, Result};
use crate::identifier::find_user_id;
use crate::llm::TextGenerator;
use crate::prompts::{build_prompt, MISSING_USER_ID};
use crate::schema::UserId;
use crate::session::ConversationSession;
use crate::store::RecordStore;

/// What a successful turn hands back to the chat surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The model's answer about `user_id`.
    Answer { user_id: UserId, text: String },
    /// No identifier could be resolved; the user is asked for one.
    Guidance(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Answer { text, .. } => text,
            Reply::Guidance(text) => text,
        }
    }
}

/// Runs chat turns against a shared record store and a text generator.
pub struct Copilot<G: TextGenerator> {
    store: Arc<RecordStore>,
    generator: G,
}

impl<G: TextGenerator> Copilot<G> {
    pub fn new(store: Arc<RecordStore>, generator: G) -> Self {
        Self { store, generator }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Handles one user turn to completion.
    ///
    /// The user's message is always appended. An assistant message is appended
    /// for an answer or for the missing-identifier guidance, never when the
    /// record is missing or generation fails.
    pub async fn handle_turn(
        &self,
        session: &mut ConversationSession,
        input: &str,
    ) -> Result<Reply> {
        session.push_user(input);

        let user_id = match self.resolve_identifier(session, input) {
            Ok(id) => id,
            Err(CopilotError::NoIdentifier) => {
                debug!("No UserID in turn and none remembered");
                session.push_assistant(MISSING_USER_ID);
                return Ok(Reply::Guidance(MISSING_USER_ID.to_string()));
            }
            Err(e) => return Err(e),
        };

        // Remembered before the lookup so a follow-up can retry the same id.
        session.remember_identifier(user_id.clone());

        let record = self.store.lookup(&user_id).inspect_err(|_| {
            warn!("No record for {}", user_id);
        })?;

        let prompt = build_prompt(session.messages(), record, &user_id, input)?;
        info!(
            "Asking {} about {} ({} messages of history)",
            self.generator.name(),
            user_id,
            session.len()
        );

        let text = self.generator.generate(&prompt).await.inspect_err(|e| {
            warn!("Generation failed for {}: {}", user_id, e);
        })?;

        if text.trim().is_empty() {
            return Err(CopilotError::Generation(
                "The model returned an empty response".to_string(),
            ));
        }

        session.push_assistant(text.clone());
        Ok(Reply::Answer { user_id, text })
    }

    fn resolve_identifier(&self, session: &ConversationSession, input: &str) -> Result<UserId> {
        find_user_id(input)
            .or_else(|| session.recall().cloned())
            .ok_or(CopilotError::NoIdentifier)
    }
}
