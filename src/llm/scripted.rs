use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{CopilotError, Result};
use crate::llm::generator::TextGenerator;

/// Generator that replays queued replies and records every prompt it receives.
/// An exhausted queue answers with a generation error.
#[derive(Debug, Default)]
pub(crate) struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.push(Ok(reply.into()));
        self
    }

    pub fn with_failure(self, reason: impl Into<String>) -> Self {
        self.push(Err(CopilotError::Generation(reason.into())));
        self
    }

    fn push(&self, outcome: Result<String>) {
        self.replies
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(outcome);
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(prompt.to_string());

        self.replies
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front()
            .unwrap_or_else(|| {
                Err(CopilotError::Generation(
                    "no scripted reply left".to_string(),
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replays_in_order_and_records_prompts() {
        let generator = ScriptedGenerator::new()
            .with_reply("first")
            .with_failure("connection reset");

        assert_eq!(generator.generate("p1").await.unwrap(), "first");
        assert!(matches!(
            generator.generate("p2").await,
            Err(CopilotError::Generation(reason)) if reason == "connection reset"
        ));
        assert!(generator.generate("p3").await.is_err());
        assert_eq!(generator.prompts(), vec!["p1", "p2", "p3"]);
        assert_eq!(generator.call_count(), 3);
    }
}
