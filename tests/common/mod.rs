use std::collections::VecDeque;
use std::sync::Mutex;

use aadi_copilot::{CopilotError, Result, TextGenerator};
use async_trait::async_trait;

/// Replays queued replies in order and keeps every prompt it was sent.
#[derive(Default)]
pub struct MockGenerator {
    replies: Mutex<VecDeque<Result<String>>>,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(self, reply: &str) -> Self {
        self.replies.lock().unwrap().push_back(Ok(reply.to_string()));
        self
    }

    pub fn with_failure(self, reason: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Err(CopilotError::Generation(reason.to_string())));
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CopilotError::Generation("no reply queued".to_string())))
    }
}
