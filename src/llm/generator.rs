use async_trait::async_trait;

use crate::error::Result;

/// A text-in, text-out completion backend.
///
/// The turn handler only talks to the model through this trait, so a
/// different provider (or a canned one in tests) can be swapped in without
/// touching the orchestration.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn name(&self) -> &str;

    /// Sends `prompt` as the sole input and returns the model's reply.
    /// Failures are returned as-is; nothing is retried.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
