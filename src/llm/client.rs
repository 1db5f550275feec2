use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

use crate::config::DEFAULT_MODEL;
use crate::error::{CopilotError, Result};
use crate::llm::generator::TextGenerator;
use crate::llm::types::*;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: GEMINI_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point the client at a different endpoint (proxies, local test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    pub async fn generate_content(&self, prompt: &str) -> Result<String> {
        let payload = GenerateContentRequest {
            contents: vec![Content::user_text(prompt)],
        };

        debug!(
            "Sending {} byte prompt to Gemini model {}",
            prompt.len(),
            self.model
        );

        let res = self
            .client
            .post(self.endpoint())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(redact_url)?;
        let status = res.status();

        if !status.is_success() {
            let err_text = res.text().await.map_err(redact_url)?;
            warn!("Gemini API returned status {}", status);
            return Err(CopilotError::Generation(format!(
                "Gemini API Error (status {}): {}",
                status, err_text
            )));
        }

        let body: GenerateContentResponse = res.json().await.map_err(redact_url)?;

        if let Some(text) = body.first_text() {
            return Ok(text);
        }

        let reason = body
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason)
            .map(|reason| format!("Prompt blocked: {}", reason))
            .or_else(|| {
                body.candidates
                    .as_ref()
                    .and_then(|candidates| candidates.first())
                    .and_then(|candidate| candidate.finish_reason.clone())
                    .map(|reason| format!("No text returned (finish reason {})", reason))
            })
            .unwrap_or_else(|| "No candidates returned".to_string());

        Err(CopilotError::Generation(reason))
    }
}

// Transport errors render their URL; keep endpoints out of user-facing text.
fn redact_url(e: reqwest::Error) -> CopilotError {
    CopilotError::Http(e.without_url())
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        self.generate_content(prompt).await
    }
}
