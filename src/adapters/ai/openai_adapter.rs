//! OpenAI-compatible adapter for the narrative advisor.
//!
//! Defaults target DeepSeek's chat completions endpoint; any OpenAI-compatible
//! API (OpenAI, Azure OpenAI, Ollama) works by changing the URL and model.

use crate::adapters::ai::prompt;
use crate::domain::{BusinessProfile, DomainError, Summary};
use crate::ports::AdvisorPort;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_MAX_TOKENS: u32 = 800;

/// OpenAI-compatible advisor adapter.
///
/// Without an API key the adapter reports itself unconfigured and never
/// touches the network.
pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    model: String,
    temperature: f32,
    max_tokens: u32,
    currency: String,
}

impl OpenAiAdapter {
    /// Create a new adapter.
    ///
    /// # Arguments
    /// * `api_url` - Chat completions endpoint (e.g. "https://api.deepseek.com/v1/chat/completions")
    /// * `api_key` - Bearer credential; `None` or empty leaves the adapter unconfigured
    /// * `model` - Model name (e.g. "deepseek-chat", "gpt-4o-mini")
    pub fn new(api_url: String, api_key: Option<String>, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            currency: "MT".to_string(),
        }
    }

    /// Bound every request (connect + response) by `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "failed to build HTTP client with timeout; using defaults");
                reqwest::Client::new()
            });
        self
    }

    pub fn with_generation(mut self, temperature: f32, max_tokens: u32) -> Self {
        self.temperature = temperature;
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    fn build_request(&self, user_prompt: String) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: prompt::system_prompt().to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user_prompt,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    /// Single attempt. Any transport, status or body problem maps to `AdvisorUnavailable`.
    async fn complete(&self, user_prompt: String) -> Result<String, DomainError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| DomainError::AdvisorUnavailable("API key not configured".to_string()))?;

        let request = self.build_request(user_prompt);

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::AdvisorUnavailable(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "advisor API returned error");
            return Err(DomainError::AdvisorUnavailable(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            DomainError::AdvisorUnavailable(format!("Failed to parse API response: {}", e))
        })?;

        let content = first_choice_content(chat_response)?;
        debug!(content_len = content.len(), "received advisor response");
        Ok(content)
    }
}

/// Extract the first choice's text. Missing or blank content is an error.
fn first_choice_content(response: ChatResponse) -> Result<String, DomainError> {
    let choice = response.choices.into_iter().next().ok_or_else(|| {
        DomainError::AdvisorUnavailable("No response choices returned".to_string())
    })?;
    choice
        .message
        .content
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .ok_or_else(|| DomainError::AdvisorUnavailable("First choice has empty content".to_string()))
}

/// OpenAI API request structure.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// OpenAI API response structure.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: Option<String>,
}

#[async_trait::async_trait]
impl AdvisorPort for OpenAiAdapter {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn narrate(
        &self,
        profile: &BusinessProfile,
        summary: &Summary,
    ) -> Result<String, DomainError> {
        info!(
            business_id = %profile.id,
            model = %self.model,
            "requesting narrative from advisor"
        );
        let narrative = self
            .complete(prompt::narrate_prompt(profile, summary, &self.currency))
            .await?;
        info!(business_id = %profile.id, narrative_len = narrative.len(), "narrative received");
        Ok(narrative)
    }

    async fn answer(
        &self,
        question: &str,
        context: Option<(&BusinessProfile, &Summary)>,
    ) -> Result<String, DomainError> {
        info!(
            question_len = question.len(),
            with_context = context.is_some(),
            "sending question to advisor"
        );
        self.complete(prompt::question_prompt(question, context, &self.currency))
            .await
    }
}
