//! Application configuration. Advisor credentials and ledger presentation.

use serde::Deserialize;

pub const DEFAULT_AI_API_URL: &str = "https://api.deepseek.com/v1/chat/completions";
pub const DEFAULT_AI_MODEL: &str = "deepseek-chat";
pub const DEFAULT_AI_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_CURRENCY: &str = "MT";

/// Which AdvisorPort implementation to wire up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiProvider {
    OpenAi,
    Mock,
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // AI Advisor Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// AI API key. Read from HENRY_AI_API_KEY, falling back to DEEPSEEK_API_KEY.
    #[serde(default)]
    pub ai_api_key: Option<String>,

    /// Chat completions URL. Defaults to DeepSeek. Read from HENRY_AI_API_URL.
    #[serde(default)]
    pub ai_api_url: Option<String>,

    /// Model name. Defaults to "deepseek-chat". Read from HENRY_AI_MODEL.
    #[serde(default)]
    pub ai_model: Option<String>,

    /// "openai" (default) or "mock". Read from HENRY_AI_PROVIDER.
    #[serde(default)]
    pub ai_provider: Option<String>,

    /// Upper bound for one advisor call in seconds (default 15). Read from HENRY_AI_TIMEOUT_SECS.
    #[serde(default)]
    pub ai_timeout_secs: Option<u64>,

    /// Token budget per reply (default 800). Read from HENRY_AI_MAX_TOKENS.
    #[serde(default)]
    pub ai_max_tokens: Option<u32>,

    /// Sampling temperature (default 0.3). Read from HENRY_AI_TEMPERATURE.
    #[serde(default)]
    pub ai_temperature: Option<f32>,

    // ─────────────────────────────────────────────────────────────────────────
    // Ledger
    // ─────────────────────────────────────────────────────────────────────────
    /// Currency label shown next to amounts (default "MT"). Read from HENRY_CURRENCY.
    #[serde(default)]
    pub currency: Option<String>,
}

impl AppConfig {
    /// Load from `HENRY_*` environment variables and, if HENRY_CONFIG names a
    /// file, from that file. The credential is captured here, once, at startup.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("HENRY"));
        if let Ok(path) = std::env::var("HENRY_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let cfg: Self = c.build()?.try_deserialize()?;
        // DEEPSEEK_API_KEY is read directly (no HENRY_ prefix) for existing deployments
        Ok(cfg.with_fallback_key(std::env::var("DEEPSEEK_API_KEY").ok()))
    }

    /// Uses `fallback` when the primary key is missing or blank.
    fn with_fallback_key(mut self, fallback: Option<String>) -> Self {
        if self.ai_api_key().is_none() {
            self.ai_api_key = fallback;
        }
        self
    }

    /// Returns the API key if set and non-blank.
    pub fn ai_api_key(&self) -> Option<String> {
        self.ai_api_key
            .as_ref()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }

    /// Returns true if AI is configured (API key present).
    pub fn is_ai_configured(&self) -> bool {
        self.ai_api_key().is_some()
    }

    pub fn ai_api_url_or_default(&self) -> String {
        self.ai_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_AI_API_URL.to_string())
    }

    pub fn ai_model_or_default(&self) -> String {
        self.ai_model
            .clone()
            .unwrap_or_else(|| DEFAULT_AI_MODEL.to_string())
    }

    /// Unknown provider names fall back to the OpenAI-compatible adapter.
    pub fn ai_provider_or_default(&self) -> AiProvider {
        match self.ai_provider.as_deref().map(str::trim) {
            Some(p) if p.eq_ignore_ascii_case("mock") => AiProvider::Mock,
            _ => AiProvider::OpenAi,
        }
    }

    /// Returns advisor timeout in seconds. Zero is treated as unset.
    pub fn ai_timeout_secs_or_default(&self) -> u64 {
        self.ai_timeout_secs
            .filter(|&s| s > 0)
            .unwrap_or(DEFAULT_AI_TIMEOUT_SECS)
    }

    pub fn ai_max_tokens_or_default(&self) -> u32 {
        self.ai_max_tokens
            .unwrap_or(crate::adapters::ai::openai_adapter::DEFAULT_MAX_TOKENS)
    }

    pub fn ai_temperature_or_default(&self) -> f32 {
        self.ai_temperature
            .filter(|t| t.is_finite() && *t >= 0.0)
            .unwrap_or(crate::adapters::ai::openai_adapter::DEFAULT_TEMPERATURE)
    }

    pub fn currency_or_default(&self) -> String {
        self.currency
            .clone()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())
    }
}
