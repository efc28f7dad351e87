//! Mock advisor adapter for offline use.
//!
//! Returns canned narratives built from the figures it is given; no API calls.

use crate::domain::{BusinessProfile, DomainError, Summary};
use crate::ports::AdvisorPort;
use std::time::Duration;
use tracing::info;

/// Mock advisor. Simulates network latency with a configurable delay.
pub struct MockAdvisorAdapter {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
}

impl MockAdvisorAdapter {
    /// Create a new mock adapter with default delay (100ms).
    pub fn new() -> Self {
        Self { delay_ms: 100 }
    }

    pub fn with_delay(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl Default for MockAdvisorAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AdvisorPort for MockAdvisorAdapter {
    fn is_configured(&self) -> bool {
        true
    }

    async fn narrate(
        &self,
        profile: &BusinessProfile,
        summary: &Summary,
    ) -> Result<String, DomainError> {
        info!(business_id = %profile.id, "[MOCK] Simulating advisor narrative");
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        Ok(format!(
            "[MOCK] {} ({}, {}) made a net profit of {:.2} on revenue of {:.2}, \
             a margin of {:.1}% ({}). A real advisor would suggest concrete next steps here.",
            profile.name,
            profile.sector,
            profile.location,
            summary.net_profit,
            summary.revenue,
            summary.margin,
            summary.health_band
        ))
    }

    async fn answer(
        &self,
        question: &str,
        context: Option<(&BusinessProfile, &Summary)>,
    ) -> Result<String, DomainError> {
        info!(question_len = question.len(), "[MOCK] Simulating advisor answer");
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        let about = context
            .map(|(profile, _)| format!(" about {}", profile.name))
            .unwrap_or_default();
        Ok(format!(
            "[MOCK] You asked{}: \"{}\". Configure a real API key for tailored advice.",
            about,
            question.trim()
        ))
    }
}
