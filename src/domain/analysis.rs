//! Analysis results produced by the use cases.

use crate::domain::{BusinessId, BusinessProfile, Summary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message returned when no advisor credential is configured.
pub const ADVISOR_NOT_CONFIGURED: &str =
    "AI advisor not configured: set HENRY_AI_API_KEY (or DEEPSEEK_API_KEY) to enable it";

/// Outcome of asking the narrative advisor about a summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum NarrativeResult {
    /// Advisor replied.
    Narrative(String),
    /// No credential configured; no call was attempted.
    Unconfigured(String),
    /// Advisor call failed; text is the local basic report.
    FallbackUsed(String),
}

impl NarrativeResult {
    pub fn text(&self) -> &str {
        match self {
            NarrativeResult::Narrative(t)
            | NarrativeResult::Unconfigured(t)
            | NarrativeResult::FallbackUsed(t) => t,
        }
    }

    pub fn is_from_advisor(&self) -> bool {
        matches!(self, NarrativeResult::Narrative(_))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessAnalysis {
    pub profile: BusinessProfile,
    pub total_transactions: usize,
    pub summary: Summary,
    pub narrative: NarrativeResult,
}

/// Reply to a free-form question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    pub question: String,
    pub answer: String,
    /// Business whose figures were used as context, if any.
    pub business_id: Option<BusinessId>,
    pub answered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    pub version: String,
    pub total_businesses: usize,
    pub advisor_configured: bool,
    pub checked_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrative_result_text() {
        let r = NarrativeResult::FallbackUsed("Basic analysis".into());
        assert_eq!(r.text(), "Basic analysis");
        assert!(!r.is_from_advisor());
        assert!(NarrativeResult::Narrative("ok".into()).is_from_advisor());
    }

    #[test]
    fn test_narrative_result_json_tag() {
        let json = serde_json::to_value(NarrativeResult::Unconfigured("x".into())).unwrap();
        assert_eq!(json["status"], "unconfigured");
        assert_eq!(json["text"], "x");
    }
}
