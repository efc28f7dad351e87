//! Narrative advisor gateway. Wraps AdvisorPort with a timeout and a local fallback.
//!
//! `advise` never fails: unconfigured and failed calls are reported through
//! `NarrativeResult` so callers can tell them apart without parsing text.

use crate::domain::{
    ADVISOR_NOT_CONFIGURED, BusinessProfile, DomainError, NarrativeResult, Summary,
};
use crate::ports::AdvisorPort;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

pub const DEFAULT_ADVISOR_TIMEOUT: Duration = Duration::from_secs(15);

pub struct AdvisorService {
    advisor: Arc<dyn AdvisorPort>,
    timeout: Duration,
    currency: String,
}

impl AdvisorService {
    /// # Arguments
    /// * `advisor` - AdvisorPort implementation (OpenAI-compatible, mock)
    /// * `timeout` - Upper bound for one advisor call
    /// * `currency` - Currency label used in the fallback report
    pub fn new(advisor: Arc<dyn AdvisorPort>, timeout: Duration, currency: String) -> Self {
        Self {
            advisor,
            timeout,
            currency,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.advisor.is_configured()
    }

    /// Narrative for an already computed summary. Single attempt, no retries.
    pub async fn advise(&self, profile: &BusinessProfile, summary: &Summary) -> NarrativeResult {
        if !self.advisor.is_configured() {
            info!(business_id = %profile.id, "advisor not configured; skipping narrative");
            return NarrativeResult::Unconfigured(ADVISOR_NOT_CONFIGURED.to_string());
        }

        match self.bounded(self.advisor.narrate(profile, summary)).await {
            Ok(text) => NarrativeResult::Narrative(text),
            Err(e) => {
                warn!(business_id = %profile.id, error = %e, "advisor failed; using basic report");
                NarrativeResult::FallbackUsed(summary.basic_report(&self.currency))
            }
        }
    }

    /// Free-form question. Unlike `advise`, failures are returned to the caller.
    ///
    /// # Errors
    /// `Validation` for a blank question, `AdvisorUnavailable` when unconfigured
    /// or when the call fails.
    pub async fn ask(
        &self,
        question: &str,
        context: Option<(&BusinessProfile, &Summary)>,
    ) -> Result<String, DomainError> {
        if question.trim().is_empty() {
            return Err(DomainError::Validation("question must not be empty".into()));
        }
        if !self.advisor.is_configured() {
            return Err(DomainError::AdvisorUnavailable(
                ADVISOR_NOT_CONFIGURED.to_string(),
            ));
        }
        self.bounded(self.advisor.answer(question.trim(), context))
            .await
    }

    async fn bounded<F>(&self, call: F) -> Result<String, DomainError>
    where
        F: Future<Output = Result<String, DomainError>>,
    {
        tokio::time::timeout(self.timeout, call)
            .await
            .map_err(|_| {
                DomainError::AdvisorUnavailable(format!(
                    "timed out after {} ms",
                    self.timeout.as_millis()
                ))
            })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BusinessId, HealthBand};
    use crate::usecases::test_support::{Script, ScriptedAdvisor};

    fn sample() -> (BusinessProfile, Summary) {
        (
            BusinessProfile {
                id: BusinessId(1),
                name: "Loja A".into(),
                sector: "General".into(),
                location: "Maputo".into(),
            },
            Summary {
                revenue: 1000.0,
                costs: 300.0,
                net_profit: 700.0,
                margin: 70.0,
                health_band: HealthBand::Healthy,
            },
        )
    }

    fn service(port: Arc<ScriptedAdvisor>, timeout: Duration) -> AdvisorService {
        AdvisorService::new(port, timeout, "MT".into())
    }

    #[tokio::test]
    async fn test_unconfigured_makes_no_calls() {
        let port = Arc::new(ScriptedAdvisor::unconfigured());
        let svc = service(Arc::clone(&port), DEFAULT_ADVISOR_TIMEOUT);
        let (profile, summary) = sample();

        let result = svc.advise(&profile, &summary).await;
        assert_eq!(
            result,
            NarrativeResult::Unconfigured(ADVISOR_NOT_CONFIGURED.to_string())
        );
        assert_eq!(port.calls(), 0);
    }

    #[tokio::test]
    async fn test_success_returns_narrative() {
        let port = Arc::new(ScriptedAdvisor::new(Script::Reply("Keep it up.")));
        let svc = service(Arc::clone(&port), DEFAULT_ADVISOR_TIMEOUT);
        let (profile, summary) = sample();

        let result = svc.advise(&profile, &summary).await;
        assert_eq!(result, NarrativeResult::Narrative("Keep it up.".into()));
        assert_eq!(port.calls(), 1);
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_summary_figures() {
        let port = Arc::new(ScriptedAdvisor::new(Script::Fail));
        let svc = service(Arc::clone(&port), DEFAULT_ADVISOR_TIMEOUT);
        let (profile, summary) = sample();

        let result = svc.advise(&profile, &summary).await;
        assert_eq!(
            result,
            NarrativeResult::FallbackUsed(summary.basic_report("MT"))
        );
        assert_eq!(port.calls(), 1);
    }

    #[tokio::test]
    async fn test_timeout_falls_back_without_error() {
        let port = Arc::new(ScriptedAdvisor::new(Script::Stall(Duration::from_secs(10))));
        let svc = service(Arc::clone(&port), Duration::from_millis(50));
        let (profile, summary) = sample();

        let result = svc.advise(&profile, &summary).await;
        match result {
            NarrativeResult::FallbackUsed(text) => {
                assert!(text.contains(&format!("{:.2}", summary.net_profit)));
                assert!(text.contains(&format!("{:.1}%", summary.margin)));
            }
            other => panic!("expected fallback, got {:?}", other),
        }
        assert_eq!(port.calls(), 1);
    }

    #[tokio::test]
    async fn test_ask_validation_and_unconfigured() {
        let port = Arc::new(ScriptedAdvisor::new(Script::Reply("yes")));
        let svc = service(Arc::clone(&port), DEFAULT_ADVISOR_TIMEOUT);
        assert!(matches!(
            svc.ask("   ", None).await,
            Err(DomainError::Validation(_))
        ));
        assert_eq!(port.calls(), 0);

        let unconfigured = Arc::new(ScriptedAdvisor::unconfigured());
        let svc = service(Arc::clone(&unconfigured), DEFAULT_ADVISOR_TIMEOUT);
        assert!(matches!(
            svc.ask("Should I expand?", None).await,
            Err(DomainError::AdvisorUnavailable(_))
        ));
        assert_eq!(unconfigured.calls(), 0);
    }

    #[tokio::test]
    async fn test_ask_surfaces_failures() {
        let port = Arc::new(ScriptedAdvisor::new(Script::Fail));
        let svc = service(port, DEFAULT_ADVISOR_TIMEOUT);
        assert!(matches!(
            svc.ask("Should I expand?", None).await,
            Err(DomainError::AdvisorUnavailable(_))
        ));
    }
}
