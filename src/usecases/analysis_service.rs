//! Analysis service. Orchestrates summary computation and advisor commentary.
//!
//! Coordinates between the ledger (data) and the advisor gateway (narrative).
//! The ledger is read into an owned snapshot first, so no store lock is held
//! while the advisor call is in flight.

use crate::domain::{
    Answer, BusinessAnalysis, BusinessId, DomainError, StatusReport, Summary,
};
use crate::usecases::{AdvisorService, LedgerService};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

/// Service for financial analysis.
///
/// Orchestrates the flow:
/// 1. Snapshot the business from the ledger
/// 2. Compute the summary
/// 3. Ask the advisor for a narrative (or fall back to the basic report)
pub struct AnalysisService {
    ledger: Arc<LedgerService>,
    advisor: Arc<AdvisorService>,
}

impl AnalysisService {
    pub fn new(ledger: Arc<LedgerService>, advisor: Arc<AdvisorService>) -> Self {
        Self { ledger, advisor }
    }

    /// Summary plus narrative for one business.
    ///
    /// # Errors
    /// `NotFound` for an unknown business. Advisor problems never fail the analysis.
    pub async fn analyze(&self, business_id: BusinessId) -> Result<BusinessAnalysis, DomainError> {
        let business = self.ledger.business(business_id).await?;
        let summary = Summary::of(&business);
        let profile = business.profile();

        info!(
            business_id = %business_id,
            transactions = business.total_transactions(),
            margin = summary.margin,
            health = %summary.health_band,
            "summary computed"
        );

        let narrative = self.advisor.advise(&profile, &summary).await;

        Ok(BusinessAnalysis {
            profile,
            total_transactions: business.total_transactions(),
            summary,
            narrative,
        })
    }

    /// Free-form question to the advisor. A known `business_id` adds that
    /// business's figures as context; an unknown one is ignored.
    pub async fn ask(
        &self,
        question: &str,
        business_id: Option<BusinessId>,
    ) -> Result<Answer, DomainError> {
        let context = match business_id {
            Some(id) => match self.ledger.business(id).await {
                Ok(business) => Some((business.profile(), Summary::of(&business))),
                Err(DomainError::NotFound(_)) => {
                    info!(business_id = %id, "unknown business; asking without context");
                    None
                }
                Err(e) => return Err(e),
            },
            None => None,
        };

        let answer = self
            .advisor
            .ask(question, context.as_ref().map(|(p, s)| (p, s)))
            .await?;

        Ok(Answer {
            question: question.trim().to_string(),
            answer,
            business_id: context.as_ref().map(|(p, _)| p.id),
            answered_at: Utc::now(),
        })
    }

    pub async fn status(&self) -> Result<StatusReport, DomainError> {
        Ok(StatusReport {
            version: env!("CARGO_PKG_VERSION").to_string(),
            total_businesses: self.ledger.business_count().await?,
            advisor_configured: self.advisor.is_configured(),
            checked_at: Utc::now(),
        })
    }
}
