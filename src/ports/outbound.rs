//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{
    Business, BusinessId, BusinessListing, BusinessProfile, DomainError, NewBusiness,
    NewTransaction, Summary, Transaction,
};

/// Ledger store. Owns businesses and their transactions for the process lifetime.
///
/// Implementations must serialize mutations: two concurrent appends never
/// receive the same transaction id. Reads return owned snapshots so callers
/// never hold the store while doing slow work.
#[async_trait::async_trait]
pub trait LedgerPort: Send + Sync {
    /// Register a business. Missing fields are defaulted; always succeeds.
    async fn create_business(&self, input: NewBusiness) -> Result<Business, DomainError>;

    /// Append a transaction to an existing business and assign the next global id.
    ///
    /// # Errors
    /// `NotFound` for an unknown business, `Validation` for a negative or
    /// non-finite amount.
    async fn append_transaction(
        &self,
        business_id: BusinessId,
        input: NewTransaction,
    ) -> Result<Transaction, DomainError>;

    async fn get_business(&self, business_id: BusinessId) -> Result<Business, DomainError>;

    /// Snapshot of all businesses in insertion order.
    async fn list_businesses(&self) -> Result<Vec<BusinessListing>, DomainError>;

    async fn business_count(&self) -> Result<usize, DomainError>;
}

/// Narrative advisor. External text-generation collaborator.
#[async_trait::async_trait]
pub trait AdvisorPort: Send + Sync {
    /// False when no credential is available. Callers must not invoke the
    /// other methods in that case.
    fn is_configured(&self) -> bool;

    /// Commentary on a computed summary.
    async fn narrate(
        &self,
        profile: &BusinessProfile,
        summary: &Summary,
    ) -> Result<String, DomainError>;

    /// Answer a free-form question, optionally with a business's figures as context.
    async fn answer(
        &self,
        question: &str,
        context: Option<(&BusinessProfile, &Summary)>,
    ) -> Result<String, DomainError>;
}
