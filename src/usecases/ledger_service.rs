//! Ledger use cases. Thin orchestration over LedgerPort with logging.

use crate::domain::{
    Business, BusinessId, BusinessListing, DomainError, NewBusiness, NewTransaction, Summary,
    Transaction,
};
use crate::ports::LedgerPort;
use std::sync::Arc;
use tracing::{info, warn};

pub struct LedgerService {
    ledger: Arc<dyn LedgerPort>,
}

impl LedgerService {
    pub fn new(ledger: Arc<dyn LedgerPort>) -> Self {
        Self { ledger }
    }

    pub async fn create_business(&self, input: NewBusiness) -> Result<Business, DomainError> {
        let business = self.ledger.create_business(input).await?;
        info!(
            business_id = %business.id,
            name = %business.name,
            sector = %business.sector,
            "business created"
        );
        Ok(business)
    }

    pub async fn record_transaction(
        &self,
        business_id: BusinessId,
        input: NewTransaction,
    ) -> Result<Transaction, DomainError> {
        let kind = input.kind;
        let amount = input.amount;
        match self.ledger.append_transaction(business_id, input).await {
            Ok(transaction) => {
                info!(
                    business_id = %business_id,
                    transaction_id = %transaction.id,
                    kind = %kind,
                    amount,
                    "transaction recorded"
                );
                Ok(transaction)
            }
            Err(e) => {
                warn!(business_id = %business_id, error = %e, "transaction rejected");
                Err(e)
            }
        }
    }

    pub async fn business(&self, business_id: BusinessId) -> Result<Business, DomainError> {
        self.ledger.get_business(business_id).await
    }

    pub async fn list_businesses(&self) -> Result<Vec<BusinessListing>, DomainError> {
        self.ledger.list_businesses().await
    }

    pub async fn business_count(&self) -> Result<usize, DomainError> {
        self.ledger.business_count().await
    }

    /// Summary of a business's current transactions.
    pub async fn summarize(&self, business_id: BusinessId) -> Result<Summary, DomainError> {
        let business = self.ledger.get_business(business_id).await?;
        Ok(Summary::of(&business))
    }
}
