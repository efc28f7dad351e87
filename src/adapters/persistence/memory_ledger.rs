//! Implements LedgerPort in process memory.
//!
//! All state (businesses and both id counters) sits behind one RwLock, so
//! mutations are serialized and id assignment cannot race. Nothing survives a restart.

use crate::domain::entities::{
    DEFAULT_BUSINESS_NAME, DEFAULT_CATEGORY, DEFAULT_LOCATION, DEFAULT_SECTOR, or_default,
};
use crate::domain::{
    Business, BusinessId, BusinessListing, DomainError, NewBusiness, NewTransaction,
    Transaction, TransactionId,
};
use crate::ports::LedgerPort;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Guarded state. Ids are monotonic, so BTreeMap key order is insertion order.
#[derive(Debug)]
struct LedgerState {
    businesses: BTreeMap<BusinessId, Business>,
    next_business_id: u64,
    next_transaction_id: u64,
}

impl Default for LedgerState {
    fn default() -> Self {
        Self {
            businesses: BTreeMap::new(),
            next_business_id: 1,
            next_transaction_id: 1,
        }
    }
}

/// In-memory ledger store.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    state: RwLock<LedgerState>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl LedgerPort for MemoryLedger {
    async fn create_business(&self, input: NewBusiness) -> Result<Business, DomainError> {
        let mut state = self.state.write().await;
        let id = BusinessId(state.next_business_id);
        state.next_business_id += 1;

        let business = Business {
            id,
            name: or_default(input.name, DEFAULT_BUSINESS_NAME),
            sector: or_default(input.sector, DEFAULT_SECTOR),
            location: or_default(input.location, DEFAULT_LOCATION),
            transactions: Vec::new(),
            created_at: Utc::now(),
        };
        state.businesses.insert(id, business.clone());
        debug!(business_id = %id, "business stored");
        Ok(business)
    }

    async fn append_transaction(
        &self,
        business_id: BusinessId,
        input: NewTransaction,
    ) -> Result<Transaction, DomainError> {
        if !input.amount.is_finite() || input.amount < 0.0 {
            return Err(DomainError::Validation(format!(
                "amount must be a non-negative number, got {}",
                input.amount
            )));
        }

        let mut state = self.state.write().await;
        let LedgerState {
            businesses,
            next_transaction_id,
            ..
        } = &mut *state;
        let business = businesses
            .get_mut(&business_id)
            .ok_or(DomainError::NotFound(business_id))?;

        let transaction = Transaction {
            id: TransactionId(*next_transaction_id),
            business_id,
            amount: input.amount,
            kind: input.kind,
            category: or_default(input.category, DEFAULT_CATEGORY),
            description: input
                .description
                .map(|d| d.trim().to_string())
                .unwrap_or_default(),
            recorded_at: Utc::now(),
        };
        *next_transaction_id += 1;
        business.transactions.push(transaction.clone());
        debug!(
            business_id = %business_id,
            transaction_id = %transaction.id,
            "transaction stored"
        );
        Ok(transaction)
    }

    async fn get_business(&self, business_id: BusinessId) -> Result<Business, DomainError> {
        let state = self.state.read().await;
        state
            .businesses
            .get(&business_id)
            .cloned()
            .ok_or(DomainError::NotFound(business_id))
    }

    async fn list_businesses(&self) -> Result<Vec<BusinessListing>, DomainError> {
        let state = self.state.read().await;
        Ok(state.businesses.values().map(Business::listing).collect())
    }

    async fn business_count(&self) -> Result<usize, DomainError> {
        Ok(self.state.read().await.businesses.len())
    }
}
