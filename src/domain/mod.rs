//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod analysis;
pub mod entities;
pub mod errors;
pub mod summary;

pub use analysis::{
    ADVISOR_NOT_CONFIGURED, Answer, BusinessAnalysis, NarrativeResult, StatusReport,
};
pub use entities::{
    Business, BusinessId, BusinessListing, BusinessProfile, NewBusiness, NewTransaction,
    Transaction, TransactionId, TransactionKind, parse_amount,
};
pub use errors::DomainError;
pub use summary::{HealthBand, Summary, summarize};
