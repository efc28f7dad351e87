//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use crate::domain::BusinessId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Business not found: {0}")]
    NotFound(BusinessId),

    /// Malformed amount, transaction kind or question.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Narrative advisor could not answer. `advise` turns this into a local fallback.
    #[error("Advisor unavailable: {0}")]
    AdvisorUnavailable(String),

    #[error("UI error: {0}")]
    Ui(String),
}
