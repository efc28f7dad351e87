//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/UI types here. Adapters and use cases map to and from these.

use crate::domain::DomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_BUSINESS_NAME: &str = "My Business";
pub const DEFAULT_SECTOR: &str = "General";
pub const DEFAULT_LOCATION: &str = "Maputo";
pub const DEFAULT_CATEGORY: &str = "other";

/// Opaque business identifier. Assigned by the ledger, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusinessId(pub u64);

impl fmt::Display for BusinessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for BusinessId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(BusinessId)
            .map_err(|_| DomainError::Validation(format!("'{}' is not a business id", s.trim())))
    }
}

/// Process-wide transaction identifier. Strictly increasing across all businesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub u64);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Sale,
    Cost,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Sale => "sale",
            TransactionKind::Cost => "cost",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set: anything other than sale/cost is rejected instead of silently
/// dropped from both aggregation buckets. `venda`/`custo` are accepted as aliases.
impl FromStr for TransactionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sale" | "venda" => Ok(TransactionKind::Sale),
            "cost" | "custo" => Ok(TransactionKind::Cost),
            other => Err(DomainError::Validation(format!(
                "unknown transaction kind '{}' (expected sale or cost)",
                other
            ))),
        }
    }
}

/// Parse a user-entered amount. Empty input means 0; negative, NaN and
/// infinite values are rejected.
pub fn parse_amount(raw: &str) -> Result<f64, DomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| DomainError::Validation(format!("'{}' is not a number", trimmed)))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(DomainError::Validation(format!(
            "amount must be a non-negative number, got {}",
            trimmed
        )));
    }
    Ok(amount)
}

/// A single dated monetary event owned by one business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub business_id: BusinessId,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: String,
    pub description: String,
    pub recorded_at: DateTime<Utc>,
}

/// A tracked business with its append-only transaction history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Business {
    pub id: BusinessId,
    pub name: String,
    pub sector: String,
    pub location: String,
    pub transactions: Vec<Transaction>,
    pub created_at: DateTime<Utc>,
}

impl Business {
    pub fn total_transactions(&self) -> usize {
        self.transactions.len()
    }

    pub fn profile(&self) -> BusinessProfile {
        BusinessProfile {
            id: self.id,
            name: self.name.clone(),
            sector: self.sector.clone(),
            location: self.location.clone(),
        }
    }

    pub fn listing(&self) -> BusinessListing {
        BusinessListing {
            id: self.id,
            name: self.name.clone(),
            sector: self.sector.clone(),
            transaction_count: self.transactions.len(),
        }
    }
}

/// Business metadata handed to the narrative advisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub id: BusinessId,
    pub name: String,
    pub sector: String,
    pub location: String,
}

/// Row of `list_businesses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessListing {
    pub id: BusinessId,
    pub name: String,
    pub sector: String,
    pub transaction_count: usize,
}

/// Input for creating a business. Missing or blank fields fall back to defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewBusiness {
    pub name: Option<String>,
    pub sector: Option<String>,
    pub location: Option<String>,
}

impl NewBusiness {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Input for appending a transaction. Already typed; see `parse_amount` and
/// `TransactionKind::from_str` for the raw-text boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTransaction {
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: Option<String>,
    pub description: Option<String>,
}

impl NewTransaction {
    pub fn sale(amount: f64) -> Self {
        Self {
            amount,
            kind: TransactionKind::Sale,
            category: None,
            description: None,
        }
    }

    pub fn cost(amount: f64) -> Self {
        Self {
            amount,
            kind: TransactionKind::Cost,
            category: None,
            description: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Returns `value` trimmed, or `default` when missing or blank.
pub fn or_default(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parsing() {
        assert_eq!("sale".parse::<TransactionKind>().unwrap(), TransactionKind::Sale);
        assert_eq!(" COST ".parse::<TransactionKind>().unwrap(), TransactionKind::Cost);
        assert_eq!("venda".parse::<TransactionKind>().unwrap(), TransactionKind::Sale);
        assert_eq!("custo".parse::<TransactionKind>().unwrap(), TransactionKind::Cost);
        assert!(matches!(
            "transfer".parse::<TransactionKind>(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1500.50").unwrap(), 1500.5);
        assert_eq!(parse_amount("  ").unwrap(), 0.0);
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("-10").is_err());
        assert!(parse_amount("NaN").is_err());
        assert!(parse_amount("inf").is_err());
    }

    #[test]
    fn test_business_id_parsing() {
        assert_eq!("42".parse::<BusinessId>().unwrap(), BusinessId(42));
        assert!("loja".parse::<BusinessId>().is_err());
        assert_eq!(BusinessId(7).to_string(), "7");
    }

    #[test]
    fn test_or_default() {
        assert_eq!(or_default(None, DEFAULT_SECTOR), "General");
        assert_eq!(or_default(Some("   ".into()), DEFAULT_SECTOR), "General");
        assert_eq!(or_default(Some(" Retail ".into()), DEFAULT_SECTOR), "Retail");
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&TransactionKind::Sale).unwrap();
        assert_eq!(json, "\"sale\"");
    }
}
