//! Infrastructure adapters. Implement ports.
//!
//! In-memory ledger, LLM advisor, terminal UI. Map errors to DomainError.

pub mod ai;
pub mod persistence;
pub mod ui;
