//! henry: business ledger with financial summaries and LLM narrative advice, Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
