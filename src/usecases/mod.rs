//! Application use cases. Orchestrate domain logic via ports.

pub mod advisor_service;
pub mod analysis_service;
pub mod ledger_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use advisor_service::AdvisorService;
pub use analysis_service::AnalysisService;
pub use ledger_service::LedgerService;
