//! AI adapter module. Implements AdvisorPort for LLM integration.
//!
//! Provides an OpenAI-compatible adapter and a mock adapter for offline use.

pub mod mock_adapter;
pub mod openai_adapter;
pub mod prompt;

pub use mock_adapter::MockAdvisorAdapter;
pub use openai_adapter::OpenAiAdapter;
