//! Scripted AdvisorPort for use-case tests.

use crate::domain::{BusinessProfile, DomainError, Summary};
use crate::ports::AdvisorPort;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Clone)]
pub enum Script {
    Reply(&'static str),
    Fail,
    Stall(Duration),
}

/// Counts calls and answers according to its script.
pub struct ScriptedAdvisor {
    configured: bool,
    script: Script,
    calls: AtomicUsize,
    calls_with_context: AtomicUsize,
}

impl ScriptedAdvisor {
    pub fn new(script: Script) -> Self {
        Self {
            configured: true,
            script,
            calls: AtomicUsize::new(0),
            calls_with_context: AtomicUsize::new(0),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            script: Script::Reply("should never be returned"),
            calls: AtomicUsize::new(0),
            calls_with_context: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// `answer` calls that carried business context.
    pub fn calls_with_context(&self) -> usize {
        self.calls_with_context.load(Ordering::SeqCst)
    }

    async fn run(&self) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::Reply(text) => Ok(text.to_string()),
            Script::Fail => Err(DomainError::AdvisorUnavailable("connection refused".into())),
            Script::Stall(d) => {
                tokio::time::sleep(*d).await;
                Ok("too late".to_string())
            }
        }
    }
}

#[async_trait::async_trait]
impl AdvisorPort for ScriptedAdvisor {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn narrate(
        &self,
        _profile: &BusinessProfile,
        _summary: &Summary,
    ) -> Result<String, DomainError> {
        self.run().await
    }

    async fn answer(
        &self,
        _question: &str,
        context: Option<(&BusinessProfile, &Summary)>,
    ) -> Result<String, DomainError> {
        if context.is_some() {
            self.calls_with_context.fetch_add(1, Ordering::SeqCst);
        }
        self.run().await
    }
}
