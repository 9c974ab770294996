//! Scripted generator for tests and offline wiring.

use std::{
    sync::atomic::{AtomicUsize, Ordering},
    thread,
    time::Duration,
};

use insight_contracts::{
    error::{InsightError, InsightResult},
    explain::{ExplainRequest, ExplainResponse},
};
use insight_core::ExplanationGenerator;

/// What a `MockGenerator` does on every call.
#[derive(Debug, Clone)]
pub enum MockBehaviour {
    Respond(String),
    Fail(String),
    /// Sleep, then respond. Used to exercise timeouts and stale results.
    Delay(Duration, String),
}

/// Mock generator. Returns a configurable response and counts calls.
#[derive(Debug)]
pub struct MockGenerator {
    behaviour: MockBehaviour,
    calls: AtomicUsize,
}

impl MockGenerator {
    pub fn new(behaviour: MockBehaviour) -> Self {
        Self {
            behaviour,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn responding(text: &str) -> Self {
        Self::new(MockBehaviour::Respond(text.to_string()))
    }

    pub fn failing(reason: &str) -> Self {
        Self::new(MockBehaviour::Fail(reason.to_string()))
    }

    pub fn delayed(delay: Duration, text: &str) -> Self {
        Self::new(MockBehaviour::Delay(delay, text.to_string()))
    }

    /// Number of `generate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ExplanationGenerator for MockGenerator {
    fn generate(&self, _request: &ExplainRequest) -> InsightResult<ExplainResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behaviour {
            MockBehaviour::Respond(text) => Ok(ExplainResponse {
                explanation: text.clone(),
            }),
            MockBehaviour::Fail(reason) => Err(InsightError::ExplanationUnavailable {
                reason: reason.clone(),
            }),
            MockBehaviour::Delay(delay, text) => {
                thread::sleep(*delay);
                Ok(ExplainResponse {
                    explanation: text.clone(),
                })
            }
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
