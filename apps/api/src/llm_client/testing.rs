//! Gateway doubles for unit and router tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{CompletionRequest, LlmError, LlmGateway};

enum Behaviour {
    Reply(String),
    Fail,
    Unconfigured,
    Forbidden,
}

/// Scriptable gateway that counts calls and records every prompt it sees.
pub struct StubGateway {
    behaviour: Behaviour,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl StubGateway {
    fn with(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Always answers with `text`.
    pub fn reply(text: impl Into<String>) -> Self {
        Self::with(Behaviour::Reply(text.into()))
    }

    /// Always fails as if the upstream returned a 503.
    pub fn failing() -> Self {
        Self::with(Behaviour::Fail)
    }

    /// Reports no credential; must never be called.
    pub fn unconfigured() -> Self {
        Self::with(Behaviour::Unconfigured)
    }

    /// Configured, but panics if a call reaches it.
    pub fn forbidden() -> Self {
        Self::with(Behaviour::Forbidden)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// User-message content of every request received, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for StubGateway {
    fn is_configured(&self) -> bool {
        !matches!(self.behaviour, Behaviour::Unconfigured)
    }

    fn model(&self) -> &str {
        "stub-model"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(last) = request.messages.last() {
            self.prompts.lock().unwrap().push(last.content.clone());
        }
        match &self.behaviour {
            Behaviour::Reply(text) => Ok(text.clone()),
            Behaviour::Fail => Err(LlmError::Api {
                status: 503,
                message: "upstream unavailable".to_string(),
            }),
            Behaviour::Unconfigured => panic!("unconfigured gateway was called"),
            Behaviour::Forbidden => panic!("gateway must not be called here"),
        }
    }
}
