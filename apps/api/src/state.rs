use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmGateway;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; cloned per request.
#[derive(Clone)]
pub struct AppState {
    /// The only path to the completion API. `LlmClient` in production, stubs in tests.
    pub llm: Arc<dyn LlmGateway>,
    pub config: Config,
}
