use std::sync::Arc;

use crate::llm_client::TextCompletion;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; every generation is independent.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Production: `OpenAiClient`. Tests: `FakeCompletion`.
    pub llm: Arc<dyn TextCompletion>,
}
