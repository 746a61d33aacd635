use std::sync::Arc;

use crate::generation::store::GenerationStore;
use crate::llm_client::ChatCompletion;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Inference backend. Production: `LlmClient`; tests swap in a stub.
    pub llm: Arc<dyn ChatCompletion>,
    /// Latest output per submission, for regenerate and download.
    pub store: GenerationStore,
}
