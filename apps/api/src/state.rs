use std::sync::Arc;

use crate::llm_client::Oracle;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Inference oracle used for skill extraction and feedback generation.
    /// Held as a trait object so handlers and tests are decoupled from the
    /// concrete HTTP client.
    pub oracle: Arc<dyn Oracle>,
    pub store: ResumeStore,
}
