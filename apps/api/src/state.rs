use std::sync::Arc;

use crate::planning::extractor::JobExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup and shared read-only across requests.
    pub extractor: Arc<dyn JobExtractor>,
}
