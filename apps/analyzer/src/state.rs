use std::sync::Arc;

use crate::analysis::Analyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup; model-backed only when an API key is configured.
    pub analyzer: Arc<Analyzer>,
    pub config: Config,
}
