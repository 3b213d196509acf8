mod analysis;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::analysis::provider::ReasoningProvider;
use crate::analysis::{Analyzer, ClaudeProvider, ModelInvocationAdapter};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging (RUST_LOG is a full filter; default: analyzer=info)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_log_filter())))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Analyzer API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize reasoning provider (absent key → heuristic-only mode)
    let provider: Option<Arc<dyn ReasoningProvider>> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone(), config.analysis_model.clone(), config.model_timeout)?;
            info!("LLM client initialized (model: {})", llm.model());
            Some(Arc::new(ClaudeProvider(llm)))
        }
        None => {
            warn!("ANTHROPIC_API_KEY not set; every analysis uses the heuristic classifier");
            None
        }
    };

    let adapter = ModelInvocationAdapter::new(provider, config.model_timeout);
    info!(
        "Analysis adapter ready (timeout: {:?}, max batch: {}, max upload: {} bytes)",
        config.model_timeout, config.max_batch_size, config.max_upload_bytes
    );

    // Build app state
    let state = AppState {
        analyzer: Arc::new(Analyzer::new(adapter)),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client's host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Filter used when `RUST_LOG` is unset: this crate's target at info.
fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}
