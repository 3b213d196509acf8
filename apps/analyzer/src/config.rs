use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_MODEL;

/// Application configuration loaded from environment variables.
/// Every variable has a default; a missing API key selects heuristic-only mode.
#[derive(Debug, Clone)]
pub struct Config {
    /// `None` when unset or blank.
    pub anthropic_api_key: Option<String>,
    pub analysis_model: String,
    pub model_timeout: Duration,
    pub max_upload_bytes: usize,
    pub max_batch_size: usize,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let timeout_secs: u64 = parse_or(&lookup, "MODEL_TIMEOUT_SECS", 60)?;
        let max_batch_size: usize = parse_or(&lookup, "MAX_BATCH_SIZE", 20)?;
        if max_batch_size == 0 {
            anyhow::bail!("MAX_BATCH_SIZE must be at least 1");
        }

        Ok(Config {
            anthropic_api_key: lookup("ANTHROPIC_API_KEY").filter(|k| !k.trim().is_empty()),
            analysis_model: lookup("ANALYSIS_MODEL")
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            model_timeout: Duration::from_secs(timeout_secs),
            max_upload_bytes: parse_or(&lookup, "MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
            max_batch_size,
            port: parse_or(&lookup, "PORT", 8080)?,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
