//! Reasoning providers: pluggable producers of candidate analysis JSON.
//!
//! Default: `ClaudeProvider` (forced tool call through `LlmClient`).
//! The adapter carries an `Option<Arc<dyn ReasoningProvider>>`, chosen once at
//! startup from config; tests inject fakes.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::analysis::contract::ValidationError;
use crate::analysis::prompts::ANALYSIS_SYSTEM;
use crate::llm_client::{LlmClient, LlmError, ToolSpec};

const ANALYSIS_TOOL_NAME: &str = "record_resume_analysis";
const ANALYSIS_TOOL_DESCRIPTION: &str =
    "Record the complete resume-versus-job-description analysis.";

/// Why the model path did not produce a usable result. Always recovered by
/// the adapter through the heuristic fallback, never shown to callers.
#[derive(Debug, Error)]
pub enum ProviderFailure {
    #[error("provider call failed: {0}")]
    Llm(#[from] LlmError),

    #[error("provider did not answer within {0:?}")]
    Timeout(Duration),

    #[error("provider output violated the analysis contract: {0}")]
    Contract(#[from] ValidationError),
}

impl ProviderFailure {
    /// Short label for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderFailure::Llm(LlmError::Http(e)) if e.is_timeout() => "timeout",
            ProviderFailure::Llm(_) => "provider_error",
            ProviderFailure::Timeout(_) => "timeout",
            ProviderFailure::Contract(_) => "schema_violation",
        }
    }
}

/// The reasoning-provider trait. Implement this to swap model backends without
/// touching the adapter, orchestrator, or handlers.
#[async_trait]
pub trait ReasoningProvider: Send + Sync {
    /// Backend label used in logs.
    fn name(&self) -> &str;

    /// Produces a candidate analysis for `prompt`, shaped by `schema`.
    /// The returned value is unvalidated.
    async fn generate(&self, prompt: &str, schema: &Value) -> Result<Value, ProviderFailure>;
}

/// Claude-backed provider. Structured generation via a forced tool call whose
/// input schema is the analysis contract.
pub struct ClaudeProvider(pub LlmClient);

#[async_trait]
impl ReasoningProvider for ClaudeProvider {
    fn name(&self) -> &str {
        self.0.model()
    }

    async fn generate(&self, prompt: &str, schema: &Value) -> Result<Value, ProviderFailure> {
        let tool = ToolSpec {
            name: ANALYSIS_TOOL_NAME,
            description: ANALYSIS_TOOL_DESCRIPTION,
            input_schema: schema,
        };
        Ok(self.0.call_structured(prompt, ANALYSIS_SYSTEM, &tool).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::contract::SchemaViolation;

    #[test]
    fn test_failure_kinds() {
        assert_eq!(
            ProviderFailure::Timeout(Duration::from_secs(60)).kind(),
            "timeout"
        );
        assert_eq!(
            ProviderFailure::Llm(LlmError::EmptyContent).kind(),
            "provider_error"
        );
        assert_eq!(
            ProviderFailure::Llm(LlmError::Api {
                status: 529,
                message: "overloaded".to_string()
            })
            .kind(),
            "provider_error"
        );
        let contract = ValidationError {
            violations: vec![SchemaViolation {
                field: "summary".to_string(),
                reason: "missing".to_string(),
            }],
        };
        assert_eq!(ProviderFailure::from(contract).kind(), "schema_violation");
    }

    #[test]
    fn test_failure_messages_carry_cause() {
        let err = ProviderFailure::Llm(LlmError::Api {
            status: 401,
            message: "invalid x-api-key".to_string(),
        });
        assert!(err.to_string().contains("invalid x-api-key"));
        assert!(ProviderFailure::Timeout(Duration::from_secs(60))
            .to_string()
            .contains("60s"));
    }
}
