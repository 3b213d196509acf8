//! Model Invocation Adapter: the success/fallback boundary around the
//! reasoning provider.
//!
//! Flow: provider configured? → one bounded call → validate() → result.
//! Any failure on that path (transport, API status, timeout, contract
//! violation) is logged and answered by the heuristic classifier instead.
//! The returned type is the same either way; only the logs record the path.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::analysis::contract::{check_consistency, json_schema, validate, AnalysisResult};
use crate::analysis::heuristic;
use crate::analysis::provider::{ProviderFailure, ReasoningProvider};
use crate::errors::AnalysisError;

/// Ceiling on a single provider call.
pub const DEFAULT_MODEL_TIMEOUT: Duration = Duration::from_secs(60);

pub struct ModelInvocationAdapter {
    provider: Option<Arc<dyn ReasoningProvider>>,
    schema: Value,
    timeout: Duration,
}

impl ModelInvocationAdapter {
    /// `provider = None` means no model is configured: every call goes
    /// straight to the heuristic classifier.
    pub fn new(provider: Option<Arc<dyn ReasoningProvider>>, timeout: Duration) -> Self {
        Self {
            provider,
            schema: json_schema(),
            timeout,
        }
    }

    pub fn is_model_backed(&self) -> bool {
        self.provider.is_some()
    }

    /// Returns a contract-valid analysis. Only a defect in the heuristic path
    /// itself can produce an error.
    pub async fn invoke(
        &self,
        prompt: &str,
        resume_text: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        let Some(provider) = self.provider.as_deref() else {
            info!(
                path = "heuristic",
                reason = "unconfigured",
                "No reasoning provider configured; using heuristic classifier"
            );
            return self.fallback(resume_text);
        };

        match self.call_model(provider, prompt).await {
            Ok(result) => {
                info!(
                    path = "model",
                    provider = provider.name(),
                    overall_score = result.overall_score,
                    "Analysis produced by reasoning provider"
                );
                Ok(result)
            }
            Err(failure) => {
                warn!(
                    path = "heuristic",
                    provider = provider.name(),
                    reason = failure.kind(),
                    error = %failure,
                    "Reasoning provider failed; falling back to heuristic classifier"
                );
                self.fallback(resume_text)
            }
        }
    }

    async fn call_model(
        &self,
        provider: &dyn ReasoningProvider,
        prompt: &str,
    ) -> Result<AnalysisResult, ProviderFailure> {
        let raw = tokio::time::timeout(self.timeout, provider.generate(prompt, &self.schema))
            .await
            .map_err(|_| ProviderFailure::Timeout(self.timeout))??;

        let result = validate(&raw).inspect_err(|e| {
            debug!(fields = ?e.fields(), "Model output rejected by contract");
        })?;

        for warning in check_consistency(&result) {
            warn!(
                provider = provider.name(),
                "Model output is inconsistent (accepted): {warning}"
            );
        }

        Ok(result)
    }

    /// Heuristic path. Its output is validated like any other producer's; a
    /// violation here is a defect in the templates, not a provider problem.
    fn fallback(&self, resume_text: &str) -> Result<AnalysisResult, AnalysisError> {
        let result = heuristic::classify(resume_text);

        let json = serde_json::to_value(&result).map_err(|e| {
            AnalysisError::InternalFailure(format!("failed to serialize heuristic result: {e}"))
        })?;

        validate(&json).map_err(|e| {
            error!("Heuristic classifier produced a contract-invalid result: {e}");
            AnalysisError::InternalFailure(format!("heuristic result violated the contract: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::analysis::contract::HiringRecommendation;
    use crate::analysis::heuristic::templates::entry_template;
    use crate::llm_client::LlmError;

    const SENIOR_TEXT: &str = "Senior Software Engineer with 12+ years at Google";

    enum Behavior {
        Respond(Value),
        Fail,
        Hang,
    }

    struct FakeProvider {
        behavior: Behavior,
        calls: AtomicUsize,
    }

    impl FakeProvider {
        fn new(behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                behavior,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ReasoningProvider for FakeProvider {
        fn name(&self) -> &str {
            "fake"
        }

        async fn generate(&self, _prompt: &str, schema: &Value) -> Result<Value, ProviderFailure> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(schema["type"], "object", "adapter must pass the contract schema");
            match &self.behavior {
                Behavior::Respond(value) => Ok(value.clone()),
                Behavior::Fail => Err(ProviderFailure::Llm(LlmError::Api {
                    status: 500,
                    message: "upstream exploded".to_string(),
                })),
                Behavior::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok(json!({}))
                }
            }
        }
    }

    fn model_answer() -> AnalysisResult {
        let mut answer = entry_template();
        answer.summary = "Model-written summary".to_string();
        answer.overall_score = 64;
        answer
    }

    fn adapter_with(provider: Arc<FakeProvider>) -> ModelInvocationAdapter {
        ModelInvocationAdapter::new(Some(provider), DEFAULT_MODEL_TIMEOUT)
    }

    #[tokio::test]
    async fn test_valid_model_output_is_returned() {
        let answer = model_answer();
        let provider = FakeProvider::new(Behavior::Respond(serde_json::to_value(&answer).unwrap()));
        let adapter = adapter_with(provider.clone());

        let result = adapter.invoke("prompt", SENIOR_TEXT).await.unwrap();
        assert_eq!(result, answer);
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_inconsistent_but_valid_model_output_is_accepted() {
        let mut answer = model_answer();
        answer.hiring_recommendation = HiringRecommendation::StrongHire;
        let provider = FakeProvider::new(Behavior::Respond(serde_json::to_value(&answer).unwrap()));

        let result = adapter_with(provider).invoke("prompt", SENIOR_TEXT).await.unwrap();
        assert_eq!(result.hiring_recommendation, HiringRecommendation::StrongHire);
        assert_eq!(result.overall_score, 64);
    }

    #[tokio::test]
    async fn test_provider_error_falls_back_without_retry() {
        let provider = FakeProvider::new(Behavior::Fail);
        let adapter = adapter_with(provider.clone());

        let result = adapter.invoke("prompt", SENIOR_TEXT).await.unwrap();
        assert_eq!(result, heuristic::classify(SENIOR_TEXT));
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_contract_invalid_output_falls_back() {
        let mut bad = serde_json::to_value(model_answer()).unwrap();
        bad["hiringRecommendation"] = json!("Probably");
        bad["competencyScores"]["technical"] = json!(250);
        let provider = FakeProvider::new(Behavior::Respond(bad));

        let result = adapter_with(provider).invoke("prompt", SENIOR_TEXT).await.unwrap();
        assert_eq!(result, heuristic::classify(SENIOR_TEXT));
        assert_eq!(result.hiring_recommendation, HiringRecommendation::StrongHire);
    }

    #[tokio::test]
    async fn test_non_object_output_falls_back() {
        let provider = FakeProvider::new(Behavior::Respond(json!("sorry, I can't")));
        let result = adapter_with(provider).invoke("prompt", "Junior Developer").await.unwrap();
        assert_eq!(result, heuristic::classify("Junior Developer"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_falls_back() {
        let provider = FakeProvider::new(Behavior::Hang);
        let adapter = adapter_with(provider.clone());

        let started = tokio::time::Instant::now();
        let result = adapter.invoke("prompt", SENIOR_TEXT).await.unwrap();

        assert_eq!(result, heuristic::classify(SENIOR_TEXT));
        assert_eq!(provider.calls(), 1);
        assert!(started.elapsed() >= DEFAULT_MODEL_TIMEOUT);
        assert!(started.elapsed() < Duration::from_secs(3600));
    }

    #[tokio::test]
    async fn test_unconfigured_provider_short_circuits_to_heuristic() {
        let adapter = ModelInvocationAdapter::new(None, DEFAULT_MODEL_TIMEOUT);
        assert!(!adapter.is_model_backed());

        let result = adapter.invoke("prompt", SENIOR_TEXT).await.unwrap();
        assert_eq!(result, heuristic::classify(SENIOR_TEXT));
    }

    #[tokio::test]
    async fn test_fallback_output_always_validates() {
        let adapter = ModelInvocationAdapter::new(None, DEFAULT_MODEL_TIMEOUT);
        for text in ["", "Junior Developer", "Lead Engineer", "Backend Engineer"] {
            let result = adapter.invoke("prompt", text).await.unwrap();
            let json = serde_json::to_value(&result).unwrap();
            assert!(validate(&json).is_ok(), "{text}");
        }
    }
}
