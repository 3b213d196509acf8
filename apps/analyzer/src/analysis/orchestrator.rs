//! Orchestrator: the single entry point for resume analysis.
//!
//! Flow: validate request → build_analysis_prompt → adapter.invoke → caller.
//! No business logic lives here; the result is returned verbatim.

use tracing::{debug, info_span, Instrument};
use uuid::Uuid;

use crate::analysis::adapter::ModelInvocationAdapter;
use crate::analysis::contract::AnalysisResult;
use crate::analysis::prompts::build_analysis_prompt;
use crate::errors::AnalysisError;

/// Stateless across requests; share one instance behind an `Arc`.
pub struct Analyzer {
    adapter: ModelInvocationAdapter,
}

impl Analyzer {
    pub fn new(adapter: ModelInvocationAdapter) -> Self {
        Self { adapter }
    }

    pub fn is_model_backed(&self) -> bool {
        self.adapter.is_model_backed()
    }

    /// Analyzes already-extracted resume text against a job description.
    ///
    /// Fails only with `InvalidRequest` (either text blank) or, on a defect in
    /// the fallback path, `InternalFailure`.
    pub async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
        custom_requirements: Option<&str>,
    ) -> Result<AnalysisResult, AnalysisError> {
        if resume_text.trim().is_empty() {
            return Err(AnalysisError::InvalidRequest(
                "resume text is required".to_string(),
            ));
        }
        if job_description.trim().is_empty() {
            return Err(AnalysisError::InvalidRequest(
                "job description is required".to_string(),
            ));
        }

        let request_id = Uuid::new_v4();
        async {
            let prompt = build_analysis_prompt(resume_text, job_description, custom_requirements);
            debug!(
                prompt_chars = prompt.len(),
                custom_requirements = custom_requirements.is_some_and(|c| !c.trim().is_empty()),
                "Analysis prompt built"
            );
            self.adapter.invoke(&prompt, resume_text).await
        }
        .instrument(info_span!("analysis", %request_id))
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;
    use serde_json::Value;
    use tokio::task::JoinSet;

    use super::*;
    use crate::analysis::adapter::DEFAULT_MODEL_TIMEOUT;
    use crate::analysis::contract::{validate, HiringRecommendation, SeniorityLevel};
    use crate::analysis::heuristic;
    use crate::analysis::provider::{ProviderFailure, ReasoningProvider};
    use crate::llm_client::LlmError;

    const JD: &str = "Backend engineer, Rust and PostgreSQL, hybrid in Berlin.";

    fn heuristic_analyzer() -> Analyzer {
        Analyzer::new(ModelInvocationAdapter::new(None, DEFAULT_MODEL_TIMEOUT))
    }

    /// Records prompts, then fails so the heuristic answers.
    #[derive(Default)]
    struct RecordingProvider {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ReasoningProvider for RecordingProvider {
        fn name(&self) -> &str {
            "recording"
        }

        async fn generate(&self, prompt: &str, _schema: &Value) -> Result<Value, ProviderFailure> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Err(ProviderFailure::Llm(LlmError::EmptyContent))
        }
    }

    #[tokio::test]
    async fn test_empty_resume_is_invalid_request() {
        let err = heuristic_analyzer().analyze("", "some JD", None).await.unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_empty_job_description_is_invalid_request() {
        let err = heuristic_analyzer()
            .analyze("resume text", "", None)
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidRequest(ref m) if m.contains("job description")));
    }

    #[tokio::test]
    async fn test_whitespace_only_inputs_are_invalid() {
        let analyzer = heuristic_analyzer();
        assert!(analyzer.analyze(" \n\t", JD, None).await.is_err());
        assert!(analyzer.analyze("Rust engineer", "   ", None).await.is_err());
    }

    #[tokio::test]
    async fn test_valid_request_returns_validated_result() {
        let result = heuristic_analyzer()
            .analyze("Senior Software Engineer, 12+ years", JD, None)
            .await
            .unwrap();

        let json = serde_json::to_value(&result).unwrap();
        assert!(validate(&json).is_ok());
        assert!(result.overall_score >= 90);
        assert_eq!(result.hiring_recommendation, HiringRecommendation::StrongHire);
        assert_eq!(
            result.experience_analysis.seniority_level,
            SeniorityLevel::Senior
        );
    }

    #[tokio::test]
    async fn test_provider_failure_never_reaches_caller() {
        let provider = Arc::new(RecordingProvider::default());
        let analyzer = Analyzer::new(ModelInvocationAdapter::new(
            Some(provider.clone()),
            Duration::from_secs(5),
        ));

        let result = analyzer
            .analyze("Junior Software Developer", JD, Some("Must speak German"))
            .await
            .unwrap();

        assert_eq!(result, heuristic::classify("Junior Software Developer"));

        let prompts = provider.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("CUSTOM REQUIREMENTS:\nMust speak German"));
        assert!(prompts[0].contains("JOB DESCRIPTION:\nBackend engineer"));
    }

    #[tokio::test]
    async fn test_invalid_request_skips_the_provider() {
        let provider = Arc::new(RecordingProvider::default());
        let analyzer = Analyzer::new(ModelInvocationAdapter::new(
            Some(provider.clone()),
            DEFAULT_MODEL_TIMEOUT,
        ));

        assert!(analyzer.analyze("", JD, None).await.is_err());
        assert!(provider.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_requests_are_independent() {
        let analyzer = Arc::new(heuristic_analyzer());
        let inputs = [
            "Lead Engineer at Amazon",
            "Junior Developer",
            "Backend Engineer",
        ];

        let mut set = JoinSet::new();
        for round in 0..10 {
            for (i, &text) in inputs.iter().enumerate() {
                let analyzer = analyzer.clone();
                set.spawn(async move {
                    let result = analyzer.analyze(text, JD, None).await.unwrap();
                    (round, i, result)
                });
            }
        }

        while let Some(joined) = set.join_next().await {
            let (_, i, result) = joined.unwrap();
            assert_eq!(result, heuristic::classify(inputs[i]));
        }
    }
}
