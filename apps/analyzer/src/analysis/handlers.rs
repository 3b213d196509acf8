//! Axum route handlers for the Analysis API.

use std::cmp::Reverse;

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;
use tracing::info;

use crate::analysis::contract::AnalysisResult;
use crate::analysis::extract::{detect_format, extract_resume_text, ResumeFormat};
use crate::errors::{AnalysisError, AppError};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Missing fields default to empty so the orchestrator rejects them with a
/// proper `InvalidRequest` body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub custom_requirements: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchCandidate {
    #[serde(default)]
    pub candidate_id: String,
    #[serde(default)]
    pub resume_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    #[serde(default)]
    pub candidates: Vec<BatchCandidate>,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub custom_requirements: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchEntry {
    pub candidate_id: String,
    /// 1-based position among successful analyses; absent for errored entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub results: Vec<BatchEntry>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let analysis = state
        .analyzer
        .analyze(
            &request.resume_text,
            &request.job_description,
            request.custom_requirements.as_deref(),
        )
        .await?;
    Ok(Json(analysis))
}

/// POST /api/v1/analyze/upload
///
/// Multipart form: `resume` (PDF or plain-text file), `jobDescription`,
/// optional `customRequirements`. Unknown fields are ignored.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let mut resume: Option<(Bytes, ResumeFormat)> = None;
    let mut job_description = String::new();
    let mut custom_requirements: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let format = detect_format(field.file_name(), field.content_type()).ok_or_else(
                    || {
                        AppError::UnprocessableEntity(
                            "unsupported resume file type; upload a PDF or plain-text file"
                                .to_string(),
                        )
                    },
                )?;
                resume = Some((field.bytes().await?, format));
            }
            "jobDescription" => job_description = field.text().await?,
            "customRequirements" => custom_requirements = Some(field.text().await?),
            _ => {}
        }
    }

    let (data, format) =
        resume.ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;
    let resume_text = extract_resume_text(data, format).await?;
    if resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "no text could be extracted from the resume file".to_string(),
        ));
    }

    let analysis = state
        .analyzer
        .analyze(&resume_text, &job_description, custom_requirements.as_deref())
        .await?;
    Ok(Json(analysis))
}

/// POST /api/v1/analyze/batch
///
/// Analyzes several resumes against one job description concurrently and
/// returns them ranked by overall score.
pub async fn handle_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, AppError> {
    if request.candidates.is_empty() {
        return Err(AppError::Validation("candidates cannot be empty".to_string()));
    }
    let max = state.config.max_batch_size;
    if request.candidates.len() > max {
        return Err(AppError::Validation(format!(
            "at most {max} candidates per batch, got {}",
            request.candidates.len()
        )));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation("job description is required".to_string()));
    }

    let candidate_count = request.candidates.len();
    let mut set = JoinSet::new();
    for (index, candidate) in request.candidates.into_iter().enumerate() {
        let analyzer = state.analyzer.clone();
        let job_description = request.job_description.clone();
        let custom_requirements = request.custom_requirements.clone();
        set.spawn(async move {
            let outcome = analyzer
                .analyze(
                    &candidate.resume_text,
                    &job_description,
                    custom_requirements.as_deref(),
                )
                .await;
            (index, candidate.candidate_id, outcome)
        });
    }

    let mut outcomes = Vec::with_capacity(candidate_count);
    while let Some(joined) = set.join_next().await {
        let (index, candidate_id, outcome) = joined
            .map_err(|e| AppError::Internal(anyhow::anyhow!("batch analysis task failed: {e}")))?;
        let entry = match outcome {
            Ok(analysis) => BatchEntry {
                candidate_id,
                rank: None,
                analysis: Some(analysis),
                error: None,
            },
            Err(AnalysisError::InvalidRequest(msg)) => BatchEntry {
                candidate_id,
                rank: None,
                analysis: None,
                error: Some(msg),
            },
            Err(err @ AnalysisError::InternalFailure(_)) => return Err(err.into()),
        };
        outcomes.push((index, entry));
    }

    let results = rank_entries(outcomes);
    info!(
        candidates = candidate_count,
        analyzed = results.iter().filter(|e| e.analysis.is_some()).count(),
        "Batch analysis complete"
    );
    Ok(Json(BatchResponse { results }))
}

/// Orders by overall score descending, errored entries last, ties by
/// submission index; then numbers the successful ones from 1.
fn rank_entries(mut outcomes: Vec<(usize, BatchEntry)>) -> Vec<BatchEntry> {
    outcomes.sort_by_key(|(index, entry)| {
        let score = entry.analysis.as_ref().map(|a| a.overall_score);
        (score.is_none(), Reverse(score), *index)
    });

    outcomes
        .into_iter()
        .enumerate()
        .map(|(position, (_, mut entry))| {
            if entry.analysis.is_some() {
                entry.rank = Some(position + 1);
            }
            entry
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::heuristic::templates::{entry_template, mid_template, senior_template};

    fn ok(id: &str, analysis: AnalysisResult) -> BatchEntry {
        BatchEntry {
            candidate_id: id.to_string(),
            rank: None,
            analysis: Some(analysis),
            error: None,
        }
    }

    fn failed(id: &str) -> BatchEntry {
        BatchEntry {
            candidate_id: id.to_string(),
            rank: None,
            analysis: None,
            error: Some("resume text is required".to_string()),
        }
    }

    fn ids(entries: &[BatchEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.candidate_id.as_str()).collect()
    }

    #[test]
    fn test_rank_orders_by_score_with_errors_last() {
        let ranked = rank_entries(vec![
            (0, failed("empty")),
            (1, ok("junior", entry_template())),
            (2, ok("senior", senior_template())),
            (3, ok("mid", mid_template())),
        ]);

        assert_eq!(ids(&ranked), vec!["senior", "mid", "junior", "empty"]);
        let ranks: Vec<Option<usize>> = ranked.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![Some(1), Some(2), Some(3), None]);
    }

    #[test]
    fn test_rank_ties_keep_submission_order() {
        let ranked = rank_entries(vec![
            (2, ok("c", mid_template())),
            (0, ok("a", mid_template())),
            (1, ok("b", mid_template())),
            (4, failed("e")),
            (3, failed("d")),
        ]);
        assert_eq!(ids(&ranked), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_batch_entry_serializes_camel_case_and_skips_absent_fields() {
        let json = serde_json::to_value(failed("cand-7")).unwrap();
        assert_eq!(json["candidateId"], "cand-7");
        assert!(json.get("analysis").is_none());
        assert!(json.get("rank").is_none());
        assert_eq!(json["error"], "resume text is required");
    }

    #[test]
    fn test_analyze_request_missing_fields_default_to_empty() {
        let request: AnalyzeRequest = serde_json::from_str(r#"{"resumeText":"x"}"#).unwrap();
        assert_eq!(request.resume_text, "x");
        assert!(request.job_description.is_empty());
        assert!(request.custom_requirements.is_none());
    }
}
