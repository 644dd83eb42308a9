//! Axum route handlers for the matching API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::ingest::{ResumeSource, ResumeUpload};
use crate::matching::preprocess::keyword_set;
use crate::matching::MatchedJob;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExplainMatchRequest {
    #[serde(flatten)]
    pub resume: ResumeUpload,
    pub job_description_text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainMatchResponse {
    pub matching_keywords: Vec<String>,
}

/// POST /match-jobs
///
/// Scores the resume against the job index and returns the top matches in
/// descending score order.
pub async fn handle_match_jobs(
    State(state): State<AppState>,
    Json(request): Json<ResumeUpload>,
) -> Result<Json<Vec<MatchedJob>>, AppError> {
    let source = ResumeSource::from_upload(&request)?;
    let resume_text = source.extract_text()?;

    let matches = state.match_scorer.top_matches(&resume_text, &state.jobs).await?;
    info!("Matched {} jobs against resume", matches.len());

    Ok(Json(matches))
}

/// POST /explain-match
///
/// Explains a match as the sorted set of keywords shared by the resume and
/// one job description.
pub async fn handle_explain_match(
    Json(request): Json<ExplainMatchRequest>,
) -> Result<Json<ExplainMatchResponse>, AppError> {
    let source = ResumeSource::from_upload(&request.resume)?;
    let resume_text = source.extract_text()?;

    let job_description = request
        .job_description_text
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Missing 'job_description_text'".to_string()))?;

    let resume_keywords = keyword_set(&resume_text);
    let job_keywords = keyword_set(job_description);
    let matching_keywords: Vec<String> = resume_keywords
        .intersection(&job_keywords)
        .cloned()
        .collect();

    Ok(Json(ExplainMatchResponse { matching_keywords }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_upload(text: &str) -> ResumeUpload {
        ResumeUpload {
            resume_text: Some(text.to_string()),
            file_base64: None,
            mime_type: None,
        }
    }

    #[tokio::test]
    async fn test_explain_match_returns_sorted_intersection() {
        let request = ExplainMatchRequest {
            resume: text_upload("Senior Rust engineer with Kubernetes and SQL"),
            job_description_text: Some("We need SQL and Kubernetes skills".to_string()),
        };
        let Json(response) = handle_explain_match(Json(request)).await.unwrap();
        assert_eq!(response.matching_keywords, vec!["kubernetes", "sql"]);
    }

    #[tokio::test]
    async fn test_explain_match_with_no_overlap_is_empty() {
        let request = ExplainMatchRequest {
            resume: text_upload("pastry chef"),
            job_description_text: Some("rust developer".to_string()),
        };
        let Json(response) = handle_explain_match(Json(request)).await.unwrap();
        assert!(response.matching_keywords.is_empty());
    }

    #[tokio::test]
    async fn test_explain_match_requires_job_description() {
        let request = ExplainMatchRequest {
            resume: text_upload("rust developer"),
            job_description_text: None,
        };
        let err = handle_explain_match(Json(request)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_explain_match_requires_resume() {
        let request = ExplainMatchRequest {
            resume: ResumeUpload::default(),
            job_description_text: Some("rust developer".to_string()),
        };
        let err = handle_explain_match(Json(request)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_explain_match_deduplicates_keywords() {
        let request = ExplainMatchRequest {
            resume: text_upload("rust rust rust services"),
            job_description_text: Some("rust services services".to_string()),
        };
        let Json(response) = handle_explain_match(Json(request)).await.unwrap();
        assert_eq!(response.matching_keywords, vec!["rust", "services"]);
    }
}
