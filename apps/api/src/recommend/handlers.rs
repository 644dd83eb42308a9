//! Axum route handlers for the upload and recommendation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::ingest;
use crate::recommend::prompts::{build_rag_prompt, build_simple_prompt};
use crate::recommend::retrieval::select_relevant;
use crate::recommend::{parse_model_output, RecommendationResult};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResumeRequest {
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
    pub content_base64: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResumeResponse {
    pub id: String,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub skill_gaps: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadAndRecommendRequest {
    pub file_name: Option<String>,
    pub resume_text: Option<String>,
    pub job_description: Option<String>,
    #[serde(default)]
    pub optimize_resume: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/upload-resume
///
/// Accepts upload metadata and hands back an opaque id. Nothing is persisted;
/// the id exists so the client can reference the upload within a session.
pub async fn handle_upload_resume(
    Json(request): Json<UploadResumeRequest>,
) -> Result<Json<UploadResumeResponse>, AppError> {
    let file_name = request
        .file_name
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| AppError::Validation("Invalid payload".to_string()))?;

    // The content itself is optional, but when present it must decode.
    if let Some(encoded) = request.content_base64.as_deref() {
        ingest::decode(encoded)?;
    }

    Ok(Json(UploadResumeResponse {
        id: Uuid::new_v4().to_string(),
        file_name,
        mime_type: request.mime_type,
    }))
}

/// POST /api/recommendations
///
/// Plain recommendation call: no catalog context, all fields defaulted.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<RecommendationResult>, AppError> {
    let resume_text = request.resume_text.unwrap_or_default();
    let job_description = request.job_description.unwrap_or_default();
    let skill_gaps = request.skill_gaps.unwrap_or_default();

    let prompt = build_simple_prompt(&resume_text, &job_description, &skill_gaps);
    let output = state.llm.complete(&prompt).await?;

    Ok(Json(parse_model_output(&output)))
}

/// POST /api/upload-and-recommend
///
/// Catalog-grounded recommendation call: relevance-filters the catalog into
/// the prompt and optionally asks for ATS optimization output.
pub async fn handle_upload_and_recommend(
    State(state): State<AppState>,
    Json(request): Json<UploadAndRecommendRequest>,
) -> Result<Json<RecommendationResult>, AppError> {
    let (resume_text, job_description, optimize_resume) =
        validate_upload_and_recommend(&request)?;

    let relevant = select_relevant(&state.catalog, resume_text, job_description);
    info!(
        "Selected {} of {} catalog entries for prompt context",
        relevant.len(),
        state.catalog.len()
    );

    let catalog_texts: Vec<String> = relevant.iter().map(|entry| entry.kb_text()).collect();
    let prompt = build_rag_prompt(resume_text, job_description, &catalog_texts, optimize_resume);
    let output = state.llm.complete(&prompt).await?;

    Ok(Json(parse_model_output(&output)))
}

/// Checks the three required fields before any network call is attempted.
fn validate_upload_and_recommend(
    request: &UploadAndRecommendRequest,
) -> Result<(&str, &str, bool), AppError> {
    let file_name = request.file_name.as_deref().unwrap_or_default();
    let resume_text = request.resume_text.as_deref().unwrap_or_default();
    let job_description = request.job_description.as_deref().unwrap_or_default();

    if file_name.trim().is_empty() || resume_text.trim().is_empty() || job_description.trim().is_empty()
    {
        return Err(AppError::Validation("Missing required fields".to_string()));
    }

    Ok((resume_text, job_description, request.optimize_resume))
}
