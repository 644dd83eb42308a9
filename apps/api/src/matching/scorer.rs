//! Match scoring — pluggable, trait-based scorer that measures a resume
//! against the job index.
//!
//! Default: `KeywordMatchScorer` (pure-Rust, fast, deterministic, fully
//! testable). Alternative: `LlmMatchScorer` (delegates scoring to the
//! completion API), swapped at startup via `ENABLE_LLM_MATCHING`.
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::{strip_json_fences, LlmClient};
use crate::matching::index::JobIndex;
use crate::matching::preprocess::{cosine_similarity, preprocess, term_frequencies};
use crate::matching::prompts::build_match_prompt;
use crate::matching::MatchedJob;

/// How many matches a scoring call returns.
pub const TOP_MATCHES: usize = 5;

/// The match scorer seam. Implement this to swap backends without touching
/// the endpoint or handler code.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    async fn top_matches(
        &self,
        resume_text: &str,
        index: &JobIndex,
    ) -> Result<Vec<MatchedJob>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordMatchScorer — default backend
// ────────────────────────────────────────────────────────────────────────────

/// Cosine similarity between term-frequency vectors of the preprocessed
/// resume and each job description. Deterministic, no network.
pub struct KeywordMatchScorer;

#[async_trait]
impl MatchScorer for KeywordMatchScorer {
    async fn top_matches(
        &self,
        resume_text: &str,
        index: &JobIndex,
    ) -> Result<Vec<MatchedJob>, AppError> {
        Ok(compute_keyword_matches(resume_text, index))
    }
}

fn compute_keyword_matches(resume_text: &str, index: &JobIndex) -> Vec<MatchedJob> {
    let resume_frequencies = term_frequencies(&preprocess(resume_text));

    let mut scored: Vec<MatchedJob> = index
        .jobs()
        .iter()
        .map(|job| MatchedJob {
            job_id: job.record.job_id,
            title: job.record.title.clone(),
            company_name: job.record.company_name.clone(),
            description: job.record.description.clone(),
            similarity_score: cosine_similarity(&resume_frequencies, job.frequencies()),
        })
        .collect();

    scored.sort_by(|a, b| {
        b.similarity_score
            .partial_cmp(&a.similarity_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(TOP_MATCHES);
    scored
}

// ────────────────────────────────────────────────────────────────────────────
// LlmMatchScorer — completion-API backend
// ────────────────────────────────────────────────────────────────────────────

/// Delegates similarity scoring to the completion API. The model sees the
/// resume and every candidate job and must return strict JSON scores; unlike
/// the recommendation flow there is no raw-text fallback, so malformed
/// output surfaces as an LLM error.
pub struct LlmMatchScorer(pub LlmClient);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScoredJobId {
    job_id: i64,
    similarity_score: f64,
}

#[async_trait]
impl MatchScorer for LlmMatchScorer {
    async fn top_matches(
        &self,
        resume_text: &str,
        index: &JobIndex,
    ) -> Result<Vec<MatchedJob>, AppError> {
        let prompt = build_match_prompt(resume_text, index);
        let output = self.0.complete(&prompt).await?;

        let scores: Vec<ScoredJobId> = serde_json::from_str(strip_json_fences(&output))
            .map_err(|e| AppError::Llm(format!("Match scoring output was not valid JSON: {e}")))?;

        debug!("LLM scored {} of {} jobs", scores.len(), index.len());

        let mut matched: Vec<MatchedJob> = scores
            .into_iter()
            .filter_map(|scored| {
                index
                    .jobs()
                    .iter()
                    .find(|job| job.record.job_id == scored.job_id)
                    .map(|job| MatchedJob {
                        job_id: job.record.job_id,
                        title: job.record.title.clone(),
                        company_name: job.record.company_name.clone(),
                        description: job.record.description.clone(),
                        similarity_score: scored.similarity_score.clamp(0.0, 1.0),
                    })
            })
            .collect();

        matched.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        matched.truncate(TOP_MATCHES);
        Ok(matched)
    }
}
