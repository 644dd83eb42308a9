//! Resume/job matching — scores a resume against the static job index and
//! explains individual matches by keyword overlap.

pub mod handlers;
pub mod index;
pub mod preprocess;
pub mod prompts;
pub mod scorer;

use serde::{Deserialize, Serialize};

/// A job scored against a resume. Scores live in [0, 1] and are never
/// mutated once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedJob {
    pub job_id: i64,
    pub title: String,
    pub company_name: String,
    pub description: String,
    pub similarity_score: f64,
}

/// Renders a similarity score the way the results view shows it:
/// `score * 100` rounded half-up to a whole percentage.
#[allow(dead_code)]
pub fn format_match_percent(score: f64) -> String {
    format!("{}% Match", (score * 100.0).round() as i64)
}
