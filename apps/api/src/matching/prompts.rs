// Prompt builder for the LLM-backed match scorer.

use crate::matching::index::JobIndex;

/// Candidate descriptions are truncated before embedding in the prompt to
/// keep the request inside the model's context window.
const MAX_DESCRIPTION_CHARS: usize = 600;

/// Builds the match-scoring prompt: the resume plus every candidate job,
/// demanding strict JSON scores.
pub fn build_match_prompt(resume_text: &str, index: &JobIndex) -> String {
    let mut candidates = String::new();
    for job in index.jobs() {
        let description: String = job
            .record
            .description
            .chars()
            .take(MAX_DESCRIPTION_CHARS)
            .collect();
        candidates.push_str(&format!(
            "- jobId {}: {} at {}\n  {}\n",
            job.record.job_id, job.record.title, job.record.company_name, description
        ));
    }

    format!(
        r#"You are a job matching engine. Score how well the candidate's resume matches each job below, from 0.0 (no match) to 1.0 (perfect match).

Respond strictly with a JSON array, one entry per job:
[
  {{ "jobId": 0, "similarityScore": 0.0 }}
]

Jobs:
{candidates}
Resume:
{resume_text}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::index::JobIndex;

    #[test]
    fn test_prompt_lists_every_candidate() {
        let index = JobIndex::load_from_str(
            r#"[
                {"job_id": 1, "title": "Backend Engineer", "company_name": "Acme", "description": "Rust services"},
                {"job_id": 2, "title": "Data Analyst", "company_name": "Beta", "description": "SQL dashboards"}
            ]"#,
        )
        .unwrap();
        let prompt = build_match_prompt("Rust engineer", &index);
        assert!(prompt.contains("jobId 1: Backend Engineer at Acme"));
        assert!(prompt.contains("jobId 2: Data Analyst at Beta"));
        assert!(prompt.contains("Rust engineer"));
    }

    #[test]
    fn test_long_descriptions_are_truncated() {
        let long = "x".repeat(2000);
        let raw = format!(
            r#"[{{"job_id": 1, "title": "T", "company_name": "C", "description": "{long}"}}]"#
        );
        let index = JobIndex::load_from_str(&raw).unwrap();
        let prompt = build_match_prompt("resume", &index);
        assert!(!prompt.contains(&long));
        assert!(prompt.contains(&"x".repeat(MAX_DESCRIPTION_CHARS)));
    }
}
