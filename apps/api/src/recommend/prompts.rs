// All LLM prompt constants and builders for the recommendation module.

/// Prompt for plain recommendations (no catalog context).
/// Replace: `{resume}`, `{job_description}`, `{skill_gaps}`.
const SIMPLE_RECOMMENDATION_TEMPLATE: &str = r#"You are a career coach. Given a resume and a job description, identify missing ESCO skills and propose a step-by-step plan:

- Courses & Certifications
- 2-3 portfolio project ideas
- Soft skills

Respond strictly in JSON:
{
  "skillGaps": [],
  "plan": [
    { "title": "", "description": "", "resources": [{ "name":"", "url":"" }], "expected_weeks": 0 }
  ]
}

Resume:
{resume}

Job Description:
{job_description}

Known gaps: {skill_gaps}"#;

/// Prompt for catalog-grounded recommendations.
/// Replace: `{catalog_json}`, `{resume}`, `{job_description}`, `{optimize_resume}`.
const RAG_RECOMMENDATION_TEMPLATE: &str = r#"You are a professional career coach using ESCO skills.

1. Compare the candidate's resume with the job description.
2. Identify missing ESCO skills.
3. Recommend courses & certifications (from provided catalog), 2-3 portfolio projects, and soft skills.
4. If "optimizeResume" is true, provide resume optimization suggestions to pass ATS, with an "atsScore" between 0 and 100 and a list of "atsRecommendations".

Respond strictly in JSON:
{
  "skillGaps": [],
  "plan": [
    { "title": "", "description": "", "resources": [{ "name":"", "url":"" }], "expected_weeks": 0 }
  ],
  "atsScore": 0,
  "atsRecommendations": []
}

Use ONLY the following catalog entries:
{catalog_json}

Resume:
{resume}

Job Description:
{job_description}

Optimize Resume: {optimize_resume}"#;

/// Builds the plain recommendation prompt.
pub fn build_simple_prompt(resume: &str, job_description: &str, skill_gaps: &[String]) -> String {
    SIMPLE_RECOMMENDATION_TEMPLATE
        .replace("{resume}", resume)
        .replace("{job_description}", job_description)
        .replace("{skill_gaps}", &skill_gaps.join(", "))
}

/// Builds the catalog-grounded prompt. `catalog_texts` are the kb texts of
/// the relevance-filtered entries; an empty slice serializes as `[]`.
pub fn build_rag_prompt(
    resume: &str,
    job_description: &str,
    catalog_texts: &[String],
    optimize_resume: bool,
) -> String {
    let catalog_json =
        serde_json::to_string(catalog_texts).unwrap_or_else(|_| "[]".to_string());

    RAG_RECOMMENDATION_TEMPLATE
        .replace("{catalog_json}", &catalog_json)
        .replace("{resume}", resume)
        .replace("{job_description}", job_description)
        .replace("{optimize_resume}", if optimize_resume { "true" } else { "false" })
}
