//! Static job index — the corpus the match scorer runs against.
//!
//! Records are preprocessed offline into `data/jobs.json` and loaded once at
//! startup; each job's term-frequency vector is computed here so request-time
//! scoring touches no text processing for the corpus side.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::matching::preprocess::{preprocess, term_frequencies};

/// One job posting as stored in the index file.
#[derive(Debug, Clone, Deserialize)]
pub struct JobRecord {
    pub job_id: i64,
    pub title: String,
    pub company_name: String,
    // Carried in the index file; not part of the match response shape.
    #[allow(dead_code)]
    #[serde(default)]
    pub location: String,
    pub description: String,
}

/// A job with its precomputed term-frequency vector.
pub struct IndexedJob {
    pub record: JobRecord,
    frequencies: HashMap<String, f64>,
}

impl IndexedJob {
    pub fn frequencies(&self) -> &HashMap<String, f64> {
        &self.frequencies
    }
}

/// The full in-memory job index, immutable for the process lifetime.
pub struct JobIndex {
    jobs: Vec<IndexedJob>,
}

impl JobIndex {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job index {}", path.display()))?;
        Self::load_from_str(&raw)
    }

    /// Parses the index from an in-memory JSON string.
    pub fn load_from_str(raw: &str) -> Result<Self> {
        let records: Vec<JobRecord> =
            serde_json::from_str(raw).context("Job index is not a JSON array of job records")?;

        let jobs = records
            .into_iter()
            .map(|record| {
                let frequencies = term_frequencies(&preprocess(&record.description));
                IndexedJob {
                    record,
                    frequencies,
                }
            })
            .collect();

        Ok(Self { jobs })
    }

    pub fn jobs(&self) -> &[IndexedJob] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"job_id": 1, "title": "Backend Engineer", "company_name": "Acme", "location": "Remote", "description": "Rust services and PostgreSQL"},
        {"job_id": 2, "title": "Data Analyst", "company_name": "Beta Corp", "description": "SQL dashboards and reporting"}
    ]"#;

    #[test]
    fn test_load_precomputes_frequencies() {
        let index = JobIndex::load_from_str(SAMPLE).unwrap();
        assert_eq!(index.len(), 2);
        let first = &index.jobs()[0];
        assert_eq!(first.record.job_id, 1);
        assert_eq!(first.frequencies()["rust"], 1.0);
        assert_eq!(first.frequencies()["postgresql"], 1.0);
    }

    #[test]
    fn test_missing_location_defaults_to_empty() {
        let index = JobIndex::load_from_str(SAMPLE).unwrap();
        assert_eq!(index.jobs()[1].record.location, "");
    }

    #[test]
    fn test_non_array_index_is_an_error() {
        assert!(JobIndex::load_from_str(r#"{"jobs": []}"#).is_err());
    }
}
