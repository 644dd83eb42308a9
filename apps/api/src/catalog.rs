//! Learning-resource catalog — static course/certification records used as
//! retrieval context for recommendation prompts.
//!
//! Loaded once at startup and carried through `AppState` as an immutable
//! `Arc<Catalog>`; nothing mutates it for the lifetime of the process.

#![allow(dead_code)]

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;

/// Kind of a catalog record. Unknown values default to `Resource`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Course,
    Certification,
    #[default]
    Resource,
}

/// A single learning resource. The catalog file carries extra presentation
/// fields (`provider`, `duration`, `level`, `skills`) that are tolerated on
/// load and ignored here.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: CatalogKind,
    #[serde(default)]
    pub url: Option<String>,
}

impl CatalogEntry {
    /// Knowledge-base text embedded in prompts and scanned by the relevance
    /// filter.
    pub fn kb_text(&self) -> String {
        format!("{}: {}", self.title, self.description)
    }
}

/// The full in-memory catalog.
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Reads the catalog from a JSON file. A file whose root is not an array
    /// logs a warning and yields an empty catalog rather than failing startup.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        Self::from_json(&raw, &path.display().to_string())
    }

    /// Parses a catalog from an in-memory JSON string.
    pub fn load_from_str(raw: &str) -> Result<Self> {
        Self::from_json(raw, "<inline>")
    }

    fn from_json(raw: &str, source: &str) -> Result<Self> {
        let parsed: serde_json::Value = serde_json::from_str(raw)
            .with_context(|| format!("Catalog file {source} is not valid JSON"))?;

        if !parsed.is_array() {
            warn!("Catalog {source} does not contain an array. Loading empty catalog.");
            return Ok(Self { entries: vec![] });
        }

        let entries: Vec<CatalogEntry> = serde_json::from_value(parsed)
            .with_context(|| format!("Catalog file {source} has malformed entries"))?;

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_array_of_entries() {
        let raw = r#"[
            {"title": "Rust Fundamentals", "description": "Ownership, borrowing, traits", "type": "course", "url": "https://example.com/rust"},
            {"title": "AWS Certified Developer", "description": "Cloud services certification", "type": "certification"}
        ]"#;
        let catalog = Catalog::from_json(raw, "test").unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[0].kind, CatalogKind::Course);
        assert_eq!(catalog.entries()[1].kind, CatalogKind::Certification);
        assert!(catalog.entries()[1].url.is_none());
    }

    #[test]
    fn test_missing_type_defaults_to_resource() {
        let raw = r#"[{"title": "Blog post", "description": "An intro article"}]"#;
        let catalog = Catalog::from_json(raw, "test").unwrap();
        assert_eq!(catalog.entries()[0].kind, CatalogKind::Resource);
    }

    #[test]
    fn test_extra_fields_are_tolerated() {
        let raw = r#"[{
            "title": "SQL Bootcamp",
            "description": "Joins and indexing",
            "type": "course",
            "provider": "Acme Learning",
            "duration": "6 weeks",
            "level": "beginner",
            "skills": ["sql", "postgres"]
        }]"#;
        let catalog = Catalog::from_json(raw, "test").unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries()[0].title, "SQL Bootcamp");
    }

    #[test]
    fn test_non_array_root_yields_empty_catalog() {
        let raw = r#"{"title": "not a list"}"#;
        let catalog = Catalog::from_json(raw, "test").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Catalog::from_json("not json at all", "test").is_err());
    }

    #[test]
    fn test_kb_text_joins_title_and_description() {
        let entry = CatalogEntry {
            title: "Rust Fundamentals".to_string(),
            description: "Ownership and traits".to_string(),
            kind: CatalogKind::Course,
            url: None,
        };
        assert_eq!(entry.kb_text(), "Rust Fundamentals: Ownership and traits");
    }
}
