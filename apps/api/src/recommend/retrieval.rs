//! Relevance filter — bounds how much catalog content reaches the prompt.
//!
//! A deliberately approximate pre-filter, not a ranking: it exists for cost
//! and context-window control. An entry survives if any word of its
//! knowledge-base text occurs anywhere in the combined resume + job
//! description, matching inside larger words too.

use crate::catalog::{Catalog, CatalogEntry};

/// Upper bound on catalog entries embedded in a single prompt.
pub const MAX_CONTEXT_ENTRIES: usize = 10;

/// Selects catalog entries relevant to the resume and job description,
/// preserving catalog order and truncating to `MAX_CONTEXT_ENTRIES`.
pub fn select_relevant<'a>(
    catalog: &'a Catalog,
    resume_text: &str,
    job_description: &str,
) -> Vec<&'a CatalogEntry> {
    let haystack = format!("{resume_text} {job_description}").to_lowercase();

    catalog
        .entries()
        .iter()
        .filter(|entry| {
            entry
                .kb_text()
                .to_lowercase()
                .split_whitespace()
                .any(|word| haystack.contains(word))
        })
        .take(MAX_CONTEXT_ENTRIES)
        .collect()
}
