//! Text preprocessing shared by the match scorer and the explain endpoint.
//!
//! Non-alphabetic characters become spaces, everything is lower-cased, and
//! stopwords and single-letter tokens are dropped. What remains is treated
//! as the document's keyword stream.

use std::collections::{BTreeSet, HashMap};

/// Common English stopwords. Small on purpose: the goal is to keep job and
/// skill terms, not to be linguistically complete.
const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "all", "am", "an", "and", "any", "are", "as", "at",
    "be", "because", "been", "being", "below", "between", "both", "but", "by", "can", "did", "do",
    "does", "doing", "down", "during", "each", "few", "for", "from", "further", "had", "has",
    "have", "having", "he", "her", "here", "hers", "him", "his", "how", "i", "if", "in", "into",
    "is", "it", "its", "just", "me", "more", "most", "my", "no", "nor", "not", "now", "of", "off",
    "on", "once", "only", "or", "other", "our", "ours", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "you", "your", "yours",
];

/// Extracts the keyword tokens of a document, in order of appearance.
pub fn preprocess(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .map(|c| if c.is_ascii_alphabetic() { c.to_ascii_lowercase() } else { ' ' })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| token.len() > 1 && !STOPWORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// The distinct keywords of a document, sorted.
pub fn keyword_set(text: &str) -> BTreeSet<String> {
    preprocess(text).into_iter().collect()
}

/// Term-frequency vector of a document.
pub fn term_frequencies(tokens: &[String]) -> HashMap<String, f64> {
    let mut frequencies = HashMap::new();
    for token in tokens {
        *frequencies.entry(token.clone()).or_insert(0.0) += 1.0;
    }
    frequencies
}

/// Cosine similarity between two term-frequency vectors. A zero vector on
/// either side yields 0.0.
pub fn cosine_similarity(a: &HashMap<String, f64>, b: &HashMap<String, f64>) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(token, weight)| b.get(token).map(|other| weight * other))
        .sum();

    let norm_a: f64 = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b: f64 = b.values().map(|w| w * w).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preprocess_lowercases_and_strips_punctuation() {
        let tokens = preprocess("Rust, C++ & SQL!");
        assert_eq!(tokens, vec!["rust", "sql"]);
    }

    #[test]
    fn test_preprocess_drops_stopwords_and_single_letters() {
        let tokens = preprocess("I am a senior engineer with the team");
        assert_eq!(tokens, vec!["senior", "engineer", "team"]);
    }

    #[test]
    fn test_preprocess_splits_on_digits() {
        // Digits become separators, so "python3" contributes "python".
        let tokens = preprocess("python3 developer");
        assert_eq!(tokens, vec!["python", "developer"]);
    }

    #[test]
    fn test_keyword_set_is_sorted_and_distinct() {
        let keywords: Vec<String> = keyword_set("sql rust sql kubernetes rust")
            .into_iter()
            .collect();
        assert_eq!(keywords, vec!["kubernetes", "rust", "sql"]);
    }

    #[test]
    fn test_term_frequencies_count_repeats() {
        let tokens = preprocess("rust rust kubernetes");
        let frequencies = term_frequencies(&tokens);
        assert_eq!(frequencies["rust"], 2.0);
        assert_eq!(frequencies["kubernetes"], 1.0);
    }

    #[test]
    fn test_cosine_identical_documents_is_one() {
        let tf = term_frequencies(&preprocess("rust engineer distributed systems"));
        let score = cosine_similarity(&tf, &tf);
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_cosine_disjoint_documents_is_zero() {
        let a = term_frequencies(&preprocess("rust engineer"));
        let b = term_frequencies(&preprocess("pastry chef"));
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_cosine_empty_document_is_zero() {
        let a = term_frequencies(&preprocess("rust engineer"));
        let empty = HashMap::new();
        assert_eq!(cosine_similarity(&a, &empty), 0.0);
    }

    #[test]
    fn test_cosine_is_bounded_by_one() {
        let a = term_frequencies(&preprocess("rust rust sql kubernetes"));
        let b = term_frequencies(&preprocess("rust sql sql terraform aws"));
        let score = cosine_similarity(&a, &b);
        assert!(score > 0.0 && score <= 1.0);
    }
}
