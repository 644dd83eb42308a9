//! Recommendation pipeline — resume + job description in, skill-gap plan out.
//!
//! Flow: validate input → relevance-filter the catalog → build prompt →
//! single completion call → tolerant parse.

pub mod handlers;
pub mod prompts;
pub mod retrieval;

use serde::Serialize;

use crate::llm_client::strip_json_fences;

/// Outcome of a recommendation call.
///
/// The model's output is not contractually well-formed, so the parse is
/// tolerant: valid JSON passes through verbatim with no schema validation,
/// anything else is wrapped as `Raw`. Callers pattern-match on the variant
/// instead of probing for field presence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RecommendationResult {
    /// Whatever JSON the model returned, untouched.
    Structured(serde_json::Value),
    /// The model's raw text when it was not valid JSON.
    Raw { raw: String },
}

/// Parses model output into a `RecommendationResult`. Markdown code fences
/// are stripped before the parse attempt; on failure `raw` carries the
/// original text, fences and all.
pub fn parse_model_output(text: &str) -> RecommendationResult {
    match serde_json::from_str(strip_json_fences(text)) {
        Ok(value) => RecommendationResult::Structured(value),
        Err(_) => RecommendationResult::Raw {
            raw: text.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_json_passes_through_verbatim() {
        let text = r#"{"skillGaps": ["kubernetes"], "plan": [], "unexpectedKey": 42}"#;
        let result = parse_model_output(text);
        // No field coercion: unknown keys survive untouched.
        assert_eq!(
            result,
            RecommendationResult::Structured(json!({
                "skillGaps": ["kubernetes"],
                "plan": [],
                "unexpectedKey": 42
            }))
        );
    }

    #[test]
    fn test_invalid_json_wraps_as_raw() {
        let text = "Here is your plan:\n1. Learn Kubernetes";
        let result = parse_model_output(text);
        assert_eq!(
            result,
            RecommendationResult::Raw {
                raw: text.to_string()
            }
        );
    }

    #[test]
    fn test_raw_serializes_with_exactly_one_key() {
        let result = parse_model_output("not json");
        let value = serde_json::to_value(&result).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object["raw"], "not json");
    }

    #[test]
    fn test_structured_serializes_transparently() {
        let result = parse_model_output(r#"{"plan": [{"title": "Ship a CLI"}]}"#);
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["plan"][0]["title"], "Ship a CLI");
        assert!(value.get("raw").is_none());
    }

    #[test]
    fn test_fenced_json_is_parsed() {
        let text = "```json\n{\"skillGaps\": []}\n```";
        let result = parse_model_output(text);
        assert_eq!(
            result,
            RecommendationResult::Structured(json!({"skillGaps": []}))
        );
    }

    #[test]
    fn test_fenced_non_json_keeps_original_text() {
        let text = "```\nplain words\n```";
        let result = parse_model_output(text);
        // The fallback carries the original text, fences included.
        assert_eq!(
            result,
            RecommendationResult::Raw {
                raw: text.to_string()
            }
        );
    }
}
