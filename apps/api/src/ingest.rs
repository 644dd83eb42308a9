//! Resume ingestion — normalizes an incoming resume to plain text.
//!
//! A request carries the resume either as raw text or as a base64-encoded
//! file with a declared MIME type, never both and never neither. File bytes
//! round-trip byte-exactly through the base64 codec, so PDFs survive the
//! transport intact.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;

use crate::errors::AppError;

/// Wire shape shared by every endpoint that accepts a resume.
#[derive(Debug, Default, Deserialize)]
pub struct ResumeUpload {
    pub resume_text: Option<String>,
    pub file_base64: Option<String>,
    pub mime_type: Option<String>,
}

/// A resume in exactly one of its two representations.
#[derive(Debug, Clone)]
pub enum ResumeSource {
    Text(String),
    File { bytes: Vec<u8>, mime_type: String },
}

impl ResumeSource {
    /// Validates the XOR invariant and decodes the file payload if present.
    /// Fails with a validation error before any network call is attempted.
    pub fn from_upload(upload: &ResumeUpload) -> Result<Self, AppError> {
        let text = upload
            .resume_text
            .as_deref()
            .filter(|t| !t.trim().is_empty());
        let file = upload.file_base64.as_deref().filter(|f| !f.is_empty());

        match (text, file) {
            (Some(_), Some(_)) => Err(AppError::Validation(
                "Provide either resume_text or file_base64, not both".to_string(),
            )),
            (None, None) => Err(AppError::Validation(
                "Missing or invalid resume data in request".to_string(),
            )),
            (Some(text), None) => Ok(ResumeSource::Text(text.to_string())),
            (None, Some(encoded)) => {
                let bytes = decode(encoded)?;
                let mime_type = upload.mime_type.clone().unwrap_or_default();
                Ok(ResumeSource::File { bytes, mime_type })
            }
        }
    }

    /// Produces the plain text of the resume. PDF bytes go through text
    /// extraction, `text/*` bytes through UTF-8 decoding; any other file
    /// type is rejected.
    pub fn extract_text(&self) -> Result<String, AppError> {
        match self {
            ResumeSource::Text(text) => Ok(text.clone()),
            ResumeSource::File { bytes, mime_type } => {
                if mime_type.contains("pdf") {
                    pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
                        AppError::Validation(format!("Could not extract text from PDF: {e}"))
                    })
                } else if mime_type.contains("text") {
                    String::from_utf8(bytes.clone()).map_err(|_| {
                        AppError::Validation("Resume file is not valid UTF-8 text".to_string())
                    })
                } else {
                    Err(AppError::Validation(format!(
                        "Unsupported resume file type: {mime_type}"
                    )))
                }
            }
        }
    }
}

/// Canonical transport encoding for resume file bytes. The client applies
/// this before upload; kept here as the dual of `decode`.
#[allow(dead_code)]
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes a base64 payload back to its exact original bytes.
pub fn decode(encoded: &str) -> Result<Vec<u8>, AppError> {
    STANDARD
        .decode(encoded)
        .map_err(|_| AppError::Validation("file_base64 is not valid base64".to_string()))
}
