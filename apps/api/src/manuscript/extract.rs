//! Text extraction for uploaded manuscripts.
//!
//! Plain text is decoded as UTF-8; PDF bytes go to `pdf-extract`. Anything else is rejected
//! before any bytes are inspected.

use serde::Serialize;
use thiserror::Error;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MediaType {
    #[serde(rename = "text/plain")]
    PlainText,
    #[serde(rename = "application/pdf")]
    Pdf,
}

impl MediaType {
    /// Matches the essence of a declared content type, ignoring parameters such as
    /// `charset` and letter case.
    pub fn parse(declared: &str) -> Option<Self> {
        let essence = declared.split(';').next().unwrap_or_default().trim();
        if essence.eq_ignore_ascii_case("text/plain") {
            Some(MediaType::PlainText)
        } else if essence.eq_ignore_ascii_case("application/pdf") {
            Some(MediaType::Pdf)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::PlainText => "text/plain",
            MediaType::Pdf => "application/pdf",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported media type '{0}'")]
    UnsupportedMediaType(String),

    #[error("could not extract text: {0}")]
    Failed(String),
}

impl From<ExtractError> for AppError {
    fn from(e: ExtractError) -> Self {
        match e {
            ExtractError::UnsupportedMediaType(m) => AppError::UnsupportedMediaType(m),
            ExtractError::Failed(detail) => AppError::ExtractionFailed(detail),
        }
    }
}

/// Resolves the declared media type, failing fast on anything other than TXT or PDF.
pub fn resolve_media_type(declared: &str) -> Result<MediaType, ExtractError> {
    MediaType::parse(declared).ok_or_else(|| ExtractError::UnsupportedMediaType(declared.to_string()))
}

/// Produces the manuscript text for `bytes` of the given media type.
///
/// Invalid UTF-8 sequences in plain text are replaced rather than rejected.
/// PDF parsing is CPU-bound; async callers should run this on a blocking thread.
pub fn extract_text(bytes: &[u8], media_type: MediaType) -> Result<String, ExtractError> {
    match media_type {
        MediaType::PlainText => Ok(String::from_utf8_lossy(bytes).into_owned()),
        MediaType::Pdf => {
            pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Failed(e.to_string()))
        }
    }
}
