//! Upstream reply classification.
//!
//! Upstream has no structured error codes we can rely on, so failures are recognised by
//! substrings of its free-text error message. The table is ordered and the first match wins.
//! Pattern checks run before the generic non-success check, whatever the HTTP status was.

use crate::errors::AppError;
use crate::llm_client::UpstreamReply;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamFailure {
    RateLimited,
    InputTooLarge,
}

/// Ordered pattern table: (substring of upstream message, failure kind).
pub const ERROR_PATTERNS: &[(&str, UpstreamFailure)] = &[
    ("RESOURCE_EXHAUSTED", UpstreamFailure::RateLimited),
    ("maximum input length", UpstreamFailure::InputTooLarge),
    ("input too long", UpstreamFailure::InputTooLarge),
    ("too large", UpstreamFailure::InputTooLarge),
];

/// Case-sensitive match of `message` against `ERROR_PATTERNS`.
pub fn match_error_message(message: &str) -> Option<UpstreamFailure> {
    ERROR_PATTERNS
        .iter()
        .find(|(pattern, _)| message.contains(pattern))
        .map(|(_, kind)| *kind)
}

/// Turns one upstream reply into generated text or a caller-facing error.
///
/// A successful reply with no candidate text yields `""`, not an error.
pub fn classify_reply(reply: &UpstreamReply) -> Result<String, AppError> {
    let message = reply.body.error_message();

    match match_error_message(message) {
        Some(UpstreamFailure::RateLimited) => return Err(AppError::RateLimited(message.to_string())),
        Some(UpstreamFailure::InputTooLarge) => {
            return Err(AppError::InputTooLarge(message.to_string()))
        }
        None => {}
    }

    if !reply.is_success() {
        return Err(AppError::Upstream {
            status: reply.status,
            message: Some(message.to_string()).filter(|m| !m.is_empty()),
        });
    }

    Ok(reply.body.text().unwrap_or_default().to_string())
}
