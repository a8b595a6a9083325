//! Generation proxy: the manuscript-bound path from a prompt to upstream and back.

use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::generation::classify::classify_reply;
use crate::generation::prompts::BOOK_CONTEXT_SEPARATOR;
use crate::llm_client::TextGenerator;
use crate::manuscript::store::ManuscriptStore;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Generation {
    pub text: String,
    pub model_used: String,
}

/// Appends the manuscript to the caller's prompt.
pub fn combine_prompt(prompt: &str, manuscript: &str) -> String {
    format!("{prompt}{BOOK_CONTEXT_SEPARATOR}{manuscript}")
}

/// Runs one generation against the stored manuscript.
///
/// Preconditions are checked in order and the first failure wins: blank prompt, missing
/// credential, empty store. None of them reach upstream. Exactly one upstream call is made
/// otherwise, with no retry.
pub async fn generate_feedback(
    generator: &dyn TextGenerator,
    manuscripts: &ManuscriptStore,
    prompt: &str,
) -> Result<Generation, AppError> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(AppError::MissingPrompt);
    }
    if !generator.has_credential() {
        return Err(AppError::MissingCredential);
    }
    let manuscript = manuscripts.get().await.ok_or(AppError::NoManuscript)?;

    let combined = combine_prompt(prompt, &manuscript.text);
    info!(
        "Generating with {} (prompt={} chars, manuscript={} chars)",
        generator.model(),
        prompt.chars().count(),
        manuscript.length
    );

    let reply = generator.generate_content(&combined).await?;
    let text = classify_reply(&reply)?;

    Ok(Generation {
        text,
        model_used: generator.model().to_string(),
    })
}
