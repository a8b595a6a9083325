//! Axum route handlers for the Generation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::catalog::{find_section, SectionGroup, CATALOG};
use crate::generation::composer::{compose, resolve_task, Depth, Personality};
use crate::generation::proxy::{generate_feedback, Generation};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    pub section_key: String,
    #[serde(default)]
    pub depth: Depth,
    #[serde(default)]
    pub personality: Option<String>,
    /// Edited task text; replaces the catalog prompt when not blank.
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
    pub section_key: String,
    #[serde(flatten)]
    pub generation: Generation,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub groups: &'static [SectionGroup],
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/gemini
///
/// Forwards a free-form prompt, with the stored manuscript appended, to upstream.
/// A missing or non-JSON body counts as an empty prompt.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Generation>, AppError> {
    let prompt = match payload {
        Ok(Json(request)) => request.prompt.unwrap_or_default(),
        Err(JsonRejection::MissingJsonContentType(_) | JsonRejection::JsonSyntaxError(_)) => {
            String::new()
        }
        Err(rejection) => return Err(rejection.into()),
    };
    let generation =
        generate_feedback(state.generator.as_ref(), &state.manuscripts, &prompt).await?;
    Ok(Json(generation))
}

/// GET /api/sections
pub async fn handle_list_sections() -> Json<CatalogResponse> {
    Json(CatalogResponse { groups: CATALOG })
}

/// POST /api/feedback
///
/// Composes the prompt for one catalog section and runs it through the same proxy as
/// `/api/gemini`, so preconditions and error classification are identical.
pub async fn handle_section_feedback(
    State(state): State<AppState>,
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let Json(request) = payload?;
    let (group, section) = find_section(&request.section_key)
        .ok_or_else(|| AppError::NotFound(format!("Unknown section '{}'", request.section_key)))?;

    let personality = Personality::parse(request.personality.as_deref().unwrap_or_default())
        .map_err(AppError::Validation)?;
    let task = resolve_task(request.prompt.as_deref(), section.prompt);
    let prompt = compose(group, task, request.depth, personality);

    let generation =
        generate_feedback(state.generator.as_ref(), &state.manuscripts, &prompt).await?;

    Ok(Json(FeedbackResponse {
        section_key: section.key.to_string(),
        generation,
    }))
}
