use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::Serialize;
use tokio::task::JoinError;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::manuscript::extract::{extract_text, resolve_media_type};
use crate::manuscript::store::Manuscript;
use crate::state::AppState;

/// Multipart field carrying the manuscript file.
const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub length: usize,
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManuscriptStatus {
    pub loaded: bool,
    #[serde(flatten)]
    pub manuscript: Option<Manuscript>,
}

/// POST /api/upload
///
/// Extracts text from the `file` field and replaces the stored manuscript.
/// A rejected or failed upload leaves the previous manuscript untouched.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    // A body that is not multipart/form-data cannot carry a file field.
    let mut multipart = multipart.map_err(|rejection| {
        warn!("Upload rejected: {}", rejection.body_text());
        AppError::MissingFile
    })?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(String::from);
        let declared = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let media_type = resolve_media_type(&declared)?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read file: {e}")))?;

        let text = tokio::task::spawn_blocking(move || extract_text(&bytes, media_type))
            .await
            .map_err(extraction_join_error)??;

        let stored = state
            .manuscripts
            .put(Manuscript::new(text, file_name, media_type))
            .await;

        info!(
            "Stored manuscript {} ({}, {} chars, file={:?})",
            stored.id,
            media_type.as_str(),
            stored.length,
            stored.file_name
        );

        return Ok(Json(UploadResponse {
            message: "File uploaded successfully".to_string(),
            length: stored.length,
        }));
    }

    Err(AppError::MissingFile)
}

/// pdf-extract can panic on hostile input, which is a file-processing failure.
/// A cancelled extractor task is a server fault, not a problem with the file.
fn extraction_join_error(e: JoinError) -> AppError {
    if e.is_panic() {
        AppError::ExtractionFailed(format!("extractor panicked: {e}"))
    } else {
        AppError::Internal(anyhow::anyhow!("extractor task cancelled: {e}"))
    }
}

/// POST /api/clear
pub async fn handle_clear(State(state): State<AppState>) -> Json<ClearResponse> {
    state.manuscripts.clear().await;
    info!("Manuscript store cleared");
    Json(ClearResponse {
        message: "Server memory cleared".to_string(),
    })
}

/// GET /api/manuscript
///
/// Metadata about the stored manuscript. Never returns the text itself.
pub async fn handle_manuscript_status(State(state): State<AppState>) -> Json<ManuscriptStatus> {
    let manuscript = state.manuscripts.get().await;
    Json(ManuscriptStatus {
        loaded: manuscript.is_some(),
        manuscript: manuscript.map(|m| m.as_ref().clone()),
    })
}
