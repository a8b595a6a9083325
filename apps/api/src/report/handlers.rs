use axum::{
    extract::rejection::JsonRejection,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::report::assembler::{assemble, ReportGroup, REPORT_FILE_NAME};

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub groups: Vec<ReportGroup>,
}

/// POST /api/report
///
/// Returns the assembled report as a `text/plain` attachment. Nothing is stored.
pub async fn handle_download_report(
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let report = assemble(&request.groups);
    info!(
        "Assembled report: {} groups, {} bytes",
        request.groups.len(),
        report.len()
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILE_NAME}\""),
            ),
        ],
        report,
    )
        .into_response())
}
