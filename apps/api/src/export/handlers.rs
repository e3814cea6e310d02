//! Axum route handlers for the export API. These are the only endpoints
//! that respond with raw bytes instead of the JSON envelope.

use axum::{extract::State, http::header, response::IntoResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::html::build_html_content;
use crate::export::pdf::generate_pdf;
use crate::export::word::generate_word;
use crate::extract::AppJson;
use crate::resume::store;
use crate::state::AppState;

const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportPdfRequest {
    pub resume_id: Option<Uuid>,
    pub html_content: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportWordRequest {
    pub resume_id: Uuid,
}

/// POST /api/export/pdf
///
/// Accepts either client-rendered HTML or a resume id to render server-side.
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    AppJson(request): AppJson<ExportPdfRequest>,
) -> Result<impl IntoResponse, AppError> {
    let html = if let Some(html) = request.html_content {
        html
    } else if let Some(id) = request.resume_id {
        let resume = store::find_by_id(&state.db, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;
        build_html_content(&resume, &resume.template_id)
    } else {
        return Err(AppError::Validation(
            "Either resumeId or htmlContent is required".to_string(),
        ));
    };

    let pdf = generate_pdf(html).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=resume.pdf",
            ),
        ],
        pdf,
    ))
}

/// POST /api/export/word
pub async fn handle_export_word(
    State(state): State<AppState>,
    AppJson(request): AppJson<ExportWordRequest>,
) -> Result<impl IntoResponse, AppError> {
    let resume = store::find_by_id(&state.db, request.resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

    let docx = generate_word(&resume)?;

    Ok((
        [
            (header::CONTENT_TYPE, DOCX_MIME),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=resume.docx",
            ),
        ],
        docx,
    ))
}
