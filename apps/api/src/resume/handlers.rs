//! Axum route handlers for the resume CRUD API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::envelope::Envelope;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::resume::{Resume, ResumePayload};
use crate::resume::store;
use crate::state::AppState;

/// POST /api/resumes
pub async fn handle_create(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ResumePayload>,
) -> Result<(StatusCode, Json<Envelope<Resume>>), AppError> {
    let resume = store::insert(&state.db, payload).await?;
    Ok((StatusCode::CREATED, Json(Envelope::ok(resume))))
}

/// GET /api/resumes
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<Resume>>>, AppError> {
    let resumes = store::list(&state.db).await?;
    Ok(Json(Envelope::list(resumes)))
}

/// GET /api/resumes/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<Resume>>, AppError> {
    let resume = store::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;
    Ok(Json(Envelope::ok(resume)))
}

/// PUT /api/resumes/:id
///
/// Field-level replacement: the typed payload has already been validated at
/// the extractor, and the store writes the merged document in one statement.
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<ResumePayload>,
) -> Result<Json<Envelope<Resume>>, AppError> {
    let resume = store::update(&state.db, id, payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;
    Ok(Json(Envelope::ok(resume)))
}

/// DELETE /api/resumes/:id
///
/// Idempotent in effect: a second delete reports not-found.
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Envelope<()>>, AppError> {
    let deleted = store::delete(&state.db, id).await?;
    if !deleted {
        return Err(AppError::NotFound("Resume not found".to_string()));
    }
    Ok(Json(Envelope::message("Resume deleted successfully")))
}

#[derive(Debug, Deserialize)]
pub struct TranscriptionRequest {
    pub text: String,
}

/// POST /api/resumes/:id/transcriptions
pub async fn handle_add_transcription(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    AppJson(request): AppJson<TranscriptionRequest>,
) -> Result<Json<Envelope<Resume>>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation(
            "Transcription text is required".to_string(),
        ));
    }

    let resume = store::append_transcription(&state.db, id, &request.text)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;
    Ok(Json(Envelope::ok(resume)))
}
