use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::ai::merge::merge_resume_data;
use crate::ai::prompts::TEST_CONNECTION_PROMPT;
use crate::ai::{enhance_resume_data, extract_resume_info};
use crate::envelope::Envelope;
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::resume::{Resume, ResumeData};
use crate::resume::store;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessVoiceRequest {
    pub speech_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhanceResumeRequest {
    pub resume_id: Uuid,
    pub additional_speech: String,
}

/// POST /api/ai/process-voice
///
/// Turns a speech transcript into structured resume content. Nothing is
/// persisted — the client decides whether to create a resume from the result.
pub async fn handle_process_voice(
    State(state): State<AppState>,
    AppJson(request): AppJson<ProcessVoiceRequest>,
) -> Result<Json<Envelope<ResumeData>>, AppError> {
    if request.speech_text.trim().is_empty() {
        return Err(AppError::Validation("Speech text is required".to_string()));
    }

    let data = extract_resume_info(&state.ai, &request.speech_text).await?;
    Ok(Json(Envelope::ok(data)))
}

/// POST /api/ai/enhance-resume
///
/// Folds additional speech into a stored resume: the provider's response is
/// merged field-by-field onto the current content, the transcript is appended
/// to the audit log, and the whole document is written back in one statement.
pub async fn handle_enhance_resume(
    State(state): State<AppState>,
    AppJson(request): AppJson<EnhanceResumeRequest>,
) -> Result<Json<Envelope<Resume>>, AppError> {
    if request.additional_speech.trim().is_empty() {
        return Err(AppError::Validation(
            "Additional speech is required".to_string(),
        ));
    }

    let resume = store::find_by_id(&state.db, request.resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

    let existing = resume.data();
    let enhanced = enhance_resume_data(&state.ai, &existing, &request.additional_speech).await?;
    let merged = merge_resume_data(&existing, enhanced);

    let updated = store::apply_enhancement(
        &state.db,
        request.resume_id,
        &merged,
        &request.additional_speech,
    )
    .await?
    .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;

    Ok(Json(Envelope::ok(updated)))
}

/// GET /api/ai/test-connection
///
/// Round-trips a canned prompt through the configured provider.
pub async fn handle_test_connection(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let reply: Value = state
        .ai
        .complete_json(TEST_CONNECTION_PROMPT)
        .await
        .map_err(|e| AppError::Ai(format!("AI processing failed: {e}")))?;

    Ok(Json(json!({
        "success": true,
        "provider": state.ai.provider_label(),
        "message": "AI connection successful",
        "data": reply,
    })))
}
