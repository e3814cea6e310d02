//! AI bridge: turns free speech text into structured resume content via an
//! external completion provider, and merges enhancements into existing
//! resumes. No cache, no retry — every call re-invokes the provider and any
//! failure propagates as a single AI error carrying the underlying message.

pub mod client;
pub mod handlers;
pub mod merge;
pub mod prompts;

use crate::errors::AppError;
use crate::models::resume::ResumeData;
use client::AiClient;
use prompts::{build_enhancement_prompt, build_extraction_prompt};

/// Extracts structured resume content from a raw speech transcript.
pub async fn extract_resume_info(
    ai: &AiClient,
    speech_text: &str,
) -> Result<ResumeData, AppError> {
    let prompt = build_extraction_prompt(speech_text);
    ai.complete_json(&prompt)
        .await
        .map_err(|e| AppError::Ai(format!("AI processing failed: {e}")))
}

/// Asks the provider to fold additional speech input into existing resume
/// content. The caller decides how the response is merged and persisted.
pub async fn enhance_resume_data(
    ai: &AiClient,
    existing: &ResumeData,
    additional_speech: &str,
) -> Result<ResumeData, AppError> {
    let existing_json =
        serde_json::to_string_pretty(existing).map_err(|e| AppError::Internal(e.into()))?;
    let prompt = build_enhancement_prompt(&existing_json, additional_speech);
    ai.complete_json(&prompt)
        .await
        .map_err(|e| AppError::Ai(format!("AI enhancement failed: {e}")))
}
