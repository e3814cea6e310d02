//! Axum route handlers for the template catalog.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::envelope::Envelope;
use crate::errors::AppError;
use crate::models::template::Template;
use crate::state::AppState;
use crate::templates::{catalog, store};

/// GET /api/templates
pub async fn handle_list(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<Template>>>, AppError> {
    let templates = store::list_active(&state.db).await?;
    Ok(Json(Envelope::list(templates)))
}

/// GET /api/templates/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(template_id): Path<String>,
) -> Result<Json<Envelope<Template>>, AppError> {
    let template = store::find_by_template_id(&state.db, &template_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Template not found".to_string()))?;
    Ok(Json(Envelope::ok(template)))
}

/// POST /api/templates/initialize
///
/// Destructive: wipes the catalog and reinserts the four canonical
/// templates. Safe to call repeatedly.
pub async fn handle_initialize(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Envelope<Vec<Template>>>), AppError> {
    let templates = store::replace_all(&state.db, catalog::default_templates()).await?;
    let count = templates.len();
    let mut envelope = Envelope::with_message(templates, "Default templates created successfully");
    envelope.count = Some(count);
    Ok((StatusCode::CREATED, Json(envelope)))
}
