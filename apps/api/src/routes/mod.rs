pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ai::handlers as ai_handlers;
use crate::export::handlers as export_handlers;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;
use crate::templates::handlers as template_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume CRUD + transcription log
        .route(
            "/api/resumes",
            post(resume_handlers::handle_create).get(resume_handlers::handle_list),
        )
        .route(
            "/api/resumes/:id",
            get(resume_handlers::handle_get)
                .put(resume_handlers::handle_update)
                .delete(resume_handlers::handle_delete),
        )
        .route(
            "/api/resumes/:id/transcriptions",
            post(resume_handlers::handle_add_transcription),
        )
        // Template catalog
        .route("/api/templates", get(template_handlers::handle_list))
        .route(
            "/api/templates/initialize",
            post(template_handlers::handle_initialize),
        )
        .route("/api/templates/:id", get(template_handlers::handle_get))
        // AI bridge
        .route(
            "/api/ai/process-voice",
            post(ai_handlers::handle_process_voice),
        )
        .route(
            "/api/ai/enhance-resume",
            post(ai_handlers::handle_enhance_resume),
        )
        .route(
            "/api/ai/test-connection",
            get(ai_handlers::handle_test_connection),
        )
        // Export bridge
        .route("/api/export/pdf", post(export_handlers::handle_export_pdf))
        .route(
            "/api/export/word",
            post(export_handlers::handle_export_word),
        )
        .with_state(state)
}
