use sqlx::PgPool;

use crate::ai::client::AiClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. Both members are long-lived handles that are cheap to clone;
/// handlers hold no other cross-request state.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub ai: AiClient,
}
