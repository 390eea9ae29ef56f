use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::config::BuildMode;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let mode = match state.config.mode {
        BuildMode::Development => "development",
        BuildMode::Production => "production",
    };
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "portal",
        "mode": mode,
        "api_base_url": state.api.base_url(),
    }))
}

/// GET /api/v1/upstream/health
/// Proxies the jobs API health check. No fallback: an unreachable API is an error.
pub async fn upstream_health_handler(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let health = state.api.upstream_health().await?;
    Ok(Json(json!({ "upstream": health })))
}
