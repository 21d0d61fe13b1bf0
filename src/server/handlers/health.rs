use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::state::AppState;
use crate::workspace::missing_modules;

pub async fn health(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "lexora-home",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn get_status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let missing = missing_modules(&state.paths.workspace_root);
    let credentials = state.credentials.load();
    Json(json!({
        "initialized": true,
        "workspace_ok": missing.is_empty(),
        "missing_modules": missing,
        "api_key_configured": credentials.is_configured(),
    }))
}
