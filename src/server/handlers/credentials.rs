use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::core::errors::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateCredentialsRequest {
    pub api_key: String,
}

/// Reports whether a key is stored without ever returning the key itself.
pub async fn get_credentials(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let credentials = state.credentials.load();
    Json(json!({
        "configured": credentials.is_configured(),
        "preview": credentials.masked_preview(),
    }))
}

pub async fn update_credentials(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpdateCredentialsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let stored = state.credentials.save(&payload.api_key)?;
    tracing::info!("OpenAI API key updated via API");
    Ok(Json(json!({
        "status": "success",
        "configured": !stored.is_empty(),
    })))
}
