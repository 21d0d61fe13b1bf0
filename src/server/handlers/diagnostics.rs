use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::probes::probe_dependencies;
use crate::state::AppState;
use crate::workspace::inspect_workspace;

/// JSON twin of the page's diagnostics expander, for scripts and the
/// desktop shell.
pub async fn get_diagnostics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let workspace = inspect_workspace(&state.paths);
    let credentials = state.credentials.load();
    let dependencies = probe_dependencies(&state.paths, &credentials);

    Json(json!({
        "workspace": workspace,
        "dependencies": dependencies,
    }))
}
