use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;

use crate::probes::probe_dependencies;
use crate::server::page::{Flash, HomePage};
use crate::state::AppState;
use crate::workspace::inspect_workspace;

// Both fields stay strings so hand-edited query values never fail
// extraction; only presence matters for `saved`.
#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    saved: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiKeyForm {
    pub api_key: String,
}

/// Renders the landing page from a fresh snapshot of the workspace,
/// dependency probes and stored credentials.
pub async fn home(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HomeQuery>,
) -> Html<String> {
    let workspace = inspect_workspace(&state.paths);
    let credentials = state.credentials.load();
    let dependencies = probe_dependencies(&state.paths, &credentials);

    let flash = if query.saved.is_some() {
        Some(Flash::Saved)
    } else {
        query.error.map(Flash::SaveFailed)
    };

    let page = HomePage {
        workspace,
        dependencies,
        credentials,
        flash,
    };
    Html(page.render())
}

/// Persists the submitted key, then redirects back to `/` so a browser
/// refresh never re-submits the form. The outcome travels in the query
/// string and surfaces as a banner on the next render.
pub async fn save_api_key(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ApiKeyForm>,
) -> Redirect {
    match state.credentials.save(&form.api_key) {
        Ok(_) => Redirect::to("/?saved=1"),
        Err(err) => {
            tracing::error!("Failed to persist the OpenAI API key: {}", err);
            let message = urlencoding::encode(&err.to_string()).into_owned();
            Redirect::to(&format!("/?error={}", message))
        }
    }
}
