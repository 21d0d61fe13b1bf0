mod core;
mod credentials;
mod probes;
mod server;
mod state;
mod workspace;

use std::env;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;

use crate::core::config::AppPaths;
use crate::state::AppState;
use crate::workspace::missing_modules;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging comes up before settings are parsed so a bad config.yml still
    // gets its warning out.
    let paths = AppPaths::new();
    core::logging::init(&paths);
    let state = AppState::with_paths(paths);

    let missing = missing_modules(&state.paths.workspace_root);
    if missing.is_empty() {
        tracing::info!(
            "Workspace ready at {}",
            state.paths.workspace_root.display()
        );
    } else {
        tracing::warn!(
            "Workspace at {} is missing folders: {}",
            state.paths.workspace_root.display(),
            missing.join(", ")
        );
    }

    let port = env::var("PORT")
        .ok()
        .and_then(|val| val.parse::<u16>().ok())
        .unwrap_or(state.settings.server.port);
    let bind_addr = format!("{}:{}", state.settings.server.host, port);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;
    let addr = listener.local_addr()?;

    tracing::info!("Listening on http://{}", addr);

    let app: Router = server::router::router(state);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
