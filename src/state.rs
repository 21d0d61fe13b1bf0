use std::sync::Arc;

use crate::core::config::{AppPaths, Settings};
use crate::credentials::CredentialStore;

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    pub paths: Arc<AppPaths>,
    pub settings: Settings,
    pub credentials: CredentialStore,
}

impl AppState {
    pub fn with_paths(paths: AppPaths) -> Arc<Self> {
        let paths = Arc::new(paths);
        let settings = Settings::load(&paths.settings_path);
        let credentials = CredentialStore::new(&paths);

        Arc::new(AppState {
            paths,
            settings,
            credentials,
        })
    }
}
