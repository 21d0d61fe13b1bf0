use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Service settings loaded from `config.yml` at the workspace root.
///
/// The file is optional; a missing or unparseable file degrades to defaults
/// with a logged warning so the landing page always comes up.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 8501,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Settings {
        if !path.exists() {
            return Settings::default();
        }

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                tracing::warn!(
                    "Failed to read {}: {}; using default settings",
                    path.display(),
                    err
                );
                return Settings::default();
            }
        };

        match serde_yaml::from_str::<Settings>(&contents) {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(
                    "Failed to parse {}: {}; using default settings",
                    path.display(),
                    err
                );
                Settings::default()
            }
        }
    }
}
