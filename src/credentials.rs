//! Dotfile-backed credential store for the OpenAI API key.
//!
//! The key lives as a single `OPENAI_API_KEY=...` line in `.env` at the
//! workspace root. Saving rewrites the whole file through a temp file and an
//! atomic rename, so a failed write never corrupts the previous value.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::core::config::AppPaths;
use crate::core::errors::ApiError;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

const REDACT_PLACEHOLDER: &str = "****";
const PREVIEW_PREFIX_CHARS: usize = 3;

/// Typed view of the stored credential. Empty string means "not configured".
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub openai_api_key: String,
}

impl Credentials {
    pub fn is_configured(&self) -> bool {
        !self.openai_api_key.is_empty()
    }

    /// Short masked form for API responses; the raw key never leaves the
    /// store through JSON. Keys no longer than the prefix would be shown in
    /// full, so those get the bare placeholder.
    pub fn masked_preview(&self) -> Option<String> {
        if !self.is_configured() {
            return None;
        }
        if self.openai_api_key.chars().count() <= PREVIEW_PREFIX_CHARS {
            return Some(REDACT_PLACEHOLDER.to_string());
        }
        let prefix: String = self
            .openai_api_key
            .chars()
            .take(PREVIEW_PREFIX_CHARS)
            .collect();
        Some(format!("{}{}", prefix, REDACT_PLACEHOLDER))
    }
}

#[derive(Debug, Clone)]
pub struct CredentialStore {
    env_path: PathBuf,
}

impl CredentialStore {
    pub fn new(paths: &AppPaths) -> Self {
        CredentialStore {
            env_path: paths.env_path.clone(),
        }
    }

    pub fn env_path(&self) -> &Path {
        &self.env_path
    }

    /// Reads the credential from the dotfile, falling back to the process
    /// environment when the file is absent or lacks the key. The process
    /// environment is never written to.
    pub fn load(&self) -> Credentials {
        let openai_api_key = dotfile_value(&self.env_path)
            .or_else(|| env::var(API_KEY_VAR).ok())
            .unwrap_or_default();
        Credentials { openai_api_key }
    }

    /// Persists the trimmed value as the sole line of the dotfile and returns
    /// what was stored. Any previous content, including unrelated keys, is
    /// replaced. On error the existing file is left untouched.
    ///
    /// Values with embedded control characters are refused: a newline in the
    /// value would smuggle extra lines into the single-line dotfile.
    pub fn save(&self, value: &str) -> Result<String, ApiError> {
        let trimmed = value.trim();
        if trimmed.chars().any(char::is_control) {
            return Err(ApiError::BadRequest(
                "API key must not contain control characters".to_string(),
            ));
        }
        let line = format!("{}={}\n", API_KEY_VAR, trimmed);

        let tmp_path = self
            .env_path
            .with_file_name(format!(".env.{}.part", Uuid::new_v4()));
        fs::write(&tmp_path, &line).map_err(ApiError::internal)?;
        if let Err(err) = fs::rename(&tmp_path, &self.env_path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(ApiError::internal(err));
        }

        Ok(trimmed.to_string())
    }
}

fn dotfile_value(path: &Path) -> Option<String> {
    let iter = dotenvy::from_path_iter(path).ok()?;
    for item in iter {
        match item {
            Ok((key, value)) if key == API_KEY_VAR => return Some(value),
            Ok(_) => {}
            Err(err) => {
                tracing::debug!("Skipping unreadable line in {}: {}", path.display(), err);
            }
        }
    }
    None
}
