use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::fs;
use std::sync::Arc;
use std::time::SystemTime;

use crate::core::errors::ApiError;
use crate::state::AppState;

/// Lists log files in the log directory, newest first.
pub async fn get_logs(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut logs: Vec<(String, Option<SystemTime>)> = Vec::new();
    if let Ok(entries) = fs::read_dir(&state.paths.log_dir) {
        for entry in entries.flatten() {
            let name = match entry.file_name().to_str() {
                Some(name) => name.to_string(),
                None => continue,
            };
            if !is_log_file(&name) {
                continue;
            }
            logs.push((name, entry.metadata().and_then(|m| m.modified()).ok()));
        }
    }

    logs.sort_by(|a, b| b.1.cmp(&a.1));

    let names: Vec<String> = logs.into_iter().map(|(name, _)| name).collect();
    Json(json!(names))
}

pub async fn get_log_content(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let safe_name = sanitize_log_filename(&filename)
        .ok_or_else(|| ApiError::BadRequest("Invalid log filename".to_string()))?;
    let path = state.paths.log_dir.join(safe_name);

    if !path.is_file() {
        return Err(ApiError::NotFound("Log file not found".to_string()));
    }

    let content = fs::read_to_string(path).map_err(ApiError::internal)?;
    Ok(content)
}

/// Daily rotation appends the date after the `.log` prefix, so both
/// `home.log` and `home.log.2026-08-23` must match.
fn is_log_file(name: &str) -> bool {
    name.ends_with(".log") || name.contains(".log.")
}

/// Accepts a bare file name only; anything resolving outside the log
/// directory is rejected.
fn sanitize_log_filename(filename: &str) -> Option<&str> {
    let mut components = std::path::Path::new(filename).components();
    let only = match (components.next(), components.next()) {
        (Some(std::path::Component::Normal(name)), None) => name.to_str()?,
        _ => return None,
    };
    if only == filename && !only.contains('\\') {
        Some(only)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_file_names_are_accepted() {
        assert_eq!(sanitize_log_filename("home.log"), Some("home.log"));
        assert_eq!(
            sanitize_log_filename("home.log.2026-08-23"),
            Some("home.log.2026-08-23")
        );
    }

    #[test]
    fn traversal_and_absolute_paths_are_rejected() {
        assert_eq!(sanitize_log_filename(".."), None);
        assert_eq!(sanitize_log_filename("../secret.txt"), None);
        assert_eq!(sanitize_log_filename("/etc/passwd"), None);
        assert_eq!(sanitize_log_filename("sub/home.log"), None);
        assert_eq!(sanitize_log_filename("..\\secret.txt"), None);
    }

    #[test]
    fn rotation_suffixes_count_as_log_files() {
        assert!(is_log_file("home.log"));
        assert!(is_log_file("home.log.2026-08-23"));
        assert!(!is_log_file("notes.txt"));
        assert!(!is_log_file("login.rs"));
    }
}
