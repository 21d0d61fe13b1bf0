//! Workspace layout checks for the landing page.
//!
//! The full product keeps its document drop zone, prompt assets, vector-store
//! data and shared assets in fixed folders next to the service. The landing
//! page only verifies they exist and snapshots the environment; it never
//! creates them.

use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use crate::core::config::AppPaths;

/// Folders the chat and docs-manager pages expect at the workspace root.
pub const EXPECTED_MODULE_DIRS: [&str; 4] = ["ingestion", "llm", "storage", "utils"];

/// Names from [`EXPECTED_MODULE_DIRS`] that are not present as directories,
/// in declaration order. A plain file with a matching name counts as missing.
pub fn missing_modules(root: &Path) -> Vec<String> {
    EXPECTED_MODULE_DIRS
        .iter()
        .filter(|name| !root.join(name).is_dir())
        .map(|name| name.to_string())
        .collect()
}

/// Snapshot rendered in the diagnostics section and served on the JSON API.
#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceReport {
    pub root: String,
    pub entries: Vec<String>,
    pub missing_modules: Vec<String>,
    pub available_space_mb: Option<u64>,
    pub generated_at: String,
}

impl WorkspaceReport {
    pub fn modules_ok(&self) -> bool {
        self.missing_modules.is_empty()
    }
}

pub fn inspect_workspace(paths: &AppPaths) -> WorkspaceReport {
    let root = &paths.workspace_root;

    let mut entries = match fs::read_dir(root) {
        Ok(iter) => iter
            .flatten()
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect::<Vec<_>>(),
        Err(err) => {
            tracing::warn!("Failed to list {}: {}", root.display(), err);
            Vec::new()
        }
    };
    entries.sort();

    let available_space_mb = fs2::available_space(root)
        .ok()
        .map(|bytes| bytes / (1024 * 1024));

    WorkspaceReport {
        root: root.display().to_string(),
        entries,
        missing_modules: missing_modules(root),
        available_space_mb,
        generated_at: Utc::now().to_rfc3339(),
    }
}
