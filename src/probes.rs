//! Readiness probes for the runtime dependencies of the full product.
//!
//! The chat and docs-manager pages need a prompt pipeline, a vector store and
//! an OpenAI client. The landing page runs one cheap local check per
//! dependency and reports a structured result; a failed probe is a warning,
//! never an error.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::core::config::AppPaths;
use crate::credentials::Credentials;

const WRITE_TEST_FILE: &str = ".write_test";

#[derive(Debug, Clone, Serialize)]
pub struct DependencyStatus {
    pub name: &'static str,
    pub available: bool,
    pub detail: String,
}

impl DependencyStatus {
    fn ok(name: &'static str, detail: impl Into<String>) -> Self {
        DependencyStatus {
            name,
            available: true,
            detail: detail.into(),
        }
    }

    fn unavailable(name: &'static str, detail: impl Into<String>) -> Self {
        DependencyStatus {
            name,
            available: false,
            detail: detail.into(),
        }
    }
}

/// Runs every probe. Always returns one entry per dependency, in a stable
/// order, regardless of outcomes.
pub fn probe_dependencies(paths: &AppPaths, credentials: &Credentials) -> Vec<DependencyStatus> {
    vec![
        probe_prompt_pipeline(&paths.workspace_root),
        probe_vector_store(&paths.workspace_root),
        probe_openai_api(credentials),
    ]
}

fn probe_prompt_pipeline(root: &Path) -> DependencyStatus {
    let llm_dir = root.join("llm");
    match fs::read_dir(&llm_dir) {
        Ok(iter) => {
            let count = iter.flatten().count();
            if count > 0 {
                DependencyStatus::ok(
                    "prompt-pipeline",
                    format!("llm/ holds {} asset(s)", count),
                )
            } else {
                DependencyStatus::unavailable("prompt-pipeline", "llm/ is empty")
            }
        }
        Err(err) => {
            DependencyStatus::unavailable("prompt-pipeline", format!("llm/ is unreadable: {}", err))
        }
    }
}

fn probe_vector_store(root: &Path) -> DependencyStatus {
    let storage_dir = root.join("storage");
    if !storage_dir.is_dir() {
        return DependencyStatus::unavailable("vector-store", "storage/ is missing");
    }

    let test_path = storage_dir.join(WRITE_TEST_FILE);
    match fs::write(&test_path, b"test") {
        Ok(()) => {
            let _ = fs::remove_file(&test_path);
            DependencyStatus::ok("vector-store", "storage/ is writable")
        }
        Err(err) => DependencyStatus::unavailable(
            "vector-store",
            format!("storage/ is not writable: {}", err),
        ),
    }
}

fn probe_openai_api(credentials: &Credentials) -> DependencyStatus {
    if credentials.is_configured() {
        DependencyStatus::ok("openai-api", "API key configured")
    } else {
        DependencyStatus::unavailable("openai-api", "OPENAI_API_KEY is not set")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> Credentials {
        Credentials {
            openai_api_key: "sk-test123".to_string(),
        }
    }

    #[test]
    fn always_reports_three_dependencies_in_stable_order() {
        let dir = tempfile::tempdir().unwrap();
        let paths = AppPaths::from_root(dir.path().to_path_buf());

        let statuses = probe_dependencies(&paths, &Credentials::default());

        let names: Vec<&str> = statuses.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["prompt-pipeline", "vector-store", "openai-api"]);
    }

    #[test]
    fn ready_workspace_passes_all_probes() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("llm")).unwrap();
        fs::write(dir.path().join("llm").join("system.txt"), "prompt").unwrap();
        fs::create_dir(dir.path().join("storage")).unwrap();
        let paths = AppPaths::from_root(dir.path().to_path_buf());

        let statuses = probe_dependencies(&paths, &configured());

        assert!(statuses.iter().all(|s| s.available));
    }

    #[test]
    fn missing_folders_fail_with_details() {
        let dir = tempfile::tempdir().unwrap();
        let paths = AppPaths::from_root(dir.path().to_path_buf());

        let statuses = probe_dependencies(&paths, &configured());

        let pipeline = &statuses[0];
        assert!(!pipeline.available);
        assert!(pipeline.detail.contains("llm/"));

        let store = &statuses[1];
        assert!(!store.available);
        assert_eq!(store.detail, "storage/ is missing");
    }

    #[test]
    fn empty_llm_dir_is_not_ready() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("llm")).unwrap();
        let paths = AppPaths::from_root(dir.path().to_path_buf());

        let statuses = probe_dependencies(&paths, &configured());

        assert!(!statuses[0].available);
        assert_eq!(statuses[0].detail, "llm/ is empty");
    }

    #[test]
    fn write_test_file_is_cleaned_up() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("storage")).unwrap();
        let paths = AppPaths::from_root(dir.path().to_path_buf());

        let statuses = probe_dependencies(&paths, &configured());

        assert!(statuses[1].available);
        assert!(!dir.path().join("storage").join(WRITE_TEST_FILE).exists());
    }

    #[test]
    fn missing_key_fails_the_api_probe() {
        let dir = tempfile::tempdir().unwrap();
        let paths = AppPaths::from_root(dir.path().to_path_buf());

        let statuses = probe_dependencies(&paths, &Credentials::default());

        assert!(!statuses[2].available);
        assert_eq!(statuses[2].detail, "OPENAI_API_KEY is not set");
    }
}
