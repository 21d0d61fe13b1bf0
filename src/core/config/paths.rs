use std::env;
use std::fs;
use std::path::PathBuf;

/// Filesystem layout of a Lexora workspace. Everything the landing page
/// touches lives under one root: the expected module folders, the `.env`
/// dotfile, the `config.yml` settings and the rolling logs.
#[derive(Debug, Clone)]
pub struct AppPaths {
    pub workspace_root: PathBuf,
    pub log_dir: PathBuf,
    pub env_path: PathBuf,
    pub settings_path: PathBuf,
}

impl AppPaths {
    pub fn new() -> Self {
        Self::from_root(discover_workspace_root())
    }

    /// Builds the layout over an explicit root. Used by tests and by anything
    /// that wants to bypass discovery.
    pub fn from_root(workspace_root: PathBuf) -> Self {
        let log_dir = workspace_root.join("logs");
        let env_path = workspace_root.join(".env");
        let settings_path = workspace_root.join("config.yml");

        let _ = fs::create_dir_all(&log_dir);

        AppPaths {
            workspace_root,
            log_dir,
            env_path,
            settings_path,
        }
    }
}

fn discover_workspace_root() -> PathBuf {
    if let Ok(root) = env::var("LEXORA_ROOT") {
        return PathBuf::from(root);
    }

    if let Ok(cwd) = env::current_dir() {
        if cwd.join("config.yml").exists() || cwd.join("storage").is_dir() {
            return cwd;
        }
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    if manifest_dir.join("config.yml").exists() {
        return manifest_dir;
    }

    env::current_dir().unwrap_or(manifest_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_root_derives_all_paths_under_root() {
        let dir = tempfile::tempdir().unwrap();
        let paths = AppPaths::from_root(dir.path().to_path_buf());

        assert_eq!(paths.workspace_root, dir.path());
        assert_eq!(paths.env_path, dir.path().join(".env"));
        assert_eq!(paths.settings_path, dir.path().join("config.yml"));
        assert_eq!(paths.log_dir, dir.path().join("logs"));
    }

    #[test]
    fn from_root_creates_the_log_dir() {
        let dir = tempfile::tempdir().unwrap();
        let paths = AppPaths::from_root(dir.path().to_path_buf());

        assert!(paths.log_dir.is_dir());
    }
}
