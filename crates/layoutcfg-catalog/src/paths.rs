//! Project file path resolution.

use std::path::PathBuf;

/// Environment variable for overriding the project file.
pub const PROJECT_ENV_VAR: &str = "LAYOUTCFG_PROJECT";

/// File name looked up in the working directory.
pub const DEFAULT_PROJECT_FILE: &str = "layoutcfg.toml";

/// Get the project file path.
///
/// Resolution order:
/// 1. `LAYOUTCFG_PROJECT` environment variable
/// 2. `layoutcfg.toml` in the working directory
pub fn default_project_path() -> PathBuf {
    if let Ok(path) = std::env::var(PROJECT_ENV_VAR)
        && !path.trim().is_empty()
    {
        return PathBuf::from(path);
    }
    PathBuf::from(DEFAULT_PROJECT_FILE)
}
