//! Unified path management for Familia client files.
//!
//! All paths are resolved through AppPaths from the version-migrate crate so
//! every store agrees on the platform directory layout.

use familia_core::error::FamiliaError;
use std::path::PathBuf;
use version_migrate::AppPaths;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for FamiliaError {
    fn from(err: PathError) -> Self {
        FamiliaError::config(err.to_string())
    }
}

/// Path resolver for the Familia config directory.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/familia/
/// ├── config.toml     # ClientConfig (API URL, poll intervals)
/// └── session.toml    # Warm-start session snapshot
/// ```
///
/// Passing a base directory overrides the platform location (used by tests
/// and the CLI `--config-dir` flag).
#[derive(Debug, Clone, Default)]
pub struct FamiliaPaths {
    base_override: Option<PathBuf>,
}

impl FamiliaPaths {
    pub fn new(base_override: Option<PathBuf>) -> Self {
        Self { base_override }
    }

    /// Returns the Familia configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/familia/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(base) = &self.base_override {
            return Ok(base.clone());
        }
        AppPaths::new("familia")
            .config_dir()
            .map_err(|_| PathError::HomeDirNotFound)
    }

    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    pub fn session_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("session.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_dir_ends_with_app_name() {
        if let Ok(dir) = FamiliaPaths::default().config_dir() {
            assert!(dir.ends_with("familia"));
        }
    }

    #[test]
    fn test_override_base() {
        let paths = FamiliaPaths::new(Some(PathBuf::from("/tmp/familia-test")));
        assert_eq!(
            paths.config_file().unwrap(),
            PathBuf::from("/tmp/familia-test/config.toml")
        );
        assert_eq!(
            paths.session_file().unwrap(),
            PathBuf::from("/tmp/familia-test/session.toml")
        );
    }
}
