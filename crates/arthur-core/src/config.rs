use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::ArthurError;
use crate::package_manager::PackageManager;
use crate::scaffold::FailurePolicy;

/// Environment variable that points at an alternate config file.
pub const CONFIG_ENV: &str = "ARTHUR_CONFIG";

/// User configuration loaded from `~/.config/arthur/config.toml`.
///
/// All fields have defaults so the config file is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Used when `--yarn` is not passed.
    #[serde(default)]
    pub package_manager: PackageManager,
    #[serde(default)]
    pub on_failure: FailurePolicy,
}

impl Config {
    pub fn load() -> Result<Self, ArthurError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from an explicit path; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ArthurError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|e| ArthurError::Config {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        toml::from_str(&content).map_err(|e| ArthurError::Config {
            path: path.to_path_buf(),
            source: Box::new(e),
        })
    }

    /// `$ARTHUR_CONFIG` if set, else the platform config directory.
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("", "", "arthur").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::load_from(&tmp.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.package_manager, PackageManager::Npm);
        assert_eq!(config.on_failure, FailurePolicy::Continue);
    }

    #[test]
    fn reads_all_fields() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "package_manager = \"yarn\"\non_failure = \"abort\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.package_manager, PackageManager::Yarn);
        assert_eq!(config.on_failure, FailurePolicy::Abort);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "on_failure = \"abort\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.package_manager, PackageManager::Npm);
        assert_eq!(config.on_failure, FailurePolicy::Abort);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "package_manager = \"pnpm\"\n").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ArthurError::Config { .. })
        ));
    }
}
