use crate::error::{Result, TodoError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".todos.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoConfig {
    #[serde(default)]
    pub session: SessionSettings,

    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_true")]
    pub seed: bool,

    #[serde(default)]
    pub sort_on_start: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_true")]
    pub color: bool,

    #[serde(default = "default_true")]
    pub numbered: bool,

    #[serde(default = "default_true")]
    pub auto_list: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            seed: default_true(),
            sort_on_start: false,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            color: default_true(),
            numbered: default_true(),
            auto_list: default_true(),
        }
    }
}

impl TodoConfig {
    /// Resolves the configuration for a session started in `start_path`.
    ///
    /// An explicit path must exist. Otherwise the nearest `.todos.yml` above
    /// `start_path` wins, then the user config file, then built-in defaults.
    pub fn load(explicit: Option<&Path>, start_path: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(TodoError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::load_file(path);
        }

        if let Some(path) = Self::find_config_file(start_path) {
            return Self::load_file(&path);
        }

        match Self::user_config_file() {
            Some(path) if path.exists() => Self::load_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: TodoConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn user_config_file() -> Option<PathBuf> {
        ProjectDirs::from("", "", "todos").map(|dirs| dirs.config_dir().join("config.yml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = TodoConfig::default();
        assert!(config.session.seed);
        assert!(!config.session.sort_on_start);
        assert!(config.display.color);
        assert!(config.display.numbered);
        assert!(config.display.auto_list);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "session:\n  sort_on_start: true\n").unwrap();

        let config = TodoConfig::load_file(&path).unwrap();
        assert!(config.session.seed);
        assert!(config.session.sort_on_start);
        assert!(config.display.color);
    }

    #[test]
    fn test_empty_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "").unwrap();

        let config = TodoConfig::load_file(&path).unwrap();
        assert!(config.session.seed);
    }

    #[test]
    fn test_find_config_file_searches_upward() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "display:\n  color: false\n").unwrap();

        assert_eq!(TodoConfig::find_config_file(&nested), Some(path));
        let config = TodoConfig::load(None, &nested).unwrap();
        assert!(!config.display.color);
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.yml");
        let err = TodoConfig::load(Some(&missing), temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.yml");
        std::fs::write(&path, "session: [not, a, map").unwrap();
        assert!(TodoConfig::load(Some(&path), temp_dir.path()).is_err());
    }
}
