use crate::error::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const CONFIG_DIR_ENV: &str = "MEDIALIB_CONFIG_DIR";
const DEFAULT_PROMPT: &str = "> ";

/// Configuration for medialib, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibraryConfig {
    /// Catalogs loaded when the prompt starts
    #[serde(default)]
    pub autoload: Vec<String>,

    /// Indent JSON written by `save`
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_pretty() -> bool {
    true
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            autoload: Vec::new(),
            pretty: default_pretty(),
            prompt: default_prompt(),
        }
    }
}

impl LibraryConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: LibraryConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }
}

/// Picks the config directory: an explicit one, then `MEDIALIB_CONFIG_DIR`,
/// then the platform default.
pub fn config_dir(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = explicit {
        return Some(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("", "", "medialib").map(|dirs| dirs.config_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LibraryConfig::default();
        assert!(config.autoload.is_empty());
        assert!(config.pretty);
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = LibraryConfig::load(temp.path()).unwrap();
        assert_eq!(config, LibraryConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested");

        let config = LibraryConfig {
            autoload: vec!["~/media.json".to_string()],
            pretty: false,
            prompt: "media> ".to_string(),
        };
        config.save(&dir).unwrap();

        assert_eq!(LibraryConfig::load(&dir).unwrap(), config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"pretty": false}"#).unwrap();

        let config = LibraryConfig::load(temp.path()).unwrap();
        assert!(!config.pretty);
        assert_eq!(config.prompt, "> ");
    }

    #[test]
    fn test_explicit_config_dir_wins() {
        let dir = PathBuf::from("/tmp/medialib-explicit");
        assert_eq!(config_dir(Some(dir.as_path())), Some(dir.clone()));
    }
}
