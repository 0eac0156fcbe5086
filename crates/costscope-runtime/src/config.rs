use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the assistant's log tree lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub log_root: PathBuf,
}

impl Config {
    /// Resolve the log root by priority:
    /// 1. Explicit path (with tilde expansion)
    /// 2. COSTSCOPE_ROOT environment variable (with tilde expansion)
    /// 3. The assistant's default location under the home directory
    pub fn resolve(explicit: Option<&str>) -> Result<Self> {
        Ok(Self {
            log_root: resolve_log_root(explicit)?,
        })
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Self::resolve(None);
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

pub fn resolve_log_root(explicit: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("COSTSCOPE_ROOT") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(home) = dirs::home_dir() {
        return Ok(home.join(".claude").join("projects"));
    }

    Err(Error::Config(
        "could not determine log root: no home directory found".to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_path_wins() {
        let config = Config::resolve(Some("/var/logs/assistant")).unwrap();
        assert_eq!(config.log_root, PathBuf::from("/var/logs/assistant"));
    }

    #[test]
    fn tilde_expands_to_home() {
        let config = Config::resolve(Some("~/logs")).unwrap();
        assert!(!config.log_root.to_string_lossy().starts_with('~'));
        assert!(config.log_root.ends_with("logs"));
    }

    #[test]
    fn config_save_and_load_round_trips() -> Result<()> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            log_root: PathBuf::from("/data/projects"),
        };
        config.save_to(&path)?;
        assert!(path.exists());

        let loaded = Config::load_from(&path)?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn load_missing_file_falls_back_to_resolution() -> Result<()> {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("nonexistent.toml"))?;
        assert!(!config.log_root.as_os_str().is_empty());
        Ok(())
    }
}
