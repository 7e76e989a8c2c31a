//! ConfigStore - Local Configuration Storage
//!
//! TOML files under the platform config directory; logs go to the platform
//! data directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Serialize, de::DeserializeOwned};

use crate::constants::APP_NAME;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME).context("Could not determine home directory")
}

fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    Ok(())
}

/// Get the application config directory
pub fn app_config_dir() -> Result<PathBuf> {
    let dir = project_dirs()?.config_dir().to_path_buf();
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Get the directory for rolling log files
pub fn app_log_dir() -> Result<PathBuf> {
    let dir = project_dirs()?.data_local_dir().join("logs");
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Load a TOML config file from the config directory
pub fn load_config<T: DeserializeOwned + Default>(filename: &str) -> Result<T> {
    load_from(&app_config_dir()?.join(filename))
}

/// Save a TOML config file into the config directory
pub fn save_config<T: Serialize>(filename: &str, config: &T) -> Result<()> {
    save_to(&app_config_dir()?.join(filename), config)
}

/// Load a TOML file; a missing file yields the default value
pub fn load_from<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let config: T =
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// Write a value as pretty TOML
pub fn save_to<T: Serialize>(path: &Path, config: &T) -> Result<()> {
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::AppConfig;
    use crate::i18n::Locale;

    #[test]
    fn test_missing_file_yields_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config: AppConfig = load_from(&dir.path().join("config.toml")).expect("load");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");

        let mut config = AppConfig::default();
        config.api.base_url = "https://explorer.example.org".to_string();
        config.api.auth_token = Some("secret".to_string());
        config.ui.locale = Some(Locale::ZhCN);

        save_to(&path, &config).expect("save");
        let loaded: AppConfig = load_from(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api\nbase_url = ").expect("write");

        let result: Result<AppConfig> = load_from(&path);
        assert!(result.is_err());
    }
}
