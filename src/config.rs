use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/talenttrack.json";
const DEFAULT_STORE_PATH: &str = "data/session.db";
const DEFAULT_LOCATION: &str = "interview-room.html";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// SQLite file holding the session store.
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
    /// Page opened when no location is given on the command line.
    #[serde(default = "default_location")]
    pub default_location: String,
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            default_location: default_location(),
        }
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

pub fn save_config(path: &str, config: &AppConfig) -> std::io::Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)
}

/// Make `href` the page opened on the next start.
pub fn remember_location(path: &str, href: &str) {
    let mut config = load_config(path);
    if config.default_location == href {
        return;
    }
    config.default_location = href.to_string();

    if let Err(err) = save_config(path, &config) {
        log::error!("Failed to write config {}: {err}", path);
    } else {
        log::debug!("Remembered {} as start page in {}", href, path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let config = load_config(path.to_str().unwrap());
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.store_path, PathBuf::from("data/session.db"));
        assert_eq!(config.default_location, "interview-room.html");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("talenttrack.json");
        fs::write(&path, r#"{"default_location":"messaging.html?view=company"}"#).unwrap();

        let config = load_config(path.to_str().unwrap());
        assert_eq!(config.default_location, "messaging.html?view=company");
        assert_eq!(config.store_path, PathBuf::from("data/session.db"));
    }

    #[test]
    fn malformed_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("talenttrack.json");
        fs::write(&path, "{ nope").unwrap();
        assert_eq!(load_config(path.to_str().unwrap()), AppConfig::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("talenttrack.json");
        let path = path.to_str().unwrap();
        let config = AppConfig {
            store_path: PathBuf::from("/tmp/profile.db"),
            default_location: "jobs.html".to_string(),
        };
        save_config(path, &config).unwrap();
        assert_eq!(load_config(path), config);
    }

    #[test]
    fn remembered_location_keeps_store_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("talenttrack.json");
        let path = path.to_str().unwrap();
        fs::write(path, r#"{"store_path":"/srv/tt.db"}"#).unwrap();

        remember_location(path, "jobs.html?view=freelancer");
        let config = load_config(path);
        assert_eq!(config.default_location, "jobs.html?view=freelancer");
        assert_eq!(config.store_path, PathBuf::from("/srv/tt.db"));
    }
}
