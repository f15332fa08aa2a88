use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{OutlayError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub data_dir: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir().to_string_lossy().to_string(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("outlay")
}

fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Documents")
        .join("outlay")
}

pub fn load_settings() -> Settings {
    let path = settings_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        Settings::default()
    }
}

pub fn save_settings(settings: &Settings) -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .map_err(|e| OutlayError::Settings(format!("cannot create {}: {e}", dir.display())))?;
    let json = serde_json::to_string_pretty(settings)?;
    std::fs::write(settings_path(), json)
        .map_err(|e| OutlayError::Settings(format!("cannot write settings: {e}")))?;
    Ok(())
}

/// Resolve the active data directory. The OUTLAY_DATA_DIR environment
/// variable wins over the settings file so tests and scripts can point at
/// a throwaway ledger.
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("OUTLAY_DATA_DIR") {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }
    PathBuf::from(load_settings().data_dir)
}
