use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use fieldsmith_generate::model::DEFAULT_RECORD_COUNT;
use fieldsmith_generate::{GenerationOptions, LookupMode, OutputFormat};

use crate::atomic::write_bytes_atomic;

pub const DEFAULT_SETTINGS_PATH: &str = "fieldsmith.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("toml encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),
}

/// Persistent CLI defaults read from `fieldsmith.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub record_count: usize,
    pub include_negative: bool,
    pub lookup_mode: LookupMode,
    pub format: OutputFormat,
    pub store_dir: PathBuf,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Write JSON log lines here instead of stderr.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            record_count: DEFAULT_RECORD_COUNT,
            include_negative: true,
            lookup_mode: LookupMode::Capped,
            format: OutputFormat::Json,
            store_dir: PathBuf::from(".fieldsmith/generations"),
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Settings {
    pub fn generation_options(&self) -> GenerationOptions {
        GenerationOptions {
            record_count: self.record_count,
            include_negative: self.include_negative,
            lookup_mode: self.lookup_mode,
            ..GenerationOptions::default()
        }
    }
}

pub fn load_or_create_settings(path: &Path) -> Result<Settings, SettingsError> {
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        return Ok(settings);
    }

    let settings = Settings::default();
    save_settings(path, &settings)?;
    Ok(settings)
}

pub fn save_settings(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    let encoded = toml::to_string_pretty(settings)?;
    write_bytes_atomic(path, encoded.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = std::env::temp_dir().join(format!("fieldsmith_settings_{}", uuid::Uuid::new_v4()));
        let path = dir.join(DEFAULT_SETTINGS_PATH);

        let settings = load_or_create_settings(&path).expect("create settings");
        assert_eq!(settings, Settings::default());
        assert!(path.exists());

        let reloaded = load_or_create_settings(&path).expect("reload settings");
        assert_eq!(reloaded, settings);
        std::fs::remove_dir_all(&dir).expect("cleanup");
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let settings: Settings =
            toml::from_str("record_count = 25\nlookup_mode = \"cycle\"\n").expect("parse");
        assert_eq!(settings.record_count, 25);
        assert_eq!(settings.lookup_mode, LookupMode::Cycle);
        assert!(settings.include_negative);
        assert_eq!(settings.format, OutputFormat::Json);

        let options = settings.generation_options();
        assert_eq!(options.record_count, 25);
        assert_eq!(options.seed, None);
    }
}
