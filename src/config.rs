use crate::asr::MIN_CONFIDENCE;
use crate::error::{DictateError, DictateResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "TUXDICTATE_CONFIG";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Text
    pub numbers_as_digits: bool,
    pub numbers_use_separator: bool,

    // Speech
    pub vosk_model_path: String,
    pub sample_rate: u32,
    pub min_confidence: f32,

    // Audio
    pub audio_device: Option<usize>,

    // Meta
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            numbers_as_digits: true,
            numbers_use_separator: false,
            vosk_model_path: dirs::data_dir()
                .unwrap_or_default()
                .join("tuxdictate/models/vosk-model-small-en-us")
                .to_string_lossy()
                .to_string(),
            sample_rate: 16000,
            min_confidence: MIN_CONFIDENCE,
            audio_device: None,
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    /// Load config from the default location, or defaults
    pub fn load() -> DictateResult<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from `path`
    ///
    /// A missing file yields defaults. A corrupt file is moved aside to
    /// `*.json.corrupt` and defaults are used.
    pub fn load_from(path: &Path) -> DictateResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                let backup_path = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup_path);
                Ok(Self::default())
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> DictateResult<()> {
        self.save_to(&config_path())
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> DictateResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check values that would break audio capture or recognition
    pub fn validate(&self) -> DictateResult<()> {
        if self.sample_rate == 0 {
            return Err(DictateError::Config(
                "sample_rate must be positive".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(DictateError::Config(format!(
                "min_confidence must be between 0 and 1, got {}",
                self.min_confidence
            )));
        }
        Ok(())
    }
}

/// Resolved config file location
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tuxdictate")
        .join("config.json")
}
