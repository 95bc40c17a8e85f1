use crate::error::{InvisinkError, Result};
use crate::stream::{DEFAULT_BUFFER_SIZE, DEFAULT_COMPRESSION_LEVEL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Settings for the codec and the binary, stored in `config.json`.
///
/// Compression settings only change how notes are written; any note decodes
/// regardless of the level or buffer size it was written with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InvisinkConfig {
    /// DEFLATE level, 0 (store) to 9 (smallest)
    #[serde(default = "default_compression_level")]
    pub compression_level: u32,

    /// Size in bytes of the intermediate buffer used by each stream call
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,

    /// Log filter handed to the logger, e.g. "warn" or "invisink=debug"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_compression_level() -> u32 {
    DEFAULT_COMPRESSION_LEVEL
}

fn default_buffer_size() -> usize {
    DEFAULT_BUFFER_SIZE
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for InvisinkConfig {
    fn default() -> Self {
        Self {
            compression_level: DEFAULT_COMPRESSION_LEVEL,
            buffer_size: DEFAULT_BUFFER_SIZE,
            log_level: default_log_level(),
        }
    }
}

impl InvisinkConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config = Self::load_unchecked(config_dir)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`load`](Self::load) but keeps out-of-range values, so a broken
    /// file can be inspected and repaired.
    pub fn load_unchecked<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: InvisinkConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        self.validate()?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.compression_level > 9 {
            return Err(InvisinkError::Config(format!(
                "compression_level must be between 0 and 9, got {}",
                self.compression_level
            )));
        }
        if self.buffer_size == 0 {
            return Err(InvisinkError::Config(
                "buffer_size must be greater than zero".to_string(),
            ));
        }
        if self.log_level.trim().is_empty() {
            return Err(InvisinkError::Config("log_level cannot be empty".to_string()));
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "compression-level" => Some(self.compression_level.to_string()),
            "buffer-size" => Some(self.buffer_size.to_string()),
            "log-level" => Some(self.log_level.clone()),
            _ => None,
        }
    }

    /// Set a key from its string form. The result is validated before it is
    /// applied.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut updated = self.clone();
        match key {
            "compression-level" => {
                updated.compression_level = value.parse().map_err(|_| {
                    InvisinkError::Config(format!("invalid compression level: {}", value))
                })?;
            }
            "buffer-size" => {
                updated.buffer_size = value.parse().map_err(|_| {
                    InvisinkError::Config(format!("invalid buffer size: {}", value))
                })?;
            }
            "log-level" => updated.log_level = value.to_string(),
            _ => return Err(InvisinkError::Config(format!("unknown key: {}", key))),
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["compression-level", "buffer-size", "log-level"]
    }
}
