//! write2audio configuration management.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const DEFAULT_BITRATE: &str = "40k";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Write2AudioConfig {
    /// Default TTS backend (google, espeak, say). None = platform pick.
    #[serde(default)]
    pub backend: Option<String>,

    /// Default narration language code.
    #[serde(default)]
    pub language: Option<String>,

    /// Default backend voice name.
    #[serde(default)]
    pub voice: Option<String>,

    /// AAC bitrate of the final audiobook. Voice needs far less than music.
    #[serde(default = "default_bitrate")]
    pub bitrate: String,

    /// Override of the backend's per-call chunk size, in characters.
    #[serde(default)]
    pub chunk_chars: Option<usize>,
}

fn default_bitrate() -> String {
    DEFAULT_BITRATE.to_string()
}

impl Default for Write2AudioConfig {
    fn default() -> Self {
        Self {
            backend: None,
            language: None,
            voice: None,
            bitrate: default_bitrate(),
            chunk_chars: None,
        }
    }
}

impl Write2AudioConfig {
    /// Get the config file path: ~/.config/write2audio/config.toml
    pub fn config_path() -> Result<PathBuf> {
        let home = std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE"))?;
        Ok(PathBuf::from(home)
            .join(".config")
            .join("write2audio")
            .join("config.toml"))
    }

    /// Load config from file, returning defaults if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Write2AudioConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }
}
