//! Roster configuration.
//!
//! Loaded from `~/.roster/config.toml`. Every field has a default pointing
//! at the hosted demo services, so a missing file is not an error.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Roster configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Base URL of the dashboard API.
    pub api_base_url: String,

    /// Base URL of the photo feed; the page size is appended as a path
    /// segment.
    pub photo_feed_url: String,

    /// Photos fetched per feed page.
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "https://second-brain-web.onrender.com/api".to_string(),
            photo_feed_url: "https://dog.ceo/api/breeds/image/random".to_string(),
            page_size: 5,
        }
    }
}

impl Config {
    /// Load config from `~/.roster/config.toml`, falling back to defaults
    /// when the file doesn't exist.
    pub fn load() -> Result<Self, String> {
        let Some(path) = Self::path() else {
            return Err("could not determine home directory".to_string());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The config file path: `~/.roster/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".roster").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.api_base_url, Config::default().api_base_url);
        assert_eq!(config.page_size, 5);
    }

    #[test]
    fn fields_override_individually() {
        let config: Config = toml::from_str("page-size = 10").unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.photo_feed_url, Config::default().photo_feed_url);
    }

    #[test]
    fn unknown_keys_fall_back_to_defaults() {
        // A typo'd key is ignored rather than erroring.
        let config: Config = toml::from_str("api-base = \"http://x\"").unwrap();
        assert_eq!(config.api_base_url, Config::default().api_base_url);
    }
}
