//
//  tweet-poster
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Loads and saves the CLI's TOML configuration file. The file only ever
//! holds non-secret settings; credentials come from flags or the `TWITTER_*`
//! environment variables.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/tweet/config.toml`
//! - **macOS**: `~/Library/Application Support/tweet/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\tweet\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [api]
//! version = "2"
//! legacy_base_url = "https://api.twitter.com/1.1"
//! tweets_base_url = "https://api.twitter.com/2"
//! timeout_secs = 30
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tweet_poster::config::Config;
//!
//! let mut config = Config::load()?;
//! config.set("version", "2")?;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod endpoints;

pub use endpoints::*;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::ApiVersion;

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const VALID_KEYS: &[&str] = &["version", "legacy_base_url", "tweets_base_url", "timeout_secs"];

/// Global configuration container.
///
/// # Examples
///
/// ```rust
/// use tweet_poster::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.api.version, "1");
/// assert_eq!(config.api.timeout_secs, 30);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// API selection and endpoint settings.
    #[serde(default)]
    pub api: ApiConfig,
}

/// API selection and endpoint settings.
///
/// # Default Values
///
/// | Field | Default |
/// |-------|---------|
/// | `version` | `"1"` |
/// | `legacy_base_url` | [`LEGACY_BASE_URL`] |
/// | `tweets_base_url` | [`TWEETS_BASE_URL`] |
/// | `timeout_secs` | [`DEFAULT_TIMEOUT_SECS`] |
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    /// Initial API version, in any form [`ApiVersion`] parses.
    ///
    /// Kept as text so a hand-edited file with a bad value is reported as an
    /// invalid version rather than a TOML schema error.
    #[serde(default = "default_version")]
    pub version: String,

    /// Base URL of the v1.1 API.
    #[serde(default = "default_legacy_base_url")]
    pub legacy_base_url: String,

    /// Base URL of the v2 API.
    #[serde(default = "default_tweets_base_url")]
    pub tweets_base_url: String,

    /// Request timeout applied to both clients.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_version() -> String {
    ApiVersion::default().to_string()
}

fn default_legacy_base_url() -> String {
    LEGACY_BASE_URL.to_string()
}

fn default_tweets_base_url() -> String {
    TWEETS_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            legacy_base_url: default_legacy_base_url(),
            tweets_base_url: default_tweets_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Returns the configured timeout as a [`Duration`].
    ///
    /// A zero timeout from a hand-edited file falls back to
    /// [`DEFAULT_TIMEOUT_SECS`].
    pub fn timeout(&self) -> Duration {
        if self.timeout_secs == 0 {
            tracing::warn!(
                "timeout_secs = 0 is not usable, using {}s",
                DEFAULT_TIMEOUT_SECS
            );
            return Duration::from_secs(DEFAULT_TIMEOUT_SECS);
        }
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Loads configuration from the default location.
    ///
    /// A missing file is not an error; defaults are used.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to an explicit path, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the path to the configuration file.
    ///
    /// The file may not exist; this only returns where it would be.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Gets a configuration value by key.
    ///
    /// Returns `None` for unknown keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tweet_poster::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.get("version"), Some("1".to_string()));
    /// assert_eq!(config.get("editor"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "version" => Some(self.api.version.clone()),
            "legacy_base_url" => Some(self.api.legacy_base_url.clone()),
            "tweets_base_url" => Some(self.api.tweets_base_url.clone()),
            "timeout_secs" => Some(self.api.timeout_secs.to_string()),
            _ => None,
        }
    }

    /// Sets a configuration value by key after validating it.
    ///
    /// Values are stored in canonical form: versions as `1`/`2`, URLs without
    /// trailing slashes.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown keys or invalid values; the configuration
    /// is left unchanged in that case.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "version" => {
                let version: ApiVersion = value.parse()?;
                self.api.version = version.to_string();
            }
            "legacy_base_url" => self.api.legacy_base_url = normalize_base_url(value)?,
            "tweets_base_url" => self.api.tweets_base_url = normalize_base_url(value)?,
            "timeout_secs" => {
                let secs: u64 = value
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid value for timeout_secs: '{}'", value))?;
                if secs == 0 {
                    bail!("timeout_secs must be greater than zero");
                }
                self.api.timeout_secs = secs;
            }
            _ => bail!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key,
                VALID_KEYS.join(", ")
            ),
        }
        Ok(())
    }
}
