//! # Configuration Management Module
//!
//! Typed TOML configuration for the fortune cookie binary and library consumers.
//! Every section has defaults, so a missing file or a partial file both work.
//!
//! ## Configuration Structure
//!
//! - [`SiteConfig`] - canonical page URL and crawler metadata defaults
//! - [`PreferencesConfig`] - where the chosen locale is persisted
//! - [`ShareConfig`] - UI timing of share actions
//! - [`PreviewConfig`] - where generated preview images are written
//! - [`LoggingConfig`] - log level and optional log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use fortune_cookie::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("fortune-cookie.toml").await?;
//!     println!("Base URL: {}", config.site.base_url);
//!
//!     Config::create_default("fortune-cookie.toml").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [site]
//! base_url = "https://fortune-cookie.example/"
//!
//! [preferences]
//! path = "./data/preferences.json"
//!
//! [share]
//! copied_reset_ms = 2000
//! ```

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::fs;
use url::Url;

use crate::error::FortuneError;
use crate::preferences::DEFAULT_KEY;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub preferences: PreferencesConfig,
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub preview: PreviewConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Canonical page URL without query string. Share links append `?lang=<code>`.
    pub base_url: String,
    /// Crawler image used while no preview has been generated.
    #[serde(default = "default_image")]
    pub default_image: String,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default = "default_keywords")]
    pub keywords: String,
}

fn default_image() -> String {
    "/fortune-cookie-default.jpg".to_string()
}

fn default_author() -> String {
    "Thaís Brandao".to_string()
}

fn default_keywords() -> String {
    "fortune cookie, wisdom, quotes, daily inspiration, fortune, luck".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://fortune-cookie.example/".to_string(),
            default_image: default_image(),
            author: default_author(),
            keywords: default_keywords(),
        }
    }
}

impl SiteConfig {
    /// `base_url` parsed. Only absolute `http`/`https` URLs with a host qualify.
    pub fn page_url(&self) -> crate::Result<Url> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| FortuneError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        match url.scheme() {
            "http" | "https" if url.has_host() => Ok(url),
            _ => Err(FortuneError::InvalidUrl(format!(
                "{}: expected an http(s) page address",
                self.base_url
            ))),
        }
    }

    /// Absolute URL of the default crawler image. Relative paths hang off the page
    /// origin; an unusable `base_url` leaves the path as configured.
    pub fn default_image_url(&self) -> String {
        if let Ok(absolute) = Url::parse(&self.default_image) {
            return absolute.into();
        }
        match self.page_url() {
            Ok(page) => format!(
                "{}/{}",
                page.origin().ascii_serialization(),
                self.default_image.trim_start_matches('/')
            ),
            Err(_) => self.default_image.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesConfig {
    pub path: String,
    #[serde(default = "default_pref_key")]
    pub key: String,
}

fn default_pref_key() -> String {
    DEFAULT_KEY.to_string()
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        Self {
            path: "./data/preferences.json".to_string(),
            key: default_pref_key(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    /// How long the "copied" indicator stays up after a clipboard copy (ms).
    pub copied_reset_ms: u64,
    /// Same, after the manual-copy prompt (ms).
    pub manual_copied_reset_ms: u64,
    /// Same, after the photo-sharing channel copied its text (ms).
    pub instagram_copied_reset_ms: u64,
    /// Delay between an app-scheme redirect and its web fallback (ms).
    pub app_fallback_delay_ms: u64,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            copied_reset_ms: 2000,
            manual_copied_reset_ms: 3000,
            instagram_copied_reset_ms: 3000,
            app_fallback_delay_ms: 1000,
        }
    }
}

impl ShareConfig {
    pub fn app_fallback_delay(&self) -> Duration {
        Duration::from_millis(self.app_fallback_delay_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Directory receiving `fortune-cookie-<timestamp>.<ext>` files.
    pub output_dir: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            output_dir: ".".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed level; unknown names fall back to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;
        config
            .site
            .page_url()
            .map_err(|e| anyhow!("Invalid [site] in config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}
