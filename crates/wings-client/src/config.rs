//! # Client Configuration
//!
//! Where the inventory service lives and how its data is displayed.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line (highest priority)                                    │
//! │     --api-url https://inventory.example/api                            │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     WINGS_API_URL, WINGS_ASSET_URL                                     │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/inventory/config.toml (Linux)                            │
//! │     ~/Library/Application Support/com.wings.inventory/config.toml      │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [api]
//! base_url = "https://face2-jswz.onrender.com/api"
//!
//! [assets]
//! base_url = "http://localhost:3001"
//!
//! [display]
//! locale_timestamps = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{ConfigError, ConfigResult};

/// Default inventory service base URL.
pub const DEFAULT_API_URL: &str = "https://face2-jswz.onrender.com/api";

/// Default host for service-relative product images.
pub const DEFAULT_ASSET_URL: &str = "http://localhost:3001";

pub const ENV_API_URL: &str = "WINGS_API_URL";
pub const ENV_ASSET_URL: &str = "WINGS_ASSET_URL";

// =============================================================================
// Sections
// =============================================================================

/// Inventory service location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_api_url")]
    pub base_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_api_url(),
        }
    }
}

/// Host that serves uploaded product images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSettings {
    #[serde(default = "default_asset_url")]
    pub base_url: String,
}

fn default_asset_url() -> String {
    DEFAULT_ASSET_URL.to_string()
}

impl Default for AssetSettings {
    fn default() -> Self {
        AssetSettings {
            base_url: default_asset_url(),
        }
    }
}

/// Output preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Show sale timestamps in local time instead of UTC.
    #[serde(default)]
    pub locale_timestamps: bool,
}

// =============================================================================
// Client Configuration
// =============================================================================

/// Complete client configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub assets: AssetSettings,

    #[serde(default)]
    pub display: DisplaySettings,
}

impl ClientConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (an explicit path must exist; the default path may not)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load client config: {}. Using defaults.", e);
            Self::default()
        })
    }

    fn from_file(path: &Path) -> ConfigResult<Self> {
        info!(?path, "Loading client config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies environment-style overrides from `lookup`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_API_URL) {
            debug!(url = %url, "Overriding API URL from environment");
            self.api.base_url = url;
        }

        if let Some(url) = lookup(ENV_ASSET_URL) {
            debug!(url = %url, "Overriding asset URL from environment");
            self.assets.base_url = url;
        }
    }

    /// Replaces the API URL (command-line flag) and revalidates.
    pub fn with_api_url(mut self, url: impl Into<String>) -> ConfigResult<Self> {
        self.api.base_url = url.into();
        self.validate()?;
        Ok(self)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        parse_http_url("api.base_url", &self.api.base_url)?;
        parse_http_url("assets.base_url", &self.assets.base_url)?;
        Ok(())
    }

    /// Parsed API base URL.
    pub fn api_url(&self) -> ConfigResult<Url> {
        parse_http_url("api.base_url", &self.api.base_url)
    }

    /// Asset host, as written.
    pub fn asset_base(&self) -> &str {
        &self.assets.base_url
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "wings", "inventory")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

fn parse_http_url(field: &'static str, value: &str) -> ConfigResult<Url> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        field,
        value: value.to_string(),
        reason,
    };

    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!(
            "scheme must be http or https, got: {}",
            other
        ))),
    }
}
