//! Application configuration.
//!
//! The server loads [`Config`] from environment variables with `Config::from_env()`
//! after calling `dotenvy::dotenv()`, resolves a [`ClientConfig`] once, and hands
//! it to the browser through the page shell.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Path of the waitlist endpoint, relative to the backend base URL
pub const WAITLIST_PATH: &str = "/waitlist";

/// `<meta>` name carrying the build mode into the hydrated page
pub const MODE_META: &str = "kolab-mode";

/// `<meta>` name carrying the backend base URL into the hydrated page
pub const BASE_URL_META: &str = "kolab-waitlist-base-url";

/// Configuration error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown mode '{0}' (expected 'development' or 'production')")]
    UnknownMode(String),
}

/// Which backend the page talks to
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[display("development")]
    Development,
    #[default]
    #[display("production")]
    Production,
}

impl BuildMode {
    /// Parse a mode string. Accepts the short forms `dev` and `prod`.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(BuildMode::Development),
            "production" | "prod" => Ok(BuildMode::Production),
            _ => Err(ConfigError::UnknownMode(value.to_string())),
        }
    }
}

/// Browser-side configuration, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    pub mode: BuildMode,
    /// Base URL of the waitlist backend. Empty means same origin.
    pub waitlist_base_url: String,
}

impl ClientConfig {
    pub fn new(mode: BuildMode, waitlist_base_url: impl Into<String>) -> Self {
        Self {
            mode,
            waitlist_base_url: waitlist_base_url.into(),
        }
    }

    /// Full URL of the waitlist endpoint
    pub fn waitlist_endpoint(&self) -> String {
        let base = self.waitlist_base_url.trim_end_matches('/');
        format!("{}{}", base, WAITLIST_PATH)
    }

    /// Read the configuration the server embedded in the page head.
    ///
    /// Missing tags fall back to production mode and a same-origin endpoint.
    #[cfg(not(feature = "ssr"))]
    pub fn from_document() -> Self {
        let read_meta = |name: &str| -> Option<String> {
            let document = web_sys::window()?.document()?;
            document
                .query_selector(&format!("meta[name=\"{}\"]", name))
                .ok()??
                .get_attribute("content")
        };

        let mode = match read_meta(MODE_META).map(|m| BuildMode::parse(&m)) {
            Some(Ok(mode)) => mode,
            Some(Err(e)) => {
                leptos::logging::warn!("{}", e);
                BuildMode::default()
            }
            None => BuildMode::default(),
        };

        Self {
            mode,
            waitlist_base_url: read_meta(BASE_URL_META).unwrap_or_default(),
        }
    }
}

/// Server configuration loaded from environment variables.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct Config {
    /// Raw `APP_ENV` value
    /// Example: development
    pub app_env: Option<String>,

    /// Backend base URL used in development
    /// Example: http://localhost:8080/api
    pub backend_url_local: Option<String>,

    /// Backend base URL used in production
    pub backend_url_prod: Option<String>,
}

#[cfg(feature = "ssr")]
impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            app_env: std::env::var("APP_ENV").ok(),
            backend_url_local: std::env::var("BACKEND_URL_LOCAL").ok(),
            backend_url_prod: std::env::var("BACKEND_URL_PROD").ok(),
        }
    }

    /// Build mode selected by `APP_ENV`; unset means production
    pub fn mode(&self) -> Result<BuildMode, ConfigError> {
        match self.app_env.as_deref() {
            Some(value) => BuildMode::parse(value),
            None => Ok(BuildMode::default()),
        }
    }

    /// Backend base URL for the given mode, if configured
    pub fn backend_url(&self, mode: BuildMode) -> Option<&str> {
        match mode {
            BuildMode::Development => self.backend_url_local.as_deref(),
            BuildMode::Production => self.backend_url_prod.as_deref(),
        }
    }

    /// Resolve the configuration shipped to the browser.
    ///
    /// An unknown `APP_ENV` is reported and production is used instead.
    pub fn client_config(&self) -> (ClientConfig, Option<ConfigError>) {
        let (mode, error) = match self.mode() {
            Ok(mode) => (mode, None),
            Err(e) => (BuildMode::Production, Some(e)),
        };
        let base = self.backend_url(mode).unwrap_or_default();
        (ClientConfig::new(mode, base), error)
    }
}

#[cfg(feature = "ssr")]
impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
