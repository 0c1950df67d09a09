//! Catalog client configuration
//!
//! Values come from the environment:
//! - `BOOKLENS_CATALOG_URL`: catalog base URL (default: Google Books v1)
//! - `BOOKLENS_API_KEY`: optional key appended to every request
//! - `BOOKLENS_USER_AGENT`: optional User-Agent header

use crate::error::ConfigError;
use url::Url;

/// Public Google Books API
pub const DEFAULT_CATALOG_URL: &str = "https://www.googleapis.com/books/v1";

pub const CATALOG_URL_ENV: &str = "BOOKLENS_CATALOG_URL";
pub const API_KEY_ENV: &str = "BOOKLENS_API_KEY";
pub const USER_AGENT_ENV: &str = "BOOKLENS_USER_AGENT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Base URL without a trailing slash
    pub base_url: String,

    pub api_key: Option<String>,

    pub user_agent: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_URL.to_string(),
            api_key: None,
            user_agent: None,
        }
    }
}

impl CatalogConfig {
    /// Create a configuration for the given base URL
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: validate_base_url(base_url.as_ref())?,
            ..Default::default()
        })
    }

    /// Read configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from any key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut config = match get(CATALOG_URL_ENV) {
            Some(url) => Self::new(url)?,
            None => Self::default(),
        };
        config.api_key = get(API_KEY_ENV);
        config.user_agent = get(USER_AGENT_ENV);

        Ok(config)
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

fn validate_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(ConfigError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}
