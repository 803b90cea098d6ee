// file: src/config.rs
// description: application configuration management with env and toml support
// reference: https://docs.rs/config

use crate::error::{ReadeckError, Result};
use crate::utils::validation::Validator;
use dotenvy::dotenv;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the Readeck store, fixed for the lifetime of the process.
#[derive(Clone, Deserialize)]
pub struct Config {
    /// Base address of the Readeck instance, without trailing slash once validated.
    pub url: String,

    /// Bearer token sent with every API request.
    pub token: String,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    format!("readeck-mcp/{}", env!("CARGO_PKG_VERSION"))
}

impl Config {
    /// Layers an optional TOML file under `READECK_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        Self::from_sources(path, config::Environment::with_prefix("READECK"))
    }

    fn from_sources(path: Option<&Path>, environment: config::Environment) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        // values stay strings so numeric-looking tokens keep leading zeros
        builder = builder.add_source(environment);

        let settings = builder
            .build()
            .map_err(|e| ReadeckError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| ReadeckError::Config(e.to_string()))?;

        config.validate()
    }

    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        Self {
            url: url.into(),
            token: token.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
        .validate()
    }

    pub fn with_request_timeout(mut self, secs: u64) -> Result<Self> {
        self.request_timeout_secs = secs;
        self.validate()
    }

    fn validate(mut self) -> Result<Self> {
        self.url = self.url.trim().trim_end_matches('/').to_string();
        if self.url.is_empty() {
            return Err(ReadeckError::Config("READECK_URL is not set".to_string()));
        }
        Validator::validate_url(&self.url)
            .map_err(|e| ReadeckError::Config(format!("READECK_URL is invalid: {}", e)))?;

        self.token = self.token.trim().to_string();
        if self.token.is_empty() {
            return Err(ReadeckError::Config("READECK_TOKEN is not set".to_string()));
        }

        if self.request_timeout_secs == 0 {
            return Err(ReadeckError::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(self)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn search_endpoint(&self) -> String {
        format!("{}/api/bookmarks", self.url)
    }

    pub fn article_endpoint(&self, document_id: &str) -> String {
        format!("{}/api/bookmarks/{}/article", self.url, document_id)
    }

    /// Human-facing page for a bookmark, used when citing it.
    pub fn citation_url(&self, document_id: &str) -> String {
        format!("{}/bookmarks/{}", self.url, document_id)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("url", &self.url)
            .field("token", &"<redacted>")
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
