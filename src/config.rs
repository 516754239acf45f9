//! Client configuration.
//!
//! The credential is passed in explicitly; [`ClientConfig::from_env`] is the only place
//! that reads the process environment.

use crate::error::{Error, ErrorContext};
use crate::request::DEFAULT_MODEL;
use crate::Result;
use std::env;
use std::fmt;
use std::time::Duration;

pub const API_KEY_ENV: &str = "GROQ_API_KEY";
pub const BASE_URL_ENV: &str = "GROQ_BASE_URL";
pub const MODEL_ENV: &str = "GROQ_MODEL";
pub const TIMEOUT_ENV: &str = "AI_HTTP_TIMEOUT_SECS";
pub const PROXY_ENV: &str = "AI_PROXY_URL";

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

#[derive(Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    /// Whole-request timeout. `None` waits for the stream indefinitely.
    pub timeout: Option<Duration>,
    pub proxy_url: Option<String>,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: None,
            proxy_url: None,
        }
    }

    /// Read configuration from the environment.
    ///
    /// - `GROQ_API_KEY` (required)
    /// - `GROQ_BASE_URL` (default `https://api.groq.com/openai/v1`)
    /// - `GROQ_MODEL` (default `llama-3.3-70b-versatile`)
    /// - `AI_HTTP_TIMEOUT_SECS` (optional, unset means no timeout)
    /// - `AI_PROXY_URL` (optional)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV)
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "API key is not set",
                    ErrorContext::new()
                        .with_field_path(API_KEY_ENV)
                        .with_details("export GROQ_API_KEY=<your key>")
                        .with_source("client_config"),
                )
            })?;

        let mut cfg = Self::new(api_key);

        if let Some(url) = lookup(BASE_URL_ENV).filter(|s| !s.is_empty()) {
            cfg = cfg.with_base_url(url);
        }
        if let Some(model) = lookup(MODEL_ENV).filter(|s| !s.is_empty()) {
            cfg = cfg.with_model(model);
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                Error::configuration_with_context(
                    format!("invalid timeout '{}'", raw),
                    ErrorContext::new()
                        .with_field_path(TIMEOUT_ENV)
                        .with_details("expected whole seconds")
                        .with_source("client_config"),
                )
            })?;
            cfg = cfg.with_timeout(Duration::from_secs(secs));
        }
        cfg.proxy_url = lookup(PROXY_ENV).filter(|s| !s.is_empty());

        Ok(cfg)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .field("proxy_url", &self.proxy_url)
            .finish()
    }
}
