use std::time::Duration;

use crate::error::{Error, Result};

pub const MISTRAL_BASE_URL: &str = "https://api.mistral.ai/v1";
pub const CORE_BASE_URL: &str = "https://api.core.ac.uk/v3";

const DEFAULT_MODEL: &str = "mistral-medium";
const DEFAULT_ADDR: &str = "0.0.0.0:3001";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 60;

/// Process-wide configuration, read from the environment exactly once at
/// startup and passed into the API clients by reference. Business logic never
/// reads the environment directly.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bearer credential for the chat-completion API.
    pub mistral_api_key: String,
    /// Bearer credential for the scholarly-works search API.
    pub core_api_key: String,
    /// Model identifier sent with every completion request.
    pub model: String,
    pub mistral_base_url: String,
    pub core_base_url: String,
    /// Upper bound on any single upstream call.
    pub upstream_timeout: Duration,
    /// Listen address for the HTTP server.
    pub addr: String,
}

impl AppConfig {
    /// Load configuration from the process environment. A missing credential
    /// is a fatal configuration error for the whole process, not a
    /// per-request condition.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            mistral_api_key: require_var("MISTRAL_API_KEY")?,
            core_api_key: require_var("CORE_API_KEY")?,
            model: std::env::var("IDEAFORGE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
            mistral_base_url: MISTRAL_BASE_URL.into(),
            core_base_url: CORE_BASE_URL.into(),
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            addr: std::env::var("IDEAFORGE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into()),
        })
    }
}

fn require_var(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::Configuration(format!("{name} is not set"))),
    }
}
