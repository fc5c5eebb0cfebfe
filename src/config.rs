use crate::api::types::{ClientConfig, DEFAULT_TIMEOUT_SECS};
use anyhow::{Context, Result};
use std::time::Duration;

pub const BASE_URL_ENV: &str = "STAYS_API_BASE_URL";
pub const APP_ID_ENV: &str = "STAYS_APP_ID";
pub const TIMEOUT_ENV: &str = "STAYS_REQUEST_TIMEOUT_SECS";
pub const DEFAULT_LOG_FILTER: &str = "stays_browser=info";

/// Logging settings read alongside the client settings
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub filter: String,
    pub json: bool,
}

impl LogConfig {
    /// Call after `.env` has been loaded so its `RUST_LOG` and `LOG_FORMAT` apply
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            json: lookup("LOG_FORMAT").is_some_and(|v| v == "json"),
        }
    }
}

/// Read client settings from the process environment
pub fn client_config_from_env() -> Result<ClientConfig> {
    client_config_from(|key| std::env::var(key).ok())
}

/// Build client settings from any key lookup
pub fn client_config_from<F>(lookup: F) -> Result<ClientConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let base_url = lookup(BASE_URL_ENV)
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("{BASE_URL_ENV} is not set"))?;
    let app_id = lookup(APP_ID_ENV)
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("{APP_ID_ENV} is not set"))?;

    let timeout_secs = match lookup(TIMEOUT_ENV) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .with_context(|| format!("{TIMEOUT_ENV} must be a whole number of seconds, got '{raw}'"))?,
        None => DEFAULT_TIMEOUT_SECS,
    };

    Ok(ClientConfig::new(base_url.trim(), app_id.trim())
        .with_timeout(Duration::from_secs(timeout_secs)))
}
