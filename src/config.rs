use anyhow::{Context, Result};
use url::Url;

/// Default base URL of the bot's REST API when no override is given.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";

/// Environment variable that overrides the API base URL.
pub const BASE_URL_ENV: &str = "FREQTRADE_API_URL";

// The bot's API server ships with a fixed credential pair; these match the
// container's default configuration.
pub const API_USERNAME: &str = "freqtrader";
pub const API_PASSWORD: &str = "cA8mn49B@T";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

impl ApiSettings {
    /// Resolve settings from the environment: `FREQTRADE_API_URL` if set,
    /// otherwise the fixed default.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let base_url = resolve_base_url(std::env::var(BASE_URL_ENV).ok());
        Self::with_base_url(base_url)
    }

    /// Build settings for an explicit base URL (CLI override, tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();

        Url::parse(&base_url)
            .with_context(|| format!("Invalid API base URL: {}", base_url))?;

        Ok(Self {
            base_url,
            username: API_USERNAME.to_string(),
            password: API_PASSWORD.to_string(),
        })
    }
}

/// Pick the override when present and non-empty, else the default.
pub fn resolve_base_url(override_var: Option<String>) -> String {
    match override_var {
        Some(url) if !url.trim().is_empty() => url,
        _ => DEFAULT_BASE_URL.to_string(),
    }
}
