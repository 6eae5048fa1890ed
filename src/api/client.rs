use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::ApiSettings;

use super::models::BotConfig;

/// Client for the bot's local REST API. All endpoints use HTTP Basic auth
/// with the credentials from [`ApiSettings`].
pub struct FreqtradeClient {
    client: Client,
    settings: ApiSettings,
}

impl FreqtradeClient {
    pub fn new(settings: ApiSettings) -> Result<Self> {
        // No explicit timeout: the transport's defaults apply.
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, settings })
    }

    async fn get(&self, endpoint: &str) -> Result<reqwest::Response> {
        let url = format!("{}/{}", self.settings.base_url, endpoint);

        self.client
            .get(&url)
            .basic_auth(&self.settings.username, Some(&self.settings.password))
            .send()
            .await
            .with_context(|| format!("Failed to send {} request", endpoint))
    }

    /// Fetch the bot configuration from `/show_config`.
    ///
    /// The body is decoded whatever the status code; an auth failure shows up
    /// as empty config fields or a decode error, not a distinct error kind.
    #[instrument(skip(self))]
    pub async fn show_config(&self) -> Result<BotConfig> {
        debug!("Fetching bot configuration");

        let text = self.get("show_config").await?.text().await?;

        serde_json::from_str(&text).context("Failed to parse show_config response")
    }

    /// Fetch `/ping`, returning the status code and decoded JSON body
    /// regardless of the status value.
    #[instrument(skip(self))]
    pub async fn ping(&self) -> Result<(StatusCode, Value)> {
        debug!("Pinging API");

        let response = self.get("ping").await?;
        let status = response.status();
        let text = response.text().await?;
        let body = serde_json::from_str(&text).context("Failed to parse ping response")?;

        Ok((status, body))
    }

    /// Generic best-effort GET for the endpoint sweep.
    #[instrument(skip(self))]
    pub async fn get_endpoint(&self, endpoint: &str) -> Result<(StatusCode, Value)> {
        debug!("Fetching endpoint {}", endpoint);

        let response = self.get(endpoint).await?;
        let status = response.status();
        let text = response.text().await?;
        let body = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse {} response", endpoint))?;

        Ok((status, body))
    }
}
