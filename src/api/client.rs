use crate::api::error::FetchError;
use crate::api::traits::StaySource;
use crate::api::types::ClientConfig;
use crate::models::{schema, Property};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Url};
use tracing::{debug, info, warn};

const APP_ID_HEADER: &str = "x-app-id";

/// HTTP client for the stays search API
pub struct StaysClient {
    client: Client,
    base_url: Url,
}

impl StaysClient {
    /// Create a client from connection settings
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid API base URL: {}", config.base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("API base URL cannot carry a path: {}", config.base_url);
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            APP_ID_HEADER,
            HeaderValue::from_str(&config.app_id).context("Invalid app id header value")?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("stays-browser/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// `{base}/search/stays/filtered`
    pub fn list_url(&self) -> Url {
        self.endpoint(&["filtered"])
    }

    /// `{base}/search/stays/{id}`
    pub fn detail_url(&self, id: &str) -> Url {
        self.endpoint(&[id])
    }

    fn endpoint(&self, tail: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in the constructor
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["search", "stays"])
                .extend(tail);
        }
        url
    }

    async fn get(&self, url: Url) -> Result<Vec<u8>, FetchError> {
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(FetchError::network)?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned status: {}", url, status);
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(FetchError::network)?;
        debug!("Downloaded {} bytes", body.len());
        Ok(body.to_vec())
    }
}

#[async_trait]
impl StaySource for StaysClient {
    async fn fetch_list(&self) -> Result<Vec<Property>, FetchError> {
        let body = self.get(self.list_url()).await?;
        let properties = schema::parse_list(&body).map_err(|err| {
            warn!("Rejected list payload: {}", err);
            err
        })?;

        info!("Fetched {} properties", properties.len());
        Ok(properties)
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Property, FetchError> {
        let body = self.get(self.detail_url(id)).await?;
        let property = schema::parse_detail(&body).map_err(|err| {
            warn!("Rejected property {} payload: {}", id, err);
            err
        })?;

        info!("Fetched property {} ({})", property.id, property.name);
        Ok(property)
    }

    fn source_name(&self) -> &'static str {
        "stays-api"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> StaysClient {
        StaysClient::with_config(ClientConfig::new(base, "tenant-1")).unwrap()
    }

    #[test]
    fn endpoints_extend_the_base_path() {
        let c = client("https://api.example.com");
        assert_eq!(
            c.list_url().as_str(),
            "https://api.example.com/search/stays/filtered"
        );
        assert_eq!(
            c.detail_url("42").as_str(),
            "https://api.example.com/search/stays/42"
        );

        let prefixed = client("https://api.example.com/v2/");
        assert_eq!(
            prefixed.list_url().as_str(),
            "https://api.example.com/v2/search/stays/filtered"
        );
    }

    #[test]
    fn route_id_stays_a_single_segment() {
        let c = client("https://api.example.com");
        assert_eq!(
            c.detail_url("a/b").as_str(),
            "https://api.example.com/search/stays/a%2Fb"
        );
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(StaysClient::with_config(ClientConfig::new("not a url", "t")).is_err());
        assert!(StaysClient::with_config(ClientConfig::new("mailto:ops@example.com", "t")).is_err());
        assert!(StaysClient::with_config(ClientConfig::new("https://api.example.com", "bad\nid")).is_err());
    }
}
