//! HTTP client for the REST Countries provider.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::Country;
use crate::upstream::{CountrySource, ResourcePath};

// == Rest Countries Client ==
#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    client: Client,
    base: Url,
}

impl RestCountriesClient {
    /// Creates a client rooted at `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| ApiError::Internal(format!("invalid upstream URL {}: {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::Internal(format!(
                "upstream URL {} cannot be a base",
                base_url
            )));
        }

        let client = Client::builder()
            .user_agent(concat!("countries-api/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { client, base })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.upstream_base_url,
            Duration::from_secs(config.upstream_timeout),
        )
    }

    /// Full URL for a resource, with each segment percent-encoded.
    pub fn url_for(&self, resource: &ResourcePath) -> Url {
        let mut url = self.base.clone();
        // Checked in `new`: the base can always take path segments
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(resource.segments());
        }
        url
    }
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    async fn fetch(&self, resource: &ResourcePath) -> Result<Vec<Country>> {
        let url = self.url_for(resource);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(err) => {
                error!(%resource, error = %err, "Failed to fetch data");
                return Err(classify_transport_error(&err));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if status.as_u16() == 404 {
                warn!(%resource, %status, "Upstream reported resource not found");
            } else {
                error!(%resource, %status, "Upstream responded with an error");
            }
            return Err(ApiError::upstream(status.as_u16(), body));
        }

        let countries: Vec<Country> = response.json().await.map_err(|err| {
            error!(%resource, error = %err, "Failed to read upstream payload");
            if err.is_decode() {
                ApiError::Internal(format!("undecodable payload from {}: {}", resource, err))
            } else {
                classify_transport_error(&err)
            }
        })?;

        info!(%resource, count = countries.len(), "Successfully fetched data");
        Ok(countries)
    }
}

/// No response at all (refused, timed out, dropped) means the provider is
/// unavailable; anything else is our own fault.
fn classify_transport_error(err: &reqwest::Error) -> ApiError {
    if err.is_connect() || err.is_timeout() || err.is_request() || err.is_body() {
        ApiError::unreachable()
    } else {
        ApiError::Internal(format!("upstream request failed: {}", err))
    }
}
