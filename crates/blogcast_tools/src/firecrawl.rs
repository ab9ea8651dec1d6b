//! Firecrawl content extraction.

use async_trait::async_trait;
use blogcast_core::{FetchResult, ScrapeConfig, truncate_chars};
use blogcast_interface::ContentFetcher;
use derive_builder::Builder;
use derive_getters::Getters;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

/// Appended to content cut at the character budget.
pub const TRUNCATION_MARKER: &str = "\n...";

/// Scrape request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct ScrapeRequest {
    /// Page to scrape
    url: String,
    /// Requested output formats
    #[builder(default = "vec![\"markdown\".to_string()]")]
    formats: Vec<String>,
    /// Strip navigation, footers and other boilerplate
    #[builder(default = "true")]
    only_main_content: bool,
}

impl ScrapeRequest {
    /// Creates a new builder for `ScrapeRequest`.
    pub fn builder() -> ScrapeRequestBuilder {
        ScrapeRequestBuilder::default()
    }
}

/// Fetches page content through the Firecrawl scrape API.
///
/// Every failure is returned as a [`FetchResult`] starting with `"Error:"`.
#[derive(Clone)]
pub struct FirecrawlFetcher {
    client: Client,
    api_key: Option<String>,
    endpoint: String,
    max_chars: usize,
    timeout: Duration,
}

impl std::fmt::Debug for FirecrawlFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirecrawlFetcher")
            .field(
                "api_key",
                &self.api_key.as_ref().map_or("<missing>", |_| "<redacted>"),
            )
            .field("endpoint", &self.endpoint)
            .field("max_chars", &self.max_chars)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl FirecrawlFetcher {
    /// Creates a fetcher; a blank key is treated as missing.
    pub fn new(api_key: impl Into<String>, config: &ScrapeConfig) -> Self {
        let api_key = api_key.into();
        Self {
            client: Client::new(),
            api_key: (!api_key.trim().is_empty()).then_some(api_key),
            endpoint: config.endpoint().clone(),
            max_chars: *config.max_chars(),
            timeout: config.timeout(),
        }
    }

    /// Pick the content out of any of the three response shapes.
    fn extract_content(body: &Value) -> Option<&str> {
        fn non_empty(value: Option<&Value>) -> Option<&str> {
            value.and_then(Value::as_str).filter(|s| !s.is_empty())
        }

        if let Some(data) = body.get("data").filter(|d| d.is_object()) {
            non_empty(data.get("markdown")).or_else(|| non_empty(data.get("content")))
        } else if let Some(markdown) = body.get("markdown") {
            non_empty(Some(markdown))
        } else {
            non_empty(body.get("content"))
        }
    }

    fn bounded(&self, content: &str) -> FetchResult {
        let (kept, cut) = truncate_chars(content, self.max_chars);
        if cut {
            debug!(
                original_chars = content.chars().count(),
                max_chars = self.max_chars,
                "Truncating scraped content"
            );
            FetchResult::content(format!("{}{}", kept, TRUNCATION_MARKER))
        } else {
            FetchResult::content(kept)
        }
    }
}

#[async_trait]
impl ContentFetcher for FirecrawlFetcher {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch(&self, url: &str) -> FetchResult {
        let Some(api_key) = &self.api_key else {
            warn!("Firecrawl API key not provided, skipping request");
            return FetchResult::error("Firecrawl API key not provided");
        };

        let request = match ScrapeRequest::builder().url(url).build() {
            Ok(r) => r,
            Err(e) => return FetchResult::error(e),
        };

        let response = match self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
        {
            Ok(r) => r,
            Err(e) => {
                error!(error = ?e, "Firecrawl request failed");
                return FetchResult::error(format!("Request failed - {}", e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "Firecrawl returned error status");
            return FetchResult::error(format!("Request failed - HTTP {}: {}", status, body));
        }

        let body: Value = match response.json().await {
            Ok(v) => v,
            Err(e) => {
                error!(error = ?e, "Failed to decode Firecrawl response");
                return FetchResult::error(e);
            }
        };

        if !body.get("success").and_then(Value::as_bool).unwrap_or(false) {
            let message = body
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("Unknown error");
            warn!(message, "Firecrawl reported failure");
            return FetchResult::error(format!("Firecrawl API failed - {}", message));
        }

        match Self::extract_content(&body) {
            Some(content) => self.bounded(content),
            None => {
                warn!("Firecrawl response carried no content");
                FetchResult::error("No content found in response")
            }
        }
    }
}
