//! HTTP registry fetching.
//!
//! Provides a blocking HTTP client that downloads the registry document.

use anyhow::{bail, Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches documents over HTTP/HTTPS.
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with the default 30-second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a new HTTP fetcher with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent("tplspec")
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, timeout })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch a document body from a URL.
    ///
    /// Any non-2xx status is an error.
    pub fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("request to {} failed", url))?;

        if !response.status().is_success() {
            bail!("HTTP {} fetching {}", response.status(), url);
        }

        response
            .text()
            .with_context(|| format!("failed to read response body from {}", url))
    }
}
