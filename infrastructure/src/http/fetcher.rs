//! HTTP adapter for the resource fetcher port

use async_trait::async_trait;
use qaha_application::{FetchError, ResourceFetcher};
use std::time::Duration;
use tracing::debug;

/// Per-request timeout (seconds) matching the upstream viewer
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum response body size (5 MB)
pub const MAX_BODY_SIZE: usize = 5 * 1024 * 1024;

/// Fetches source tables over HTTPS with a bounded timeout.
///
/// No retries: a failed source stays failed until the cached load is
/// invalidated.
pub struct HttpResourceFetcher {
    client: reqwest::Client,
    max_body_size: usize,
}

impl HttpResourceFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        Self::with_max_body_size(timeout, MAX_BODY_SIZE)
    }

    pub fn with_max_body_size(
        timeout: Duration,
        max_body_size: usize,
    ) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("qaha/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(Self {
            client,
            max_body_size,
        })
    }
}

#[async_trait]
impl ResourceFetcher for HttpResourceFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "fetching source table");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown").to_string(),
            ));
        }

        let content_length = response.content_length().unwrap_or(0);
        if content_length > self.max_body_size as u64 {
            return Err(FetchError::TooLarge(content_length as usize));
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::Network(e.to_string())
            }
        })?;
        if body.len() > self.max_body_size {
            return Err(FetchError::TooLarge(body.len()));
        }

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_with_default_limits() {
        let fetcher = HttpResourceFetcher::new(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert!(fetcher.is_ok());
        assert_eq!(fetcher.unwrap().max_body_size, MAX_BODY_SIZE);
    }
}
