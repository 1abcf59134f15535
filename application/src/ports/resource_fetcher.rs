//! Resource fetcher port
//!
//! Defines the interface for retrieving remote source tables.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while fetching one source table
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {0} {1}")]
    Status(u16, String),

    #[error("Request timed out")]
    Timeout,

    #[error("Response too large: {0} bytes")]
    TooLarge(usize),
}

/// Fetches the body of a remote tabular resource.
///
/// This port defines how the loader reaches the network. The HTTP adapter
/// lives in the infrastructure layer; tests substitute an in-memory stub.
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    /// Fetch a resource and return its body as text
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::Status(404, "Not Found".to_string());
        assert_eq!(err.to_string(), "HTTP error: 404 Not Found");
        assert_eq!(FetchError::Timeout.to_string(), "Request timed out");
    }
}
