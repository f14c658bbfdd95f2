//! Page fetching. One blocking-style request per URL, no retries.

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;

#[derive(Debug)]
pub enum FetchError {
    /// Network failure, timeout, invalid URL
    Request(String),
    /// Non-200 response
    Status(u16),
    /// Response body could not be read as text
    Body(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Request(msg) => write!(f, "request failed: {}", msg),
            FetchError::Status(code) => write!(f, "non-200 response [{}]", code),
            FetchError::Body(msg) => write!(f, "unreadable body: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Source of page markup
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// reqwest-backed fetcher
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("faculty_directory/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Request(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))
    }
}
