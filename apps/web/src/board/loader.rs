//! Data Loader — fetches the job data document from a file or over HTTP.
//!
//! Sources are pluggable behind `JobSource`. The loader never retries.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::board::models::Job;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    /// The document could not be retrieved or was not JSON.
    #[error("Failed to fetch job data: {0}")]
    FetchFailure(String),

    /// The document parsed as JSON but its root is not an array.
    #[error("Job data root is not a JSON array")]
    InvalidFormat,
}

impl LoadError {
    /// Message shown to users in the error block.
    pub fn user_message(&self) -> &'static str {
        match self {
            LoadError::FetchFailure(_) => "Failed to load job data",
            LoadError::InvalidFormat => "Invalid data format",
        }
    }
}

/// Somewhere the job data document can be read from.
#[async_trait]
pub trait JobSource: Send + Sync {
    /// Returns the raw document body.
    async fn fetch(&self) -> Result<Vec<u8>, LoadError>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}

/// Reads the document from the local filesystem.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl JobSource for FileSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|e| LoadError::FetchFailure(format!("{}: {e}", self.path.display())))
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Fetches the document with a single HTTP GET, bounded by a request timeout.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, LoadError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LoadError::FetchFailure(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl JobSource for HttpSource {
    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| LoadError::FetchFailure(e.to_string()))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::FetchFailure(e.to_string()))?;

        debug!("Fetched {} bytes from {}", body.len(), self.url);
        Ok(body.to_vec())
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}

/// Picks a source for a configured location: http(s) URLs go over the network,
/// anything else is a file path.
pub fn source_for(location: &str, timeout: Duration) -> Result<Box<dyn JobSource>, LoadError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location, timeout)?))
    } else {
        Ok(Box::new(FileSource::new(location)))
    }
}

/// Decodes a document body into job records. The root must be an array.
pub fn decode_jobs(body: &[u8]) -> Result<Vec<Job>, LoadError> {
    let root: Value = serde_json::from_slice(body)
        .map_err(|e| LoadError::FetchFailure(format!("body is not valid JSON: {e}")))?;

    match root {
        Value::Array(items) => Ok(items.into_iter().map(Job::from_value).collect()),
        _ => Err(LoadError::InvalidFormat),
    }
}

/// Fetches and decodes in one step.
pub async fn fetch_jobs(source: &dyn JobSource) -> Result<Vec<Job>, LoadError> {
    let body = source.fetch().await?;
    decode_jobs(&body)
}
