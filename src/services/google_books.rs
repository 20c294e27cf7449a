use crate::models::google_books::VolumesResponse;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

pub const GOOGLE_BOOKS_URL: &str = "https://www.googleapis.com/books/v1/volumes";

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Upstream returned status {0}")]
    Status(StatusCode),
    #[error("Malformed upstream payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can answer a volumes search.
#[async_trait]
pub trait VolumeSource {
    async fn search_volumes(&self, query: &str) -> Result<VolumesResponse, SearchError>;
}

pub struct GoogleBooksClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GoogleBooksClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl VolumeSource for GoogleBooksClient {
    async fn search_volumes(&self, query: &str) -> Result<VolumesResponse, SearchError> {
        debug!("Requesting volumes from {} for '{}'", self.base_url, query);

        // Both values are percent-encoded here so that upstream decodes them
        // back to exactly what the user typed.
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", query), ("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
