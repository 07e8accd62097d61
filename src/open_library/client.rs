use crate::open_library::models::{SearchDoc, SearchResponse};
use reqwest::{Client, Error as ReqwestError, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("book-finder/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum OpenLibraryError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Open Library returned status {0}")]
    Status(StatusCode),
    #[error("Failed to parse search response: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// Title search against an Open Library compatible endpoint (allows mocking for tests)
#[async_trait::async_trait]
pub trait BookSearch: Send + Sync {
    async fn search_by_title(&self, title: &str) -> Result<Vec<SearchDoc>, OpenLibraryError>;
}

#[derive(Clone, Debug)]
pub struct OpenLibraryClient {
    client: Client,
    base_url: String,
}

impl OpenLibraryClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, OpenLibraryError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the search URL. The title is percent-encoded as a single query value.
    pub fn search_url(&self, title: &str) -> String {
        format!(
            "{}/search.json?title={}",
            self.base_url,
            urlencoding::encode(title)
        )
    }
}

#[async_trait::async_trait]
impl BookSearch for OpenLibraryClient {
    async fn search_by_title(&self, title: &str) -> Result<Vec<SearchDoc>, OpenLibraryError> {
        let url = self.search_url(title);
        debug!("Open Library request: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!("Open Library search for '{}' failed with {}", title, status);
            return Err(OpenLibraryError::Status(status));
        }

        let body = response.bytes().await?;
        let search_response: SearchResponse = serde_json::from_slice(&body)?;

        debug!(
            "Open Library returned {} docs (numFound: {:?})",
            search_response.docs.len(),
            search_response.num_found
        );

        Ok(search_response.docs)
    }
}
