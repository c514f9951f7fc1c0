//! Shikimori API client.
//!
//! Every endpoint is available twice: `fetch_*` methods return the failure
//! as a [`CatalogError`], while the plain methods log it and hand back an
//! empty default so callers that only display results never see an error.

use super::error::CatalogError;
use super::query::{ListQuery, DEFAULT_SEARCH_LIMIT};
use super::types::Record;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Request, Response, Url};
use serde::de::DeserializeOwned;
use shared::CatalogConfig;
use std::time::Duration;
use tracing::{debug, warn};

/// Per-request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Bytes of a non-2xx body kept in [`CatalogError::Status`]
const MAX_ERROR_BODY: usize = 1024;

/// Shikimori catalog client.
///
/// Cloning is cheap and all clones share one connection pool, so a single
/// instance can serve concurrent tasks.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    /// HTTP client with default headers and timeout applied
    client: Client,
    /// Base URL without trailing slash
    base_url: String,
}

impl CatalogClient {
    /// Create a client for the public Shikimori API
    pub fn new() -> Result<Self, CatalogError> {
        Self::from_config(&CatalogConfig::default())
    }

    /// Create a client from the `[catalog]` configuration section
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        Self::with_timeout(config, REQUEST_TIMEOUT)
    }

    fn with_timeout(config: &CatalogConfig, timeout: Duration) -> Result<Self, CatalogError> {
        let base_url = config.base_url.trim_end_matches('/');
        validate_base_url(base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(CatalogError::Build)?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a GET request for `endpoint` with the given query pairs
    fn request(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Request, CatalogError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut builder = self.client.get(&url);
        if !params.is_empty() {
            builder = builder.query(params);
        }
        builder.build().map_err(|source| CatalogError::InvalidBaseUrl {
            reason: source.to_string(),
            url,
        })
    }

    /// Request for an anime listing
    pub fn listing_request(&self, query: &ListQuery) -> Result<Request, CatalogError> {
        self.request("/animes", &query.to_params())
    }

    /// Execute a request and decode its JSON body
    async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T, CatalogError> {
        let url = request.url().to_string();
        debug!(url = %url, "Making API request");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|source| CatalogError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(response).await;
            return Err(CatalogError::Status { url, status, body });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| CatalogError::Transport {
                url: url.clone(),
                source,
            })?;

        let data = serde_json::from_slice(&bytes)
            .map_err(|source| CatalogError::Decode { url: url.clone(), source })?;

        debug!(url = %url, "Request successful");
        Ok(data)
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, CatalogError> {
        let request = self.request(endpoint, &[])?;
        self.execute(request).await
    }

    /// Fetch an anime listing
    pub async fn fetch_entries(&self, query: &ListQuery) -> Result<Vec<Record>, CatalogError> {
        let request = self.listing_request(query)?;
        self.execute(request).await
    }

    /// Fetch one anime by id
    pub async fn fetch_entry(&self, id: u64) -> Result<Record, CatalogError> {
        self.get(&format!("/animes/{}", id)).await
    }

    /// Search anime by title
    pub async fn fetch_search(&self, query: &str, limit: u32) -> Result<Vec<Record>, CatalogError> {
        self.fetch_entries(&ListQuery::search(query, limit)).await
    }

    /// Fetch all genres
    pub async fn fetch_genres(&self) -> Result<Vec<Record>, CatalogError> {
        self.get("/genres").await
    }

    /// Fetch all studios
    pub async fn fetch_studios(&self) -> Result<Vec<Record>, CatalogError> {
        self.get("/studios").await
    }

    /// Anime listing; empty on any failure
    pub async fn list_entries(&self, query: &ListQuery) -> Vec<Record> {
        self.fetch_entries(query)
            .await
            .unwrap_or_else(|e| fail_open("Failed to fetch anime list", &e))
    }

    /// One anime by id; `None` on any failure
    pub async fn get_entry_by_id(&self, id: u64) -> Option<Record> {
        match self.fetch_entry(id).await {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(id = id, error_kind = e.kind(), error = %error_chain(&e), "Failed to fetch anime");
                None
            }
        }
    }

    /// Title search; empty on any failure
    pub async fn search_entries(&self, query: &str, limit: u32) -> Vec<Record> {
        self.fetch_search(query, limit)
            .await
            .unwrap_or_else(|e| fail_open("Failed to search anime", &e))
    }

    /// Title search with the default page size
    pub async fn search(&self, query: &str) -> Vec<Record> {
        self.search_entries(query, DEFAULT_SEARCH_LIMIT).await
    }

    /// All genres; empty on any failure
    pub async fn list_genres(&self) -> Vec<Record> {
        self.fetch_genres()
            .await
            .unwrap_or_else(|e| fail_open("Failed to fetch genres", &e))
    }

    /// All studios; empty on any failure
    pub async fn list_studios(&self) -> Vec<Record> {
        self.fetch_studios()
            .await
            .unwrap_or_else(|e| fail_open("Failed to fetch studios", &e))
    }
}

/// Reject base URLs that cannot have endpoint paths appended
fn validate_base_url(base_url: &str) -> Result<(), CatalogError> {
    let invalid = |reason: String| CatalogError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };

    let url = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("not a base URL".to_string()));
    }
    Ok(())
}

/// First [`MAX_ERROR_BODY`] bytes of a response body, read chunk by chunk
async fn error_body(mut response: Response) -> String {
    let mut body = Vec::new();
    while body.len() < MAX_ERROR_BODY {
        match response.chunk().await {
            Ok(Some(chunk)) => body.extend_from_slice(&chunk),
            _ => break,
        }
    }
    body.truncate(MAX_ERROR_BODY);
    String::from_utf8_lossy(&body).into_owned()
}

fn fail_open<T: Default>(message: &str, error: &CatalogError) -> T {
    warn!(error_kind = error.kind(), error = %error_chain(error), "{}", message);
    T::default()
}

/// Error message followed by its sources, `: `-separated
fn error_chain(error: &CatalogError) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
