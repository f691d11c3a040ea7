//! HTTP client for the hosted full-text search index.
//!
//! The index is a black box: query in, ranked document list out. This module
//! owns the REST surface (URL shape, request body, response envelope) so the
//! rest of the crate only sees `KnowledgeRecord`s.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use kbot_core::config::SearchServiceConfig;
use kbot_core::KnowledgeRecord;

use crate::error::SearchError;
use crate::query::SearchQuery;

/// Object-safe seam over the index so the engine and tests can substitute
/// their own implementations.
#[async_trait]
pub trait SearchIndexClient: Send + Sync {
    /// Run one query and return matching records in ranking order.
    async fn search(
        &self,
        text: &str,
        query: &SearchQuery,
    ) -> Result<Vec<KnowledgeRecord>, SearchError>;
}

/// Response envelope: the index wraps hits in a `value` array.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    value: Vec<KnowledgeRecord>,
}

/// `SearchIndexClient` backed by the index's REST API.
pub struct HttpSearchClient {
    client: reqwest::Client,
    endpoint: String,
    index: String,
    api_key: String,
    api_version: String,
}

impl HttpSearchClient {
    /// Build a client from validated configuration.
    pub fn from_config(config: &SearchServiceConfig) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            index: config.index.clone(),
            api_key: config.api_key.clone(),
            api_version: config.api_version.clone(),
        })
    }

    /// Resolve the document-search URL for this index.
    fn search_url(&self) -> String {
        search_url(&self.endpoint, &self.index, &self.api_version)
    }
}

#[async_trait]
impl SearchIndexClient for HttpSearchClient {
    async fn search(
        &self,
        text: &str,
        query: &SearchQuery,
    ) -> Result<Vec<KnowledgeRecord>, SearchError> {
        let url = self.search_url();
        let body = request_body(text, query);

        debug!(%url, query_text = text, "querying knowledge index");

        let resp = self
            .client
            .post(&url)
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let text_body = resp.text().await?;
        parse_response(&text_body)
    }
}

/// Build the document-search URL: `{endpoint}/indexes/{index}/docs/search`.
fn search_url(endpoint: &str, index: &str, api_version: &str) -> String {
    let base = endpoint.trim_end_matches('/');
    format!(
        "{}/indexes/{}/docs/search?api-version={}",
        base, index, api_version
    )
}

/// Build the POST body for one query.
///
/// `searchFields` is a comma-separated list on the wire; `search` carries
/// the user utterance verbatim, empty string included.
fn request_body(text: &str, query: &SearchQuery) -> serde_json::Value {
    serde_json::json!({
        "search": text,
        "searchMode": query.search_mode,
        "top": query.top,
        "searchFields": query.search_fields.join(","),
        "filter": query.filter,
    })
}

/// Parse the response envelope into records, preserving ranking order.
fn parse_response(body: &str) -> Result<Vec<KnowledgeRecord>, SearchError> {
    let response: SearchResponse =
        serde_json::from_str(body).map_err(|e| SearchError::MalformedResponse(e.to_string()))?;
    Ok(response.value)
}
