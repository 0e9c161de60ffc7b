//! Encyclopedia client using the MediaWiki extracts API.

use super::{handle_response, http_client, EncyclopediaService};
use crate::error::ServiceError;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Wikipedia summary client.
pub struct WikipediaClient {
    client: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct QueryResponse {
    query: Option<Query>,
}

#[derive(Deserialize)]
struct Query {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Deserialize)]
struct Page {
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    invalid: bool,
    extract: Option<String>,
}

impl WikipediaClient {
    /// Create a client for a wiki such as `https://en.wikipedia.org`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ServiceError> {
        Ok(Self {
            client: http_client(timeout)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl EncyclopediaService for WikipediaClient {
    async fn summary(&self, term: &str) -> Result<Option<String>, ServiceError> {
        debug!(term = %term, "Fetching encyclopedia summary");
        let response = self
            .client
            .get(format!("{}/w/api.php", self.base_url))
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("formatversion", "2"),
                ("prop", "extracts"),
                ("exintro", "1"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("titles", term),
            ])
            .send()
            .await?;

        let data: QueryResponse = handle_response(response).await?;

        let page = data.query.and_then(|q| q.pages.into_iter().next());
        Ok(page
            .filter(|p| !p.missing && !p.invalid)
            .and_then(|p| p.extract))
    }
}
