//! Headlines client using NewsAPI.

use super::{handle_response, http_client, Headline, NewsService};
use crate::error::ServiceError;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

/// NewsAPI top-headlines client.
pub struct NewsApiClient {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
    country: String,
    page_size: usize,
}

#[derive(Deserialize)]
struct HeadlinesResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Deserialize)]
struct Article {
    title: String,
    source: Source,
}

#[derive(Deserialize)]
struct Source {
    name: String,
}

impl NewsApiClient {
    /// Create a client for the given two-letter country code.
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        country: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ServiceError> {
        Ok(Self {
            client: http_client(timeout)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.map(SecretString::new),
            country: country.into(),
            page_size: 5,
        })
    }

    /// Set how many headlines to request.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

#[async_trait]
impl NewsService for NewsApiClient {
    async fn top_headlines(&self) -> Result<Vec<Headline>, ServiceError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| ServiceError::NotConfigured("news API key".into()))?;

        debug!(country = %self.country, "Fetching top headlines");
        let page_size = self.page_size.to_string();
        let response = self
            .client
            .get(format!("{}/v2/top-headlines", self.base_url))
            .query(&[
                ("country", self.country.as_str()),
                ("apiKey", api_key.expose_secret().as_str()),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await?;

        let data: HeadlinesResponse = handle_response(response).await?;
        info!(count = data.articles.len(), "Headlines received");

        Ok(data
            .articles
            .into_iter()
            .take(self.page_size)
            .map(|a| Headline {
                title: a.title,
                source: a.source.name,
            })
            .collect())
    }
}
