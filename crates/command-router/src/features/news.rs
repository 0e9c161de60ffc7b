//! News command - numbered top headlines.

use super::FeatureHandler;
use crate::error::{RouterResult, ServiceError};
use crate::services::NewsService;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::error;

pub const NEWS_ERROR_MSG: &str = "Error fetching news updates.";

pub struct NewsFeature {
    news: Arc<dyn NewsService>,
}

impl NewsFeature {
    pub fn new(news: Arc<dyn NewsService>) -> Self {
        Self { news }
    }
}

#[async_trait]
impl FeatureHandler for NewsFeature {
    fn name(&self) -> &'static str {
        "news"
    }

    fn triggers(&self) -> &'static [&'static str] {
        &["news updates"]
    }

    async fn execute(&self, _command: &str) -> RouterResult<String> {
        match self.news.top_headlines().await {
            Ok(headlines) if headlines.is_empty() => Ok("No news articles found.".into()),
            Ok(headlines) => {
                let lines: Vec<String> = headlines
                    .iter()
                    .enumerate()
                    .map(|(i, h)| format!("{}. {} ({})", i + 1, h.title, h.source))
                    .collect();
                Ok(format!("Top news:\n{}", lines.join("\n")))
            }
            Err(ServiceError::Api { message, .. }) => {
                error!(reason = %message, "Failed to retrieve news");
                Ok(format!("Failed to retrieve news. Reason: {}", message))
            }
            Err(e) => {
                error!(error = %e, "Error fetching news");
                Ok(NEWS_ERROR_MSG.into())
            }
        }
    }
}
