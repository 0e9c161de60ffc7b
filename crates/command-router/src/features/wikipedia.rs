//! Wikipedia command - truncated article summary.

use super::FeatureHandler;
use crate::error::RouterResult;
use crate::normalize::{strip_trigger, truncate_chars};
use crate::services::EncyclopediaService;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::error;

pub const WIKIPEDIA_ERROR_MSG: &str = "Error fetching Wikipedia summary.";

/// Summaries are cut to this many characters.
const SUMMARY_CHARS: usize = 500;

const TRIGGER: &str = "search in wikipedia";

pub struct WikipediaFeature {
    encyclopedia: Arc<dyn EncyclopediaService>,
}

impl WikipediaFeature {
    pub fn new(encyclopedia: Arc<dyn EncyclopediaService>) -> Self {
        Self { encyclopedia }
    }
}

#[async_trait]
impl FeatureHandler for WikipediaFeature {
    fn name(&self) -> &'static str {
        "wikipedia"
    }

    fn triggers(&self) -> &'static [&'static str] {
        &[TRIGGER]
    }

    async fn execute(&self, command: &str) -> RouterResult<String> {
        let term = strip_trigger(command, TRIGGER);
        if term.is_empty() {
            return Ok("Please specify what to search on Wikipedia.".into());
        }

        match self.encyclopedia.summary(&term).await {
            Ok(Some(summary)) => Ok(format!(
                "Wikipedia Summary: {}...",
                truncate_chars(&summary, SUMMARY_CHARS)
            )),
            Ok(None) => Ok(format!("No Wikipedia article found for '{}'.", term)),
            Err(e) => {
                error!(term = %term, error = %e, "Error fetching Wikipedia summary");
                Ok(WIKIPEDIA_ERROR_MSG.into())
            }
        }
    }
}
