//! Outbound services consumed by the feature handlers.
//!
//! Each service is a trait so the router can be exercised without the
//! network; the concrete clients talk to the public APIs over `reqwest`.

mod crypto;
mod news;
mod weather;
mod wikipedia;

pub use crypto::CoinGeckoClient;
pub use news::NewsApiClient;
pub use weather::OpenWeatherClient;
pub use wikipedia::WikipediaClient;

use crate::error::ServiceError;
use crate::normalize::truncate_chars;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// User agent sent with every outbound request.
pub const USER_AGENT: &str = "AssistantBot/1.0";

/// Current conditions for a city.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    /// City name as resolved by the provider.
    pub city: String,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Provider description, e.g. "light rain".
    pub description: String,
}

/// A single news headline.
#[derive(Debug, Clone, PartialEq)]
pub struct Headline {
    pub title: String,
    pub source: String,
}

/// Weather-by-city lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherService: Send + Sync {
    /// Fetch current conditions for `city`.
    async fn current(&self, city: &str) -> Result<WeatherReport, ServiceError>;
}

/// Top-headlines lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsService: Send + Sync {
    /// Fetch the current top headlines, most important first.
    async fn top_headlines(&self) -> Result<Vec<Headline>, ServiceError>;
}

/// Cryptocurrency spot price lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CryptoService: Send + Sync {
    /// USD price of the coin with the given id, or `None` if the provider
    /// does not know the coin.
    async fn price_usd(&self, coin: &str) -> Result<Option<f64>, ServiceError>;
}

/// Encyclopedia summary lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EncyclopediaService: Send + Sync {
    /// Introductory summary of the article matching `term`, or `None` if
    /// no article exists.
    async fn summary(&self, term: &str) -> Result<Option<String>, ServiceError>;
}

/// The set of outbound services handed to the router.
#[derive(Clone)]
pub struct Services {
    pub weather: Arc<dyn WeatherService>,
    pub news: Arc<dyn NewsService>,
    pub crypto: Arc<dyn CryptoService>,
    pub encyclopedia: Arc<dyn EncyclopediaService>,
}

/// Build the HTTP client shared by a service.
pub(crate) fn http_client(timeout: Duration) -> Result<Client, ServiceError> {
    Ok(Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()?)
}

/// Decode a successful response, or turn a rejection into `ServiceError::Api`.
pub(crate) async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ServiceError> {
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        debug!("Response body: {}", truncate_chars(&body, 200));
        serde_json::from_str(&body).map_err(ServiceError::from)
    } else {
        Err(ServiceError::Api {
            status: status.as_u16(),
            message: rejection_message(&body),
        })
    }
}

/// Pull the provider's `message` field out of an error body.
fn rejection_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| "Unknown error occurred.".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_message() {
        assert_eq!(
            rejection_message(r#"{"cod":"404","message":"city not found"}"#),
            "city not found"
        );
        assert_eq!(rejection_message("<html>502</html>"), "Unknown error occurred.");
        assert_eq!(rejection_message(r#"{"status":"error"}"#), "Unknown error occurred.");
    }
}
