//! Coin price client using the CoinGecko simple-price API.

use super::{handle_response, http_client, CryptoService};
use crate::error::ServiceError;
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// CoinGecko client. The public endpoint needs no key.
pub struct CoinGeckoClient {
    client: Client,
    base_url: String,
}

/// `{"bitcoin": {"usd": 67012.5}}`
type PriceTable = HashMap<String, HashMap<String, f64>>;

impl CoinGeckoClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ServiceError> {
        Ok(Self {
            client: http_client(timeout)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl CryptoService for CoinGeckoClient {
    async fn price_usd(&self, coin: &str) -> Result<Option<f64>, ServiceError> {
        debug!(coin = %coin, "Fetching coin price");
        let response = self
            .client
            .get(format!("{}/api/v3/simple/price", self.base_url))
            .query(&[("ids", coin), ("vs_currencies", "usd")])
            .send()
            .await?;

        let prices: PriceTable = handle_response(response).await?;
        Ok(prices.get(coin).and_then(|quotes| quotes.get("usd")).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_price_usd() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/simple/price"))
            .and(query_param("ids", "bitcoin"))
            .and(query_param("vs_currencies", "usd"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"bitcoin": {"usd": 67012.5}})),
            )
            .mount(&server)
            .await;

        let client = CoinGeckoClient::new(server.uri(), Duration::from_secs(5)).unwrap();
        assert_eq!(client.price_usd("bitcoin").await.unwrap(), Some(67012.5));
    }

    #[tokio::test]
    async fn test_unknown_coin() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/simple/price"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let client = CoinGeckoClient::new(server.uri(), Duration::from_secs(5)).unwrap();
        assert_eq!(client.price_usd("dogecoin").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_rate_limited() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v3/simple/price"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let client = CoinGeckoClient::new(server.uri(), Duration::from_secs(5)).unwrap();
        let result = client.price_usd("ethereum").await;
        assert!(matches!(result, Err(ServiceError::Api { status: 429, .. })));
    }
}
