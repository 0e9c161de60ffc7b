//! Weather client using the OpenWeatherMap current-weather API.

use super::{handle_response, http_client, WeatherReport, WeatherService};
use crate::error::ServiceError;
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// OpenWeatherMap client.
pub struct OpenWeatherClient {
    client: Client,
    base_url: String,
    api_key: Option<SecretString>,
}

#[derive(Deserialize)]
struct WeatherResponse {
    main: Option<MainBlock>,
    weather: Option<Vec<Condition>>,
    name: Option<String>,
}

#[derive(Deserialize)]
struct MainBlock {
    temp: f64,
}

#[derive(Deserialize)]
struct Condition {
    description: String,
}

impl OpenWeatherClient {
    /// Create a client. Without an API key every lookup fails with
    /// `ServiceError::NotConfigured`.
    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ServiceError> {
        Ok(Self {
            client: http_client(timeout)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.map(SecretString::new),
        })
    }
}

#[async_trait]
impl WeatherService for OpenWeatherClient {
    async fn current(&self, city: &str) -> Result<WeatherReport, ServiceError> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| ServiceError::NotConfigured("weather API key".into()))?;

        debug!(city = %city, "Fetching weather");
        let response = self
            .client
            .get(format!("{}/data/2.5/weather", self.base_url))
            .query(&[
                ("q", city),
                ("appid", api_key.expose_secret().as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let data: WeatherResponse = handle_response(response).await?;

        let incomplete = || ServiceError::Api {
            status: 200,
            message: "response carried no weather conditions".into(),
        };
        let main = data.main.ok_or_else(incomplete)?;
        let description = data
            .weather
            .and_then(|conditions| conditions.into_iter().next())
            .map(|c| c.description)
            .ok_or_else(incomplete)?;

        Ok(WeatherReport {
            city: data.name.unwrap_or_else(|| city.to_string()),
            temperature: main.temp,
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> OpenWeatherClient {
        OpenWeatherClient::new(
            Some("test-key".into()),
            server.uri(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_current_weather() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", "paris"))
            .and(query_param("appid", "test-key"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "weather": [{"id": 500, "main": "Rain", "description": "light rain"}],
                "main": {"temp": 14.5, "humidity": 80},
                "name": "Paris"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let report = test_client(&server).current("paris").await.unwrap();
        assert_eq!(
            report,
            WeatherReport {
                city: "Paris".into(),
                temperature: 14.5,
                description: "light rain".into(),
            }
        );
    }

    #[tokio::test]
    async fn test_city_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "cod": "404",
                "message": "city not found"
            })))
            .mount(&server)
            .await;

        let result = test_client(&server).current("atlantis").await;
        match result {
            Err(ServiceError::Api { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "city not found");
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_ok_reply_without_conditions_is_rejection() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "cod": 200,
                "name": "Paris"
            })))
            .mount(&server)
            .await;

        let result = test_client(&server).current("paris").await;
        match result {
            Err(e @ ServiceError::Api { status: 200, .. }) => assert!(e.is_rejection()),
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_api_key() {
        let client =
            OpenWeatherClient::new(None, "http://localhost:9", Duration::from_secs(1)).unwrap();

        let result = client.current("paris").await;
        assert!(matches!(result, Err(ServiceError::NotConfigured(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let client = OpenWeatherClient::new(
            Some("test-key".into()),
            "http://127.0.0.1:9",
            Duration::from_secs(1),
        )
        .unwrap();

        let result = client.current("paris").await;
        assert!(matches!(result, Err(ServiceError::Http(_))));
    }
}
