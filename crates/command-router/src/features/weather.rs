//! Weather command - current conditions for a city.

use super::FeatureHandler;
use crate::error::RouterResult;
use crate::normalize::capitalize;
use crate::services::WeatherService;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use tracing::{error, warn};

pub const WEATHER_ERROR_MSG: &str = "Error fetching weather data.";

static CITY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"weather(?: in| at)?\s*(.+)").expect("valid city regex"));

/// City named after "weather", "weather in" or "weather at", if any.
pub fn extract_city(command: &str) -> Option<String> {
    CITY_PATTERN
        .captures(command)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|city| !city.is_empty())
}

pub struct WeatherFeature {
    weather: Arc<dyn WeatherService>,
    default_city: String,
}

impl WeatherFeature {
    pub fn new(weather: Arc<dyn WeatherService>, default_city: impl Into<String>) -> Self {
        Self {
            weather,
            default_city: default_city.into(),
        }
    }
}

#[async_trait]
impl FeatureHandler for WeatherFeature {
    fn name(&self) -> &'static str {
        "weather"
    }

    fn triggers(&self) -> &'static [&'static str] {
        &["weather"]
    }

    async fn execute(&self, command: &str) -> RouterResult<String> {
        let city = extract_city(command).unwrap_or_else(|| self.default_city.clone());

        match self.weather.current(&city).await {
            Ok(report) => Ok(format!(
                "Weather in {}: {}°C, {}.",
                report.city,
                report.temperature,
                capitalize(&report.description)
            )),
            Err(e) if e.is_rejection() => {
                warn!(city = %city, error = %e, "Weather lookup rejected");
                Ok(format!("Couldn't retrieve weather information for {}.", city))
            }
            Err(e) => {
                error!(city = %city, error = %e, "Error fetching weather");
                Ok(WEATHER_ERROR_MSG.into())
            }
        }
    }
}
