//! Configuration for the assistant server.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// HTTP listener
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging
    #[serde(default)]
    pub log: LogConfig,

    /// Assistant persona and defaults
    #[serde(default)]
    pub assistant: AssistantConfig,

    /// OpenWeatherMap
    #[serde(default)]
    pub weather: WeatherConfig,

    /// NewsAPI
    #[serde(default)]
    pub news: NewsConfig,

    /// CoinGecko
    #[serde(default)]
    pub crypto: CryptoConfig,

    /// Wikipedia
    #[serde(default)]
    pub wikipedia: WikipediaConfig,

    /// Opening URLs and apps on the host
    #[serde(default)]
    pub launcher: LauncherConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory with the web UI, served at `/`
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Also write logs to this file
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    /// Name used in greetings
    #[serde(default = "default_user_name")]
    pub user_name: String,

    /// City for weather commands that name none
    #[serde(default = "default_city")]
    pub default_city: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    pub api_key: Option<String>,

    #[serde(default = "default_weather_url")]
    pub base_url: String,

    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsConfig {
    pub api_key: Option<String>,

    #[serde(default = "default_news_url")]
    pub base_url: String,

    /// Two-letter country code for top headlines
    #[serde(default = "default_news_country")]
    pub country: String,

    /// Headlines per reply
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CryptoConfig {
    #[serde(default = "default_crypto_url")]
    pub base_url: String,

    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WikipediaConfig {
    #[serde(default = "default_wikipedia_url")]
    pub base_url: String,

    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LauncherConfig {
    /// Open URLs on this host; when false launches are only logged
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            user_name: default_user_name(),
            default_city: default_city(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_weather_url(),
            timeout: default_timeout(),
        }
    }
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_news_url(),
            country: default_news_country(),
            page_size: default_page_size(),
            timeout: default_timeout(),
        }
    }
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            base_url: default_crypto_url(),
            timeout: default_timeout(),
        }
    }
}

impl Default for WikipediaConfig {
    fn default() -> Self {
        Self {
            base_url: default_wikipedia_url(),
            timeout: default_timeout(),
        }
    }
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_listen_addr() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    5000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_log_level() -> String {
    "info".into()
}

fn default_user_name() -> String {
    "User".into()
}

fn default_city() -> String {
    command_router::DEFAULT_CITY.into()
}

fn default_weather_url() -> String {
    "https://api.openweathermap.org".into()
}

fn default_news_url() -> String {
    "https://newsapi.org".into()
}

fn default_news_country() -> String {
    "in".into()
}

fn default_page_size() -> usize {
    5
}

fn default_crypto_url() -> String {
    "https://api.coingecko.com".into()
}

fn default_wikipedia_url() -> String {
    "https://en.wikipedia.org".into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(10)
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Nested keys use `__`, e.g. `WEATHER__API_KEY` or `SERVER__PORT`.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
