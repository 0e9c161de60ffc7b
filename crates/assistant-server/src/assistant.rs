//! Builds the command router from configuration.

use crate::config::Config;
use anyhow::{Context, Result};
use command_router::{
    CoinGeckoClient, CommandRouter, ConsoleNotifier, FeatureContext, LogOnlyLauncher,
    NewsApiClient, OpenWeatherClient, Services, SystemLauncher, TokioScheduler, UrlLauncher,
    WikipediaClient,
};
use std::sync::Arc;
use tracing::{info, warn};

/// HTTP clients for every configured external service.
pub fn build_services(config: &Config) -> Result<Services> {
    if config.weather.api_key.is_none() {
        warn!("WEATHER__API_KEY not set, weather commands will fail");
    }
    if config.news.api_key.is_none() {
        warn!("NEWS__API_KEY not set, news commands will fail");
    }

    let weather = OpenWeatherClient::new(
        config.weather.api_key.clone(),
        &config.weather.base_url,
        config.weather.timeout,
    )
    .context("Failed to create weather client")?;

    let news = NewsApiClient::new(
        config.news.api_key.clone(),
        &config.news.base_url,
        &config.news.country,
        config.news.timeout,
    )
    .context("Failed to create news client")?
    .with_page_size(config.news.page_size);

    let crypto = CoinGeckoClient::new(&config.crypto.base_url, config.crypto.timeout)
        .context("Failed to create crypto client")?;

    let encyclopedia = WikipediaClient::new(&config.wikipedia.base_url, config.wikipedia.timeout)
        .context("Failed to create Wikipedia client")?;

    Ok(Services {
        weather: Arc::new(weather),
        news: Arc::new(news),
        crypto: Arc::new(crypto),
        encyclopedia: Arc::new(encyclopedia),
    })
}

/// Router with real clients, the configured launcher and a console notifier.
pub fn build_command_router(config: &Config) -> Result<CommandRouter> {
    let services = build_services(config)?;

    let launcher: Arc<dyn UrlLauncher> = if config.launcher.enabled {
        Arc::new(SystemLauncher)
    } else {
        info!("Launcher disabled, open requests will only be logged");
        Arc::new(LogOnlyLauncher)
    };

    let scheduler = Arc::new(TokioScheduler::new(Arc::new(ConsoleNotifier)));

    let ctx = FeatureContext::new(services, launcher, scheduler)
        .with_default_city(config.assistant.default_city.clone());

    Ok(CommandRouter::new(&ctx))
}
