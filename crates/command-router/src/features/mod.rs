//! Feature handlers, tried in order after the canned phrases.

mod browse;
mod clock;
mod content;
mod crypto;
mod news;
mod schedule;
mod weather;
mod wikipedia;

pub use browse::{OpenAppFeature, PlayMusicFeature, SearchSite, WebSearchFeature};
pub use clock::{DateFeature, DayFeature, TimeFeature};
pub use content::{DiceFeature, PickFeature, Shelf, StopFeature};
pub use crypto::{CryptoFeature, CRYPTO_ERROR_MSG};
pub use news::{NewsFeature, NEWS_ERROR_MSG};
pub use schedule::{ReminderFeature, TimerFeature};
pub use weather::{extract_city, WeatherFeature, WEATHER_ERROR_MSG};
pub use wikipedia::{WikipediaFeature, WIKIPEDIA_ERROR_MSG};

use crate::catalog::Catalog;
use crate::error::RouterResult;
use crate::launcher::UrlLauncher;
use crate::scheduler::Scheduler;
use crate::services::Services;
use async_trait::async_trait;
use std::sync::Arc;

/// City used when a weather command names none.
pub const DEFAULT_CITY: &str = "Mumbai";

/// A feature the router can dispatch a normalized command to.
#[async_trait]
pub trait FeatureHandler: Send + Sync {
    /// Feature name used in logs and routes (e.g., "weather").
    fn name(&self) -> &'static str;

    /// Substrings that select this feature.
    fn triggers(&self) -> &'static [&'static str];

    /// Check if this feature handles the normalized command.
    fn matches(&self, command: &str) -> bool {
        self.triggers().iter().any(|t| command.contains(t))
    }

    /// Run the feature on the full normalized command.
    async fn execute(&self, command: &str) -> RouterResult<String>;
}

/// Everything the standard features need, built once at startup.
#[derive(Clone)]
pub struct FeatureContext {
    pub services: Services,
    pub launcher: Arc<dyn UrlLauncher>,
    pub scheduler: Arc<dyn Scheduler>,
    pub catalog: Arc<Catalog>,
    pub default_city: String,
}

impl FeatureContext {
    /// Context with the built-in catalog and default city.
    pub fn new(
        services: Services,
        launcher: Arc<dyn UrlLauncher>,
        scheduler: Arc<dyn Scheduler>,
    ) -> Self {
        Self {
            services,
            launcher,
            scheduler,
            catalog: Arc::new(Catalog::default()),
            default_city: DEFAULT_CITY.into(),
        }
    }

    /// Set the city used by bare weather commands.
    pub fn with_default_city(mut self, city: impl Into<String>) -> Self {
        self.default_city = city.into();
        self
    }

    /// Replace the content tables.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Arc::new(catalog);
        self
    }
}

/// The standard features in evaluation order.
///
/// Later triggers are loose substrings ("time", "date", "day", "open",
/// "stop") that also occur inside earlier, more specific phrases, so the
/// order here decides what a command means. Do not reorder.
pub fn standard_features(ctx: &FeatureContext) -> Vec<Box<dyn FeatureHandler>> {
    vec![
        Box::new(WeatherFeature::new(
            ctx.services.weather.clone(),
            ctx.default_city.clone(),
        )),
        Box::new(NewsFeature::new(ctx.services.news.clone())),
        Box::new(PickFeature::new(Shelf::Quotes, ctx.catalog.clone())),
        Box::new(PickFeature::new(Shelf::Jokes, ctx.catalog.clone())),
        Box::new(PickFeature::new(Shelf::Facts, ctx.catalog.clone())),
        Box::new(CryptoFeature::new(ctx.services.crypto.clone())),
        Box::new(PlayMusicFeature::new(ctx.launcher.clone())),
        Box::new(WikipediaFeature::new(ctx.services.encyclopedia.clone())),
        Box::new(WebSearchFeature::new(SearchSite::Google, ctx.launcher.clone())),
        Box::new(WebSearchFeature::new(SearchSite::YouTube, ctx.launcher.clone())),
        Box::new(DiceFeature),
        Box::new(TimeFeature),
        Box::new(DateFeature),
        Box::new(ReminderFeature::new(ctx.scheduler.clone())),
        Box::new(DayFeature),
        Box::new(OpenAppFeature::new(ctx.launcher.clone(), ctx.catalog.clone())),
        Box::new(TimerFeature::new(ctx.scheduler.clone())),
        Box::new(PickFeature::new(Shelf::Stories, ctx.catalog.clone())),
        Box::new(StopFeature),
    ]
}
