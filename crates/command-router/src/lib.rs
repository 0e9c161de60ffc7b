//! Keyword command router for the Panda voice assistant.
//!
//! A command is normalized, checked against the canned phrase table and
//! then against the feature handlers in a fixed order. The first match
//! produces the reply; anything else gets a fallback message.
//!
//! ```no_run
//! use command_router::{CommandRouter, FeatureContext};
//! # async fn demo(ctx: FeatureContext) {
//! let router = CommandRouter::new(&ctx);
//! let reply = router.handle("roll a dice").await;
//! # }
//! ```

mod canned;
mod catalog;
mod error;
pub mod features;
mod greeting;
mod launcher;
mod normalize;
mod router;
mod scheduler;
pub mod services;

pub use canned::{CannedPhrase, CannedPhraseTable};
pub use catalog::Catalog;
pub use error::{RouterError, RouterResult, ServiceError};
pub use features::{standard_features, FeatureContext, FeatureHandler, DEFAULT_CITY};
pub use greeting::{greeting_for_hour, wish_me};
pub use launcher::{google_search_url, youtube_search_url, LogOnlyLauncher, SystemLauncher, UrlLauncher};
pub use normalize::normalize;
pub use router::{CommandRouter, Route, FALLBACK_RESPONSE, GENERAL_ERROR_MSG};
pub use scheduler::{ConsoleNotifier, Notifier, ScheduledTask, Scheduler, TaskKind, TokioScheduler};
pub use services::{
    CoinGeckoClient, NewsApiClient, OpenWeatherClient, Services, WikipediaClient,
};
