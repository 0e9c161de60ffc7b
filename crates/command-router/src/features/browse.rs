//! Commands that open something on the host: music, web searches, apps.

use super::FeatureHandler;
use crate::catalog::Catalog;
use crate::error::{RouterError, RouterResult};
use crate::launcher::{google_search_url, youtube_search_url, UrlLauncher};
use crate::normalize::{capitalize, strip_trigger};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::error;

fn launch(launcher: &dyn UrlLauncher, target: &str) -> RouterResult<()> {
    launcher
        .launch(target)
        .map_err(|source| RouterError::Launch {
            target: target.to_string(),
            source,
        })
}

pub struct PlayMusicFeature {
    launcher: Arc<dyn UrlLauncher>,
}

impl PlayMusicFeature {
    pub fn new(launcher: Arc<dyn UrlLauncher>) -> Self {
        Self { launcher }
    }
}

#[async_trait]
impl FeatureHandler for PlayMusicFeature {
    fn name(&self) -> &'static str {
        "music"
    }

    fn triggers(&self) -> &'static [&'static str] {
        &["play music"]
    }

    async fn execute(&self, command: &str) -> RouterResult<String> {
        let song = strip_trigger(command, "play music");
        if song.is_empty() {
            return Ok("Please specify a song name.".into());
        }

        launch(self.launcher.as_ref(), &youtube_search_url(&song))?;
        Ok(format!("Playing '{}' on YouTube.", song))
    }
}

/// Sites reachable through "search in <site>".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSite {
    Google,
    YouTube,
}

impl SearchSite {
    fn label(self) -> &'static str {
        match self {
            SearchSite::Google => "Google",
            SearchSite::YouTube => "YouTube",
        }
    }

    fn url(self, term: &str) -> String {
        match self {
            SearchSite::Google => google_search_url(term),
            SearchSite::YouTube => youtube_search_url(term),
        }
    }
}

pub struct WebSearchFeature {
    site: SearchSite,
    launcher: Arc<dyn UrlLauncher>,
}

impl WebSearchFeature {
    pub fn new(site: SearchSite, launcher: Arc<dyn UrlLauncher>) -> Self {
        Self { site, launcher }
    }
}

#[async_trait]
impl FeatureHandler for WebSearchFeature {
    fn name(&self) -> &'static str {
        match self.site {
            SearchSite::Google => "google",
            SearchSite::YouTube => "youtube",
        }
    }

    fn triggers(&self) -> &'static [&'static str] {
        match self.site {
            SearchSite::Google => &["search in google"],
            SearchSite::YouTube => &["search in youtube"],
        }
    }

    async fn execute(&self, command: &str) -> RouterResult<String> {
        let term = strip_trigger(command, self.triggers()[0]);
        if term.is_empty() {
            return Ok(format!(
                "Please specify what to search on {}.",
                self.site.label()
            ));
        }

        launch(self.launcher.as_ref(), &self.site.url(&term))?;
        Ok(format!("Searching for '{}' on {}.", term, self.site.label()))
    }
}

/// "open <app>" for apps listed in the catalog.
pub struct OpenAppFeature {
    launcher: Arc<dyn UrlLauncher>,
    catalog: Arc<Catalog>,
}

impl OpenAppFeature {
    pub fn new(launcher: Arc<dyn UrlLauncher>, catalog: Arc<Catalog>) -> Self {
        Self { launcher, catalog }
    }
}

#[async_trait]
impl FeatureHandler for OpenAppFeature {
    fn name(&self) -> &'static str {
        "open"
    }

    fn triggers(&self) -> &'static [&'static str] {
        &["open"]
    }

    async fn execute(&self, command: &str) -> RouterResult<String> {
        let app = strip_trigger(command, "open");

        let Some(target) = self.catalog.app(&app) else {
            return Ok(format!(
                "I can't open '{}'. Please check the application name.",
                app
            ));
        };

        match self.launcher.launch(target) {
            Ok(()) => Ok(format!("Opening {}.", capitalize(&app))),
            Err(e) => {
                error!(app = %app, error = %e, "Error opening application");
                Ok(format!("Failed to open {}.", app))
            }
        }
    }
}
