//! Command classification and dispatch.

use crate::canned::{CannedPhrase, CannedPhraseTable};
use crate::features::{standard_features, FeatureContext, FeatureHandler};
use crate::normalize::normalize;
use tracing::{debug, error};

/// Reply when nothing matches the command.
pub const FALLBACK_RESPONSE: &str =
    "I'm sorry, I didn't understand that. Could you please rephrase?";

/// Reply when a feature fails in a way it could not handle itself.
pub const GENERAL_ERROR_MSG: &str =
    "An error occurred while processing the command. Please try again.";

/// Where a command is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// Answered by the canned phrase with this trigger.
    Canned(&'a str),
    /// Dispatched to the named feature.
    Feature(&'static str),
    /// Nothing matched.
    Fallback,
}

enum Target<'a> {
    Canned(&'a CannedPhrase),
    Feature(&'a dyn FeatureHandler),
    Fallback,
}

/// Routes free-text commands to canned replies or feature handlers.
///
/// Canned phrases are checked first, then features in order; the first
/// match wins. Both tables are fixed at construction.
pub struct CommandRouter {
    canned: CannedPhraseTable,
    features: Vec<Box<dyn FeatureHandler>>,
}

impl CommandRouter {
    /// Router with the built-in canned phrases and the standard features.
    pub fn new(ctx: &FeatureContext) -> Self {
        Self::from_parts(CannedPhraseTable::default(), standard_features(ctx))
    }

    /// Router with explicit tables.
    pub fn from_parts(canned: CannedPhraseTable, features: Vec<Box<dyn FeatureHandler>>) -> Self {
        Self { canned, features }
    }

    /// Replace the canned phrase table.
    pub fn with_canned_phrases(mut self, canned: CannedPhraseTable) -> Self {
        self.canned = canned;
        self
    }

    /// Feature names in evaluation order.
    pub fn feature_names(&self) -> Vec<&'static str> {
        self.features.iter().map(|f| f.name()).collect()
    }

    /// Where `raw` would be routed, without running anything.
    pub fn classify(&self, raw: &str) -> Route<'_> {
        match self.resolve(&normalize(raw)) {
            Target::Canned(phrase) => Route::Canned(phrase.trigger()),
            Target::Feature(feature) => Route::Feature(feature.name()),
            Target::Fallback => Route::Fallback,
        }
    }

    /// Answer a raw command. Never fails: errors become reply text.
    pub async fn handle(&self, raw: &str) -> String {
        debug!(command = %raw, "Handling command");
        let command = normalize(raw);

        match self.resolve(&command) {
            Target::Canned(phrase) => {
                debug!(trigger = phrase.trigger(), "Matched canned phrase");
                phrase.pick_reply().to_string()
            }
            Target::Feature(feature) => {
                debug!(feature = feature.name(), "Dispatching to feature");
                match feature.execute(&command).await {
                    Ok(response) => response,
                    Err(e) => {
                        error!(feature = feature.name(), error = %e, "Error processing command");
                        GENERAL_ERROR_MSG.to_string()
                    }
                }
            }
            Target::Fallback => {
                debug!(command = %command, "No route matched");
                FALLBACK_RESPONSE.to_string()
            }
        }
    }

    fn resolve(&self, command: &str) -> Target<'_> {
        if let Some(phrase) = self.canned.find(command) {
            return Target::Canned(phrase);
        }

        self.features
            .iter()
            .find(|f| f.matches(command))
            .map(|f| Target::Feature(f.as_ref()))
            .unwrap_or(Target::Fallback)
    }
}
