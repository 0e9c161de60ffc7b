//! Static content served by the random-pick features and the app opener.

use crate::error::{RouterError, RouterResult};
use rand::seq::SliceRandom;
use std::collections::HashMap;

/// Read-only content tables, built once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub quotes: Vec<String>,
    pub jokes: Vec<String>,
    pub facts: Vec<String>,
    pub stories: Vec<String>,
    /// Spoken app name -> URL or launchable program.
    pub apps: HashMap<String, String>,
}

impl Catalog {
    /// Look up an app by its exact (lowercase) spoken name.
    pub fn app(&self, name: &str) -> Option<&str> {
        self.apps.get(name).map(String::as_str)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let owned = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };

        Self {
            quotes: owned(QUOTES),
            jokes: owned(JOKES),
            facts: owned(FACTS),
            stories: owned(STORIES),
            apps: APPS
                .iter()
                .map(|(name, target)| (name.to_string(), target.to_string()))
                .collect(),
        }
    }
}

/// Pick one entry of a named list uniformly at random.
pub fn pick<'a>(list: &'static str, items: &'a [String]) -> RouterResult<&'a str> {
    items
        .choose(&mut rand::thread_rng())
        .map(String::as_str)
        .ok_or(RouterError::EmptyCatalog(list))
}

const QUOTES: &[&str] = &[
    "The only way to do great work is to love what you do. - Steve Jobs",
    "Life is what happens when you're busy making other plans. - John Lennon",
    "Get busy living or get busy dying. - Stephen King",
    "You only live once, but if you do it right, once is enough. - Mae West",
    "The purpose of our lives is to be happy. - Dalai Lama",
];

const JOKES: &[&str] = &[
    "Why don't scientists trust atoms? Because they make up everything!",
    "What do you call fake spaghetti? An impasta!",
    "Why did the scarecrow win an award? Because he was outstanding in his field!",
    "I told my wife she was drawing her eyebrows too high. She looked surprised!",
    "What do you call cheese that isn't yours? Nacho cheese!",
];

const FACTS: &[&str] = &[
    "Honey never spoils. Archaeologists have found pots of honey in ancient Egyptian tombs that are over 3,000 years old and still perfectly good to eat.",
    "Bananas are berries, but strawberries aren't.",
    "A group of flamingos is called a 'flamboyance.'",
    "Wombat poop is cube-shaped.",
    "Octopuses have three hearts.",
];

const STORIES: &[&str] = &[
    "Once upon a time, in a faraway land, there was a small village where everyone was happy. One day, a stranger came...",
    "Long ago, in a kingdom by the sea, there lived a brave knight who set out on an adventure to rescue a captive princess...",
];

const APPS: &[(&str, &str)] = &[
    ("instagram", "https://www.instagram.com"),
    ("google", "https://www.google.com"),
    ("facebook", "https://www.facebook.com"),
    ("youtube", "https://www.youtube.com"),
    ("linkedin", "https://www.linkedin.com"),
    ("github", "https://www.github.com"),
    ("stackoverflow", "https://stackoverflow.com"),
    ("amazon", "https://www.amazon.com"),
    ("flipkart", "https://www.flipkart.com"),
    ("whatsapp", "https://web.whatsapp.com"),
    ("chrome", "chrome"),
    ("command prompt", "cmd"),
    ("powershell", "powershell"),
    ("visual studio code", "code"),
    ("zoom", "zoom"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_populated() {
        let catalog = Catalog::default();
        assert_eq!(catalog.quotes.len(), 5);
        assert_eq!(catalog.jokes.len(), 5);
        assert_eq!(catalog.facts.len(), 5);
        assert_eq!(catalog.stories.len(), 2);
        assert_eq!(catalog.apps.len(), 15);
    }

    #[test]
    fn test_app_lookup_is_exact() {
        let catalog = Catalog::default();
        assert_eq!(catalog.app("github"), Some("https://www.github.com"));
        assert_eq!(catalog.app("visual studio code"), Some("code"));
        assert_eq!(catalog.app("git"), None);
    }

    #[test]
    fn test_pick_from_empty_list() {
        let result = pick("quotes", &[]);
        assert!(matches!(result, Err(RouterError::EmptyCatalog("quotes"))));
    }

    #[test]
    fn test_pick_returns_member() {
        let catalog = Catalog::default();
        let joke = pick("jokes", &catalog.jokes).unwrap();
        assert!(catalog.jokes.iter().any(|j| j == joke));
    }
}
