//! Commands answered from static content or a dice roll.

use super::FeatureHandler;
use crate::catalog::{pick, Catalog};
use crate::error::RouterResult;
use async_trait::async_trait;
use rand::Rng;
use std::sync::Arc;

/// Which catalog list a pick feature draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shelf {
    Quotes,
    Jokes,
    Facts,
    Stories,
}

/// Answers with a random entry of one catalog list.
pub struct PickFeature {
    shelf: Shelf,
    catalog: Arc<Catalog>,
}

impl PickFeature {
    pub fn new(shelf: Shelf, catalog: Arc<Catalog>) -> Self {
        Self { shelf, catalog }
    }
}

#[async_trait]
impl FeatureHandler for PickFeature {
    fn name(&self) -> &'static str {
        match self.shelf {
            Shelf::Quotes => "quote",
            Shelf::Jokes => "joke",
            Shelf::Facts => "fact",
            Shelf::Stories => "story",
        }
    }

    fn triggers(&self) -> &'static [&'static str] {
        match self.shelf {
            Shelf::Quotes => &["quote of the day"],
            Shelf::Jokes => &["joke"],
            Shelf::Facts => &["fact"],
            Shelf::Stories => &["tell me a story"],
        }
    }

    async fn execute(&self, _command: &str) -> RouterResult<String> {
        let items = match self.shelf {
            Shelf::Quotes => &self.catalog.quotes,
            Shelf::Jokes => &self.catalog.jokes,
            Shelf::Facts => &self.catalog.facts,
            Shelf::Stories => &self.catalog.stories,
        };
        pick(self.name(), items).map(str::to_string)
    }
}

pub struct DiceFeature;

#[async_trait]
impl FeatureHandler for DiceFeature {
    fn name(&self) -> &'static str {
        "dice"
    }

    fn triggers(&self) -> &'static [&'static str] {
        &["roll a dice"]
    }

    async fn execute(&self, _command: &str) -> RouterResult<String> {
        let roll: u8 = rand::thread_rng().gen_range(1..=6);
        Ok(format!("You rolled a {}.", roll))
    }
}

pub struct StopFeature;

#[async_trait]
impl FeatureHandler for StopFeature {
    fn name(&self) -> &'static str {
        "stop"
    }

    fn triggers(&self) -> &'static [&'static str] {
        &["stop"]
    }

    async fn execute(&self, _command: &str) -> RouterResult<String> {
        Ok("Stopping current operations.".into())
    }
}
