//! Crypto price command.

use super::FeatureHandler;
use crate::error::RouterResult;
use crate::normalize::capitalize;
use crate::services::CryptoService;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, warn};

pub const CRYPTO_ERROR_MSG: &str = "Error fetching cryptocurrency data.";

pub struct CryptoFeature {
    crypto: Arc<dyn CryptoService>,
}

impl CryptoFeature {
    pub fn new(crypto: Arc<dyn CryptoService>) -> Self {
        Self { crypto }
    }
}

#[async_trait]
impl FeatureHandler for CryptoFeature {
    fn name(&self) -> &'static str {
        "crypto"
    }

    fn triggers(&self) -> &'static [&'static str] {
        &["bitcoin price", "ethereum price"]
    }

    async fn execute(&self, command: &str) -> RouterResult<String> {
        let coin = if command.contains("bitcoin") {
            "bitcoin"
        } else {
            "ethereum"
        };

        match self.crypto.price_usd(coin).await {
            Ok(Some(price)) => Ok(format!(
                "The current price of {} is ${}.",
                capitalize(coin),
                price
            )),
            Ok(None) => Ok(format!("Couldn't retrieve the price for {}.", coin)),
            Err(e) if e.is_rejection() => {
                warn!(coin, error = %e, "Price lookup rejected");
                Ok(format!("Couldn't retrieve the price for {}.", coin))
            }
            Err(e) => {
                error!(coin, error = %e, "Error fetching crypto price");
                Ok(CRYPTO_ERROR_MSG.into())
            }
        }
    }
}
