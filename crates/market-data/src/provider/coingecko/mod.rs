//! CoinGecko provider for the Bitcoin spot price.
//!
//! Queries the public `simple/price` endpoint; the free tier needs no API
//! key. A missing `bitcoin.usd` field in an otherwise well-formed response
//! is a zero price, not an error.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::errors::MarketDataError;
use crate::provider::PriceSource;

/// Provider ID constant
const PROVIDER_ID: &str = "COINGECKO";

/// Public API base URL
const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Response shape of `simple/price`: `{"bitcoin": {"usd": 12345.0}}`.
type SimplePriceResponse = HashMap<String, HashMap<String, f64>>;

/// CoinGecko-backed price source for Bitcoin.
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
}

impl CoinGeckoProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string())
    }

    /// Points the provider at an alternate endpoint (used by tests).
    pub fn with_base_url(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, base_url }
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceSource for CoinGeckoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn spot_usd(&self) -> Result<f64, MarketDataError> {
        let url = format!(
            "{}/simple/price?ids=bitcoin&vs_currencies=usd",
            self.base_url
        );

        let response = self.client.get(&url).send().await?.error_for_status()?;

        let data: SimplePriceResponse =
            response
                .json()
                .await
                .map_err(|e| MarketDataError::UnexpectedPayload {
                    provider: PROVIDER_ID.to_string(),
                    message: e.to_string(),
                })?;

        Ok(data
            .get("bitcoin")
            .and_then(|prices| prices.get("usd"))
            .copied()
            .unwrap_or(0.0))
    }
}
