//! Constant-price source for assets without a live feed.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::provider::PriceSource;

/// Always quotes the same per-unit USD price.
pub struct FixedPriceSource {
    id: &'static str,
    price: f64,
}

impl FixedPriceSource {
    pub fn new(id: &'static str, price: f64) -> Self {
        Self { id, price }
    }
}

#[async_trait]
impl PriceSource for FixedPriceSource {
    fn id(&self) -> &'static str {
        self.id
    }

    async fn spot_usd(&self) -> Result<f64, MarketDataError> {
        Ok(self.price)
    }
}
