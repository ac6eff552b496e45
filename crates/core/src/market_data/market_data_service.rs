use async_trait::async_trait;

use holdfolio_market_data::PriceSourceRegistry;

use super::market_data_traits::MarketDataServiceTrait;

/// Core-side wrapper around the price-source registry, so the valuation
/// engine only ever sees the `MarketDataServiceTrait` seam.
pub struct MarketDataService {
    registry: PriceSourceRegistry,
}

impl MarketDataService {
    pub fn new(registry: PriceSourceRegistry) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl MarketDataServiceTrait for MarketDataService {
    async fn price_of(&self, asset_name: &str) -> f64 {
        self.registry.price_of(asset_name).await
    }
}
