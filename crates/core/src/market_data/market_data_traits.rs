use async_trait::async_trait;

/// Trait defining the contract for price lookups.
#[async_trait]
pub trait MarketDataServiceTrait: Send + Sync {
    /// Current per-unit USD price for `asset_name`, case-insensitive.
    ///
    /// Never fails: an upstream lookup failure degrades to 0.0 for that
    /// asset only.
    async fn price_of(&self, asset_name: &str) -> f64;
}
