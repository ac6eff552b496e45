//! Price source trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;

/// Trait for spot price sources.
///
/// Implement this trait to add support for a new price feed; the registry
/// decides which source serves which asset name and handles failure
/// degradation, so implementations just fetch and report.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Unique identifier for this source.
    ///
    /// Should be a constant string like "COINGECKO". Used for logging.
    fn id(&self) -> &'static str;

    /// Fetch the current per-unit USD price.
    async fn spot_usd(&self) -> Result<f64, MarketDataError>;
}
