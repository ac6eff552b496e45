//! Name-keyed price source selection.
//!
//! The registry owns one source per known asset name plus a default for
//! everything else. Lookup failures never propagate: the failure is logged
//! and the asset prices at 0.0 for that call.

use std::collections::HashMap;
use std::sync::Arc;

use log::warn;

use crate::provider::{CoinGeckoProvider, FixedPriceSource, PriceSource};

/// Hardcoded spot price for gold, per troy ounce. Free real-time gold feeds
/// are rate-limited or keyed, so a constant stands in.
/// TODO: replace with a metals provider once we carry an API key for one.
pub const GOLD_SPOT_USD: f64 = 2300.00;

/// One unit of USD is one USD; unknown asset names share the same unit
/// price.
pub const UNIT_PRICE_USD: f64 = 1.0;

pub struct PriceSourceRegistry {
    sources: HashMap<String, Arc<dyn PriceSource>>,
    default_source: Arc<dyn PriceSource>,
}

impl PriceSourceRegistry {
    /// Builds the standard policy: bitcoin from the given external source,
    /// gold and usd from constants, anything else at the unit price.
    pub fn with_defaults(bitcoin_source: Arc<dyn PriceSource>) -> Self {
        let mut sources: HashMap<String, Arc<dyn PriceSource>> = HashMap::new();
        sources.insert("bitcoin".to_string(), bitcoin_source);
        sources.insert(
            "gold".to_string(),
            Arc::new(FixedPriceSource::new("GOLD_FIXED", GOLD_SPOT_USD)),
        );
        sources.insert(
            "usd".to_string(),
            Arc::new(FixedPriceSource::new("USD_FIXED", UNIT_PRICE_USD)),
        );

        Self {
            sources,
            default_source: Arc::new(FixedPriceSource::new("UNIT_FIXED", UNIT_PRICE_USD)),
        }
    }

    /// Registry with a CoinGecko provider pointed at `base_url`.
    pub fn from_coingecko_url(base_url: String) -> Self {
        Self::with_defaults(Arc::new(CoinGeckoProvider::with_base_url(base_url)))
    }

    fn source_for(&self, asset_name_lower: &str) -> &Arc<dyn PriceSource> {
        self.sources
            .get(asset_name_lower)
            .unwrap_or(&self.default_source)
    }

    /// Current per-unit USD price for `asset_name`, case-insensitive.
    ///
    /// Never fails: a provider error prices the asset at 0.0 for this call
    /// without affecting any other asset.
    pub async fn price_of(&self, asset_name: &str) -> f64 {
        let key = asset_name.to_lowercase();
        let source = self.source_for(&key);
        match source.spot_usd().await {
            Ok(price) => price,
            Err(e) => {
                warn!(
                    "Price lookup for '{}' via {} failed: {}",
                    key,
                    source.id(),
                    e
                );
                0.0
            }
        }
    }
}

impl Default for PriceSourceRegistry {
    /// Standard policy against the public CoinGecko endpoint.
    fn default() -> Self {
        Self::with_defaults(Arc::new(CoinGeckoProvider::new()))
    }
}
