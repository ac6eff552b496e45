//! Market data module - the seam between valuation and the price providers.

mod market_data_service;
mod market_data_traits;

pub use market_data_service::MarketDataService;
pub use market_data_traits::MarketDataServiceTrait;
