//! Price source implementations.

pub mod coingecko;
pub mod fixed;
mod traits;

pub use coingecko::CoinGeckoProvider;
pub use fixed::FixedPriceSource;
pub use traits::PriceSource;
