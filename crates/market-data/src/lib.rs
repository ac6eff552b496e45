//! Holdfolio Market Data Crate
//!
//! This crate provides provider-agnostic spot price lookup for the
//! Holdfolio application.
//!
//! # Overview
//!
//! - [`PriceSource`]: trait implemented by every price provider
//! - [`CoinGeckoProvider`]: Bitcoin spot USD price over HTTPS
//! - [`FixedPriceSource`]: constant prices for assets without a live feed
//! - [`PriceSourceRegistry`]: selects a source by lowercased asset name and
//!   degrades any provider failure to a price of 0.0 for that asset

pub mod errors;
pub mod provider;
pub mod registry;

pub use errors::MarketDataError;
pub use provider::{CoinGeckoProvider, FixedPriceSource, PriceSource};
pub use registry::PriceSourceRegistry;
