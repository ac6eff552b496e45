use async_trait::async_trait;

use super::valuation_model::PortfolioSummary;
use crate::assets::Asset;
use crate::errors::Result;

/// Trait defining the contract for the request-scoped portfolio valuation.
#[async_trait]
pub trait ValuationServiceTrait: Send + Sync {
    /// Values the given holdings snapshot at current prices and formats the
    /// result for display. Prices are looked up once per distinct lowercased
    /// name, through a memo that lives only for this call.
    async fn value_portfolio(&self, assets: Vec<Asset>) -> Result<PortfolioSummary>;
}
