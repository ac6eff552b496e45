//! Wire models for the valuation payload.
//!
//! The numeric fields are pre-formatted display strings (see
//! `utils::format`); the front-end renders them verbatim.

use serde::Serialize;

/// One valued holding as returned by `GET /api/assets`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AssetValuation {
    pub id: i32,
    pub name: String,
    pub quantity: String,
    pub buying_price_per_unit: String,
    pub current_price_per_unit: String,
    pub buying_value_usd: String,
    pub current_value_usd: String,
    pub profit_loss_usd: String,
    pub profit_loss_percentage: String,
}

/// Full portfolio payload: per-asset rows plus aggregate totals, with the
/// same percentage rule applied to the totals.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PortfolioSummary {
    pub assets: Vec<AssetValuation>,
    pub total_portfolio_current_value: String,
    pub total_portfolio_buying_value: String,
    pub overall_profit_loss_usd: String,
    pub overall_profit_loss_percentage: String,
}
