use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::valuation_calculator::{calculate_asset_valuation, profit_loss_percentage};
use super::valuation_model::{AssetValuation, PortfolioSummary};
use super::valuation_traits::ValuationServiceTrait;
use crate::assets::Asset;
use crate::errors::Result;
use crate::market_data::MarketDataServiceTrait;
use crate::utils::format::{capitalize, format_percent, format_quantity, format_usd};

/// Request-local memo of looked-up prices, keyed by lowercased asset name.
/// Built fresh for every valuation pass so nothing leaks across requests.
type PriceMemo = HashMap<String, f64>;

pub struct ValuationService {
    market_data: Arc<dyn MarketDataServiceTrait>,
}

impl ValuationService {
    pub fn new(market_data: Arc<dyn MarketDataServiceTrait>) -> Self {
        Self { market_data }
    }

    async fn price_for(&self, memo: &mut PriceMemo, asset_name: &str) -> f64 {
        let key = asset_name.to_lowercase();
        if let Some(price) = memo.get(&key) {
            return *price;
        }
        let price = self.market_data.price_of(&key).await;
        memo.insert(key, price);
        price
    }
}

#[async_trait]
impl ValuationServiceTrait for ValuationService {
    async fn value_portfolio(&self, assets: Vec<Asset>) -> Result<PortfolioSummary> {
        let mut memo = PriceMemo::new();
        let mut rows = Vec::with_capacity(assets.len());
        let mut total_current_value = 0.0;
        let mut total_buying_value = 0.0;

        for asset in &assets {
            let current_price = self.price_for(&mut memo, &asset.name).await;
            let figures = calculate_asset_valuation(asset, current_price);

            rows.push(AssetValuation {
                id: asset.id,
                name: capitalize(&asset.name),
                quantity: format_quantity(asset.quantity),
                buying_price_per_unit: format_usd(asset.buying_price_per_unit),
                current_price_per_unit: format_usd(current_price),
                buying_value_usd: format_usd(figures.buying_value),
                current_value_usd: format_usd(figures.current_value),
                profit_loss_usd: format_usd(figures.profit_loss),
                profit_loss_percentage: format_percent(figures.profit_loss_percentage),
            });

            total_current_value += figures.current_value;
            total_buying_value += figures.buying_value;
        }

        let overall_profit_loss = total_current_value - total_buying_value;
        let overall_percentage = profit_loss_percentage(total_buying_value, overall_profit_loss);
        debug!(
            "Valued {} assets with {} price lookups",
            assets.len(),
            memo.len()
        );

        Ok(PortfolioSummary {
            assets: rows,
            total_portfolio_current_value: format_usd(total_current_value),
            total_portfolio_buying_value: format_usd(total_buying_value),
            overall_profit_loss_usd: format_usd(overall_profit_loss),
            overall_profit_loss_percentage: format_percent(overall_percentage),
        })
    }
}
