use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::assets::Asset;
use crate::market_data::MarketDataServiceTrait;
use crate::portfolio::valuation::{ValuationService, ValuationServiceTrait};

/// Price lookup stub that records every call; unknown names price at 1.0
/// like the registry's default source.
#[derive(Default)]
struct MockMarketData {
    prices: HashMap<String, f64>,
    calls: Mutex<Vec<String>>,
}

impl MockMarketData {
    fn with_price(name: &str, price: f64) -> Self {
        let mut prices = HashMap::new();
        prices.insert(name.to_string(), price);
        Self {
            prices,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl MarketDataServiceTrait for MockMarketData {
    async fn price_of(&self, asset_name: &str) -> f64 {
        self.calls.lock().unwrap().push(asset_name.to_string());
        self.prices
            .get(&asset_name.to_lowercase())
            .copied()
            .unwrap_or(1.0)
    }
}

fn asset(id: i32, name: &str, quantity: f64, buying_price_per_unit: f64) -> Asset {
    Asset {
        id,
        name: name.to_string(),
        quantity,
        buying_price_per_unit,
        currency: "USD".to_string(),
    }
}

#[tokio::test]
async fn bitcoin_doubling_in_price_reports_a_hundred_percent_gain() {
    let market_data = Arc::new(MockMarketData::with_price("bitcoin", 20000.0));
    let service = ValuationService::new(market_data);

    let summary = service
        .value_portfolio(vec![asset(1, "bitcoin", 2.0, 10000.0)])
        .await
        .unwrap();

    let row = &summary.assets[0];
    assert_eq!(row.name, "Bitcoin");
    assert_eq!(row.quantity, "2.0000");
    assert_eq!(row.buying_price_per_unit, "$10,000.00");
    assert_eq!(row.current_price_per_unit, "$20,000.00");
    assert_eq!(row.buying_value_usd, "$20,000.00");
    assert_eq!(row.current_value_usd, "$40,000.00");
    assert_eq!(row.profit_loss_usd, "$20,000.00");
    assert_eq!(row.profit_loss_percentage, "100.00%");

    assert_eq!(summary.total_portfolio_current_value, "$40,000.00");
    assert_eq!(summary.total_portfolio_buying_value, "$20,000.00");
    assert_eq!(summary.overall_profit_loss_usd, "$20,000.00");
    assert_eq!(summary.overall_profit_loss_percentage, "100.00%");
}

#[tokio::test]
async fn degraded_price_of_zero_still_produces_a_row() {
    let market_data = Arc::new(MockMarketData::with_price("bitcoin", 0.0));
    let service = ValuationService::new(market_data);

    let summary = service
        .value_portfolio(vec![asset(1, "bitcoin", 2.0, 10000.0)])
        .await
        .unwrap();

    let row = &summary.assets[0];
    assert_eq!(row.current_price_per_unit, "$0.00");
    assert_eq!(row.current_value_usd, "$0.00");
    assert_eq!(row.profit_loss_usd, "$-20,000.00");
    assert_eq!(row.profit_loss_percentage, "-100.00%");
}

#[tokio::test]
async fn each_distinct_name_is_looked_up_once_per_pass() {
    let market_data = Arc::new(MockMarketData::with_price("bitcoin", 20000.0));
    let service = ValuationService::new(market_data.clone());

    service
        .value_portfolio(vec![
            asset(1, "bitcoin", 1.0, 10000.0),
            asset(2, "Bitcoin", 0.5, 15000.0),
            asset(3, "BITCOIN", 0.25, 30000.0),
            asset(4, "gold", 1.0, 2000.0),
        ])
        .await
        .unwrap();

    // Three spellings of bitcoin share one lookup; gold gets its own.
    assert_eq!(market_data.call_count(), 2);
}

#[tokio::test]
async fn memo_is_rebuilt_on_every_pass() {
    let market_data = Arc::new(MockMarketData::with_price("bitcoin", 20000.0));
    let service = ValuationService::new(market_data.clone());

    let holdings = vec![asset(1, "bitcoin", 1.0, 10000.0)];
    service.value_portfolio(holdings.clone()).await.unwrap();
    service.value_portfolio(holdings).await.unwrap();

    assert_eq!(market_data.call_count(), 2);
}

#[tokio::test]
async fn zero_cost_holding_with_value_is_an_infinite_gain() {
    let market_data = Arc::new(MockMarketData::with_price("bitcoin", 20000.0));
    let service = ValuationService::new(market_data);

    let summary = service
        .value_portfolio(vec![asset(1, "bitcoin", 1.0, 0.0)])
        .await
        .unwrap();

    assert_eq!(summary.assets[0].profit_loss_percentage, "inf%");
    assert_eq!(summary.overall_profit_loss_percentage, "inf%");
}

#[tokio::test]
async fn quantity_zero_holding_reports_a_flat_percentage() {
    let market_data = Arc::new(MockMarketData::with_price("bitcoin", 20000.0));
    let service = ValuationService::new(market_data);

    let summary = service
        .value_portfolio(vec![asset(1, "bitcoin", 0.0, 10000.0)])
        .await
        .unwrap();

    let row = &summary.assets[0];
    assert_eq!(row.quantity, "0.0000");
    assert_eq!(row.profit_loss_percentage, "0.00%");
    assert_eq!(summary.overall_profit_loss_percentage, "0.00%");
}

#[tokio::test]
async fn empty_portfolio_totals_are_zero() {
    let market_data = Arc::new(MockMarketData::default());
    let service = ValuationService::new(market_data.clone());

    let summary = service.value_portfolio(Vec::new()).await.unwrap();

    assert!(summary.assets.is_empty());
    assert_eq!(summary.total_portfolio_current_value, "$0.00");
    assert_eq!(summary.total_portfolio_buying_value, "$0.00");
    assert_eq!(summary.overall_profit_loss_usd, "$0.00");
    assert_eq!(summary.overall_profit_loss_percentage, "0.00%");
    assert_eq!(market_data.call_count(), 0);
}

#[tokio::test]
async fn totals_aggregate_across_mixed_holdings() {
    let mut prices = HashMap::new();
    prices.insert("bitcoin".to_string(), 20000.0);
    prices.insert("gold".to_string(), 2300.0);
    let market_data = Arc::new(MockMarketData {
        prices,
        calls: Mutex::new(Vec::new()),
    });
    let service = ValuationService::new(market_data);

    let summary = service
        .value_portfolio(vec![
            asset(1, "bitcoin", 1.0, 10000.0),
            asset(2, "gold", 2.0, 2000.0),
        ])
        .await
        .unwrap();

    // current 20000 + 4600, bought 10000 + 4000
    assert_eq!(summary.total_portfolio_current_value, "$24,600.00");
    assert_eq!(summary.total_portfolio_buying_value, "$14,000.00");
    assert_eq!(summary.overall_profit_loss_usd, "$10,600.00");
    // 10600 / 14000 * 100
    assert_eq!(summary.overall_profit_loss_percentage, "75.71%");
}
