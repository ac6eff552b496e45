use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use holdfolio_core::{
    assets::{AssetService, AssetServiceTrait},
    market_data::{MarketDataService, MarketDataServiceTrait},
    portfolio::valuation::{ValuationService, ValuationServiceTrait},
};
use holdfolio_market_data::PriceSourceRegistry;
use holdfolio_storage_sqlite::{assets::AssetRepository, db};

use crate::config::Config;

pub struct AppState {
    pub asset_service: Arc<dyn AssetServiceTrait>,
    pub valuation_service: Arc<dyn ValuationServiceTrait>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;

    let asset_repository = Arc::new(AssetRepository::new(pool.clone()));
    let asset_service: Arc<dyn AssetServiceTrait> = Arc::new(AssetService::new(asset_repository));

    let registry = PriceSourceRegistry::from_coingecko_url(config.coingecko_url.clone());
    let market_data_service: Arc<dyn MarketDataServiceTrait> =
        Arc::new(MarketDataService::new(registry));
    let valuation_service: Arc<dyn ValuationServiceTrait> =
        Arc::new(ValuationService::new(market_data_service));

    Ok(Arc::new(AppState {
        asset_service,
        valuation_service,
    }))
}
