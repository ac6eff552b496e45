use std::sync::Arc;

use log::debug;

use super::assets_errors::AssetError;
use super::assets_model::{Asset, CreateAssetInput, NewAsset};
use super::assets_traits::{AssetRepositoryTrait, AssetServiceTrait};
use crate::constants::DEFAULT_CURRENCY;
use crate::errors::Result;

/// Service for managing the stored holdings.
pub struct AssetService {
    repository: Arc<dyn AssetRepositoryTrait>,
}

impl AssetService {
    pub fn new(repository: Arc<dyn AssetRepositoryTrait>) -> Self {
        Self { repository }
    }
}

/// Accepts a JSON number or a numeric string ("2.5" is as valid as 2.5).
fn parse_numeric(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

#[async_trait::async_trait]
impl AssetServiceTrait for AssetService {
    fn get_assets(&self) -> Result<Vec<Asset>> {
        self.repository.list()
    }

    async fn create_asset(&self, input: CreateAssetInput) -> Result<Asset> {
        // Presence first, then numeric shape, then sign; each failure maps to
        // its own client message.
        let name = input.name.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Err(AssetError::MissingFields.into());
        }
        let (quantity_raw, price_raw) = match (&input.quantity, &input.buying_price_per_unit) {
            (Some(quantity), Some(price)) => (quantity, price),
            _ => return Err(AssetError::MissingFields.into()),
        };

        let quantity = parse_numeric(quantity_raw).ok_or(AssetError::NotNumeric)?;
        let buying_price_per_unit = parse_numeric(price_raw).ok_or(AssetError::NotNumeric)?;

        if quantity < 0.0 || buying_price_per_unit < 0.0 {
            return Err(AssetError::Negative.into());
        }

        let created = self.repository.insert(NewAsset {
            name: name.to_string(),
            quantity,
            buying_price_per_unit,
            currency: DEFAULT_CURRENCY.to_string(),
        })?;
        debug!("Created asset {} ({})", created.id, created.name);
        Ok(created)
    }

    async fn delete_asset(&self, asset_id: i32) -> Result<()> {
        self.repository.delete(asset_id)?;
        debug!("Deleted asset {}", asset_id);
        Ok(())
    }
}
