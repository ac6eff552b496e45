//! Asset domain models.

use serde::{Deserialize, Serialize};

/// Domain model representing a stored holding.
///
/// `name` identifies the asset class for price lookup (case-insensitive
/// there, case-preserved here). `currency` defaults to the base currency and
/// is never converted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Asset {
    pub id: i32,
    pub name: String,
    pub quantity: f64,
    pub buying_price_per_unit: f64,
    pub currency: String,
}

/// Validated input for persisting a new holding. Produced by
/// `AssetService::create_asset`; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAsset {
    pub name: String,
    pub quantity: f64,
    pub buying_price_per_unit: f64,
    pub currency: String,
}

/// Raw create-asset payload as received from the client.
///
/// The numeric fields arrive as arbitrary JSON values because the front-end
/// form may submit numbers or numeric strings; validation decides which
/// client error to report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAssetInput {
    pub name: Option<String>,
    pub quantity: Option<serde_json::Value>,
    pub buying_price_per_unit: Option<serde_json::Value>,
}
