//! Database models for assets.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use holdfolio_core::assets::{Asset, NewAsset};

/// Database model for a stored holding
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::assets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AssetDB {
    pub id: i32,
    pub name: String,
    pub quantity: f64,
    pub buying_price_per_unit: f64,
    pub currency: String,
}

/// Database model for inserting a new holding; the id comes from
/// AUTOINCREMENT.
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::assets)]
pub struct NewAssetDB {
    pub name: String,
    pub quantity: f64,
    pub buying_price_per_unit: f64,
    pub currency: String,
}

// Conversion to domain models
impl From<AssetDB> for Asset {
    fn from(db: AssetDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            quantity: db.quantity,
            buying_price_per_unit: db.buying_price_per_unit,
            currency: db.currency,
        }
    }
}

impl From<NewAsset> for NewAssetDB {
    fn from(domain: NewAsset) -> Self {
        Self {
            name: domain.name,
            quantity: domain.quantity,
            buying_price_per_unit: domain.buying_price_per_unit,
            currency: domain.currency,
        }
    }
}
