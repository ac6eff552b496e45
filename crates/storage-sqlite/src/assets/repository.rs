use std::sync::Arc;

use diesel::prelude::*;

use holdfolio_core::assets::{Asset, AssetError, AssetRepositoryTrait, NewAsset};
use holdfolio_core::Result;

use super::model::{AssetDB, NewAssetDB};
use crate::db::{get_connection, DbPool};
use crate::errors::IntoCore;
use crate::schema::assets;

pub struct AssetRepository {
    pool: Arc<DbPool>,
}

impl AssetRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        AssetRepository { pool }
    }
}

impl AssetRepositoryTrait for AssetRepository {
    fn list(&self) -> Result<Vec<Asset>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = assets::table
            .order(assets::id.asc())
            .load::<AssetDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(Asset::from).collect())
    }

    fn insert(&self, new_asset: NewAsset) -> Result<Asset> {
        let mut conn = get_connection(&self.pool)?;
        let new_asset_db = NewAssetDB::from(new_asset);
        // Each write is its own immediate transaction; there is no batching
        // across assets.
        let row: AssetDB = conn
            .immediate_transaction(|conn| {
                diesel::insert_into(assets::table)
                    .values(&new_asset_db)
                    .returning(AssetDB::as_returning())
                    .get_result(conn)
            })
            .into_core()?;
        Ok(Asset::from(row))
    }

    fn delete(&self, asset_id: i32) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        let affected = conn
            .immediate_transaction(|conn| diesel::delete(assets::table.find(asset_id)).execute(conn))
            .into_core()?;
        if affected == 0 {
            return Err(AssetError::NotFound.into());
        }
        Ok(())
    }
}
