use super::assets_model::{Asset, CreateAssetInput, NewAsset};
use crate::errors::Result;

/// Trait defining the contract for Asset service operations.
#[async_trait::async_trait]
pub trait AssetServiceTrait: Send + Sync {
    fn get_assets(&self) -> Result<Vec<Asset>>;
    /// Validates the raw payload and persists a new holding with a freshly
    /// assigned id.
    async fn create_asset(&self, input: CreateAssetInput) -> Result<Asset>;
    /// Fails with `AssetError::NotFound` if no holding has that id.
    async fn delete_asset(&self, asset_id: i32) -> Result<()>;
}

/// Trait defining the contract for Asset repository operations.
pub trait AssetRepositoryTrait: Send + Sync {
    /// All holdings in insertion order.
    fn list(&self) -> Result<Vec<Asset>>;
    fn insert(&self, new_asset: NewAsset) -> Result<Asset>;
    fn delete(&self, asset_id: i32) -> Result<()>;
}
