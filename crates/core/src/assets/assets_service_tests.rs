use std::sync::{Arc, Mutex};

use serde_json::json;

use super::assets_errors::AssetError;
use super::assets_model::{Asset, CreateAssetInput, NewAsset};
use super::assets_service::AssetService;
use super::assets_traits::{AssetRepositoryTrait, AssetServiceTrait};
use crate::errors::{Error, Result};

/// In-memory repository mirroring the store contract: ids are assigned on
/// insert, deletes of unknown ids fail with NotFound.
#[derive(Default)]
struct MockAssetRepository {
    rows: Mutex<Vec<Asset>>,
    next_id: Mutex<i32>,
}

impl AssetRepositoryTrait for MockAssetRepository {
    fn list(&self) -> Result<Vec<Asset>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    fn insert(&self, new_asset: NewAsset) -> Result<Asset> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let asset = Asset {
            id: *next_id,
            name: new_asset.name,
            quantity: new_asset.quantity,
            buying_price_per_unit: new_asset.buying_price_per_unit,
            currency: new_asset.currency,
        };
        self.rows.lock().unwrap().push(asset.clone());
        Ok(asset)
    }

    fn delete(&self, asset_id: i32) -> Result<()> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|a| a.id != asset_id);
        if rows.len() == before {
            return Err(AssetError::NotFound.into());
        }
        Ok(())
    }
}

fn service() -> (Arc<MockAssetRepository>, AssetService) {
    let repository = Arc::new(MockAssetRepository::default());
    let service = AssetService::new(repository.clone());
    (repository, service)
}

fn input(name: &str, quantity: serde_json::Value, price: serde_json::Value) -> CreateAssetInput {
    CreateAssetInput {
        name: Some(name.to_string()),
        quantity: Some(quantity),
        buying_price_per_unit: Some(price),
    }
}

fn asset_error(result: Result<Asset>) -> AssetError {
    match result {
        Err(Error::Asset(e)) => e,
        other => panic!("expected asset error, got {:?}", other.map(|a| a.id)),
    }
}

#[tokio::test]
async fn create_persists_trimmed_name_and_default_currency() {
    let (_, service) = service();
    let created = service
        .create_asset(input("  bitcoin ", json!(2.0), json!(10000)))
        .await
        .unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.name, "bitcoin");
    assert_eq!(created.quantity, 2.0);
    assert_eq!(created.buying_price_per_unit, 10000.0);
    assert_eq!(created.currency, "USD");
}

#[tokio::test]
async fn create_accepts_numeric_strings() {
    let (_, service) = service();
    let created = service
        .create_asset(input("gold", json!("2.5"), json!(" 1800 ")))
        .await
        .unwrap();
    assert_eq!(created.quantity, 2.5);
    assert_eq!(created.buying_price_per_unit, 1800.0);
}

#[tokio::test]
async fn add_then_list_includes_asset_exactly_once() {
    let (_, service) = service();
    service
        .create_asset(input("gold", json!(1.0), json!(2000)))
        .await
        .unwrap();
    let assets = service.get_assets().unwrap();
    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0].name, "gold");
    assert_eq!(assets[0].quantity, 1.0);
    assert_eq!(assets[0].buying_price_per_unit, 2000.0);
}

#[tokio::test]
async fn blank_name_is_a_missing_field() {
    let (_, service) = service();
    let err = asset_error(service.create_asset(input("   ", json!(1), json!(1))).await);
    assert_eq!(err, AssetError::MissingFields);
}

#[tokio::test]
async fn absent_quantity_is_a_missing_field() {
    let (_, service) = service();
    let err = asset_error(
        service
            .create_asset(CreateAssetInput {
                name: Some("gold".to_string()),
                quantity: None,
                buying_price_per_unit: Some(json!(1)),
            })
            .await,
    );
    assert_eq!(err, AssetError::MissingFields);
}

#[tokio::test]
async fn non_numeric_quantity_is_rejected() {
    let (_, service) = service();
    let err = asset_error(service.create_asset(input("gold", json!("abc"), json!(1))).await);
    assert_eq!(err, AssetError::NotNumeric);
}

#[tokio::test]
async fn negative_quantity_is_rejected() {
    let (_, service) = service();
    let err = asset_error(service.create_asset(input("x", json!(-1.0), json!(1))).await);
    assert_eq!(err, AssetError::Negative);
}

#[tokio::test]
async fn zero_quantity_is_allowed() {
    let (_, service) = service();
    let created = service
        .create_asset(input("gold", json!(0.0), json!(0.0)))
        .await
        .unwrap();
    assert_eq!(created.quantity, 0.0);
}

#[tokio::test]
async fn delete_missing_id_reports_not_found_and_leaves_store_unchanged() {
    let (_, service) = service();
    service
        .create_asset(input("gold", json!(1.0), json!(2000)))
        .await
        .unwrap();

    let result = service.delete_asset(42).await;
    assert!(matches!(result, Err(Error::Asset(AssetError::NotFound))));
    assert_eq!(service.get_assets().unwrap().len(), 1);
}

#[tokio::test]
async fn delete_removes_the_asset() {
    let (_, service) = service();
    let created = service
        .create_asset(input("gold", json!(1.0), json!(2000)))
        .await
        .unwrap();
    service.delete_asset(created.id).await.unwrap();
    assert!(service.get_assets().unwrap().is_empty());
}

#[test]
fn validation_error_messages_are_the_api_contract() {
    assert_eq!(
        AssetError::MissingFields.to_string(),
        "Name, Quantity, and Buying Price are required."
    );
    assert_eq!(
        AssetError::NotNumeric.to_string(),
        "Quantity and Buying Price must be numbers."
    );
    assert_eq!(
        AssetError::Negative.to_string(),
        "Quantity and Buying Price must be non-negative."
    );
    assert_eq!(AssetError::NotFound.to_string(), "Asset not found.");
}
