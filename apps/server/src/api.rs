use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode},
    routing::{delete, get},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use holdfolio_core::assets::CreateAssetInput;
use holdfolio_core::portfolio::valuation::PortfolioSummary;

use crate::{config::Config, error::ApiResult, main_lib::AppState};

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn readyz() -> &'static str {
    "ok"
}

/// Values the current holdings snapshot at fresh prices; the price memo
/// lives and dies inside this one call.
async fn list_assets(State(state): State<Arc<AppState>>) -> ApiResult<Json<PortfolioSummary>> {
    let assets = state.asset_service.get_assets()?;
    let summary = state.valuation_service.value_portfolio(assets).await?;
    Ok(Json(summary))
}

#[derive(serde::Serialize)]
struct CreateAssetResponse {
    message: String,
    id: i32,
}

async fn create_asset(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateAssetInput>,
) -> ApiResult<(StatusCode, Json<CreateAssetResponse>)> {
    let created = state.asset_service.create_asset(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateAssetResponse {
            message: "Asset added successfully!".to_string(),
            id: created.id,
        }),
    ))
}

#[derive(serde::Serialize)]
struct DeleteAssetResponse {
    message: String,
}

async fn delete_asset(
    Path(asset_id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DeleteAssetResponse>> {
    state.asset_service.delete_asset(asset_id).await?;
    Ok(Json(DeleteAssetResponse {
        message: "Asset deleted successfully!".to_string(),
    }))
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| o.parse::<HeaderValue>().unwrap())
            .collect::<Vec<_>>();
        CorsLayer::new().allow_origin(origins)
    };

    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/assets", get(list_assets).post(create_asset))
        .route("/assets/{id}", delete(delete_asset));

    Router::new()
        .nest("/api", api)
        .with_state(state)
        .layer(cors)
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
