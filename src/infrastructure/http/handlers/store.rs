//! Store HTTP Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::domain::store::StoreId;
use crate::infrastructure::http::dto::{CreateStoreRequest, StoreResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取门店详情
pub async fn get_store(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<StoreResponse>, ApiError> {
    let store = state.store_service.get_by_id(StoreId::new(id)).await?;

    Ok(Json(StoreResponse::from(&store)))
}

/// 创建门店
pub async fn create_store(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateStoreRequest>,
) -> Result<Json<StoreResponse>, ApiError> {
    let store = state.store_service.create(req.into()).await?;

    tracing::info!(
        store_id = %store.id(),
        name = %store.name(),
        "Store created via API"
    );

    Ok(Json(StoreResponse::from(&store)))
}
