//! Application State
//!
//! HTTP 层唯一的共享状态：注入的门店服务

use std::sync::Arc;

use crate::application::{StoreRepositoryPort, StoreService, StoreServicePort};

/// 应用状态
pub struct AppState {
    pub store_service: Arc<dyn StoreServicePort>,
}

impl AppState {
    /// 使用给定的服务实现创建应用状态
    pub fn new(store_service: Arc<dyn StoreServicePort>) -> Self {
        Self { store_service }
    }

    /// 基于仓储构建默认的 StoreService
    pub fn from_repository(store_repo: Arc<dyn StoreRepositoryPort>) -> Self {
        Self::new(Arc::new(StoreService::new(store_repo)))
    }
}
