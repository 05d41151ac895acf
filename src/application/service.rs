//! Store Service - StoreServicePort 的默认实现
//!
//! 组合命令侧与查询侧的 handler

use async_trait::async_trait;
use std::sync::Arc;

use crate::application::commands::handlers::CreateStoreHandler;
use crate::application::commands::CreateStore;
use crate::application::error::ApplicationError;
use crate::application::ports::{StoreRepositoryPort, StoreServicePort};
use crate::application::queries::handlers::GetStoreHandler;
use crate::application::queries::GetStore;
use crate::domain::store::{Store, StoreId};

/// 门店服务
pub struct StoreService {
    create_store_handler: CreateStoreHandler,
    get_store_handler: GetStoreHandler,
}

impl StoreService {
    pub fn new(store_repo: Arc<dyn StoreRepositoryPort>) -> Self {
        Self {
            create_store_handler: CreateStoreHandler::new(store_repo.clone()),
            get_store_handler: GetStoreHandler::new(store_repo),
        }
    }
}

#[async_trait]
impl StoreServicePort for StoreService {
    async fn create(&self, command: CreateStore) -> Result<Store, ApplicationError> {
        self.create_store_handler.handle(command).await
    }

    async fn get_by_id(&self, id: StoreId) -> Result<Store, ApplicationError> {
        self.get_store_handler.handle(GetStore { store_id: id }).await
    }
}
