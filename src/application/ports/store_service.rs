//! Store Service Port - 入站端口
//!
//! HTTP 层只依赖这个 trait，便于在测试中替换实现

use async_trait::async_trait;

use crate::application::commands::CreateStore;
use crate::application::error::ApplicationError;
use crate::domain::store::{Store, StoreId};

/// 门店服务
#[async_trait]
pub trait StoreServicePort: Send + Sync {
    /// 创建门店
    ///
    /// 名称为空或缺失时返回 `StoreError::EmptyName`，且不会写入任何记录
    async fn create(&self, command: CreateStore) -> Result<Store, ApplicationError>;

    /// 根据 ID 获取门店
    ///
    /// 不存在时返回 `StoreError::NotFound`
    async fn get_by_id(&self, id: StoreId) -> Result<Store, ApplicationError>;
}
