//! Store Context - Errors

use thiserror::Error;

use super::StoreId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("门店名称不能为空")]
    EmptyName,

    #[error("门店不存在: {0}")]
    NotFound(StoreId),
}
