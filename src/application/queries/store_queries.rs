//! Store Queries

use crate::domain::store::StoreId;

/// 获取门店详情查询
#[derive(Debug, Clone, Copy)]
pub struct GetStore {
    pub store_id: StoreId,
}
