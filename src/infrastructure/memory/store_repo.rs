//! In-Memory Store Repository Implementation

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::application::ports::{
    NewStoreRecord, RepositoryError, StoreRecord, StoreRepositoryPort,
};

/// 内存门店仓储
///
/// id 从 1 开始单调递增，进程退出后数据丢失
pub struct InMemoryStoreRepository {
    stores: DashMap<i64, StoreRecord>,
    next_id: AtomicI64,
}

impl InMemoryStoreRepository {
    pub fn new() -> Self {
        Self {
            stores: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

impl Default for InMemoryStoreRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoreRepositoryPort for InMemoryStoreRepository {
    async fn insert(&self, store: &NewStoreRecord) -> Result<StoreRecord, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let record = StoreRecord {
            id,
            name: store.name.clone(),
            created_at: store.created_at,
        };
        self.stores.insert(id, record.clone());
        tracing::debug!(store_id = id, "Store inserted into memory");
        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<StoreRecord>, RepositoryError> {
        Ok(self.stores.get(&id).map(|s| s.clone()))
    }
}
