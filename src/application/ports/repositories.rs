//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite / 内存）

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Store Repository
// ============================================================================

/// 待插入的门店（id 由仓储分配）
#[derive(Debug, Clone)]
pub struct NewStoreRecord {
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// 门店实体（用于持久化）
#[derive(Debug, Clone, PartialEq)]
pub struct StoreRecord {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Store Repository Port
#[async_trait]
pub trait StoreRepositoryPort: Send + Sync {
    /// 插入门店并返回分配了 id 的记录
    async fn insert(&self, store: &NewStoreRecord) -> Result<StoreRecord, RepositoryError>;

    /// 根据 ID 查找门店
    async fn find_by_id(&self, id: i64) -> Result<Option<StoreRecord>, RepositoryError>;
}

impl TryFrom<StoreRecord> for crate::domain::store::Store {
    type Error = RepositoryError;

    fn try_from(record: StoreRecord) -> Result<Self, Self::Error> {
        use crate::domain::store::{StoreId, StoreName};

        let name = StoreName::new(record.name).map_err(|e| {
            RepositoryError::SerializationError(format!("store {}: {}", record.id, e))
        })?;
        Ok(Self::new(StoreId::new(record.id), name, record.created_at))
    }
}
