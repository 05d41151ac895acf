//! Store Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{StoreId, StoreName};

/// Store 聚合根
///
/// 不变量:
/// - name 永远不为空
/// - id 创建后不可变
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Store {
    id: StoreId,
    name: StoreName,
    created_at: DateTime<Utc>,
}

impl Store {
    /// 由已持久化的数据重建门店
    pub fn new(id: StoreId, name: StoreName, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            created_at,
        }
    }

    // Getters
    pub fn id(&self) -> StoreId {
        self.id
    }

    pub fn name(&self) -> &StoreName {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_creation() {
        let name = StoreName::new("Boulangerie").unwrap();
        let store = Store::new(StoreId::new(123), name, Utc::now());

        assert_eq!(store.id().value(), 123);
        assert_eq!(store.name().as_str(), "Boulangerie");
    }

    #[test]
    fn test_deserialize_rejects_empty_name() {
        let result = serde_json::from_str::<Store>(
            r#"{"id":1,"name":"","created_at":"2024-01-01T00:00:00Z"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_valid_store() {
        let store: Store = serde_json::from_str(
            r#"{"id":1,"name":"FNAC","created_at":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(store.id(), StoreId::new(1));
        assert_eq!(store.name().as_str(), "FNAC");
    }
}
