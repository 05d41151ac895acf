//! Data Transfer Objects
//!
//! 响应体的字段顺序即序列化顺序，`id` 必须位于 `name` 之前

use serde::{Deserialize, Serialize};

use crate::application::CreateStore;
use crate::domain::store::Store;

// ============================================================================
// 错误响应结构
// ============================================================================

/// 门店不存在时的提示
pub const UNKNOWN_STORE_ID: &str = "Unknown store id";

/// 门店名称为空时的提示
pub const EMPTY_STORE_NAME: &str = "name cannot be empty";

/// 内部错误提示（不暴露细节）
pub const INTERNAL_ERROR: &str = "Internal server error";

/// `{"message": ...}` 格式的错误体
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// `{"msg": ...}` 格式的错误体
///
/// 与 [`MessageBody`] 的键名不同，保持与现有客户端兼容
#[derive(Debug, Serialize)]
pub struct MsgBody {
    pub msg: &'static str,
}

// ============================================================================
// Store DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct CreateStoreRequest {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

impl From<CreateStoreRequest> for CreateStore {
    fn from(req: CreateStoreRequest) -> Self {
        CreateStore {
            name: req.name,
            id: req.id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StoreResponse {
    pub id: i64,
    pub name: String,
}

impl From<&Store> for StoreResponse {
    fn from(store: &Store) -> Self {
        Self {
            id: store.id().value(),
            name: store.name().as_str().to_string(),
        }
    }
}
