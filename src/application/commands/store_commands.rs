//! Store Commands

/// 创建门店命令
///
/// `id` 仅为兼容请求体格式而保留，处理时会被忽略
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateStore {
    pub name: Option<String>,
    pub id: Option<i64>,
}

impl CreateStore {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            id: None,
        }
    }
}
