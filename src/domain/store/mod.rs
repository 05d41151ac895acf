//! Store Context - 门店限界上下文
//!
//! 职责:
//! - 门店名称校验
//! - 门店标识
//! - 领域错误定义

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::Store;
pub use errors::StoreError;
pub use value_objects::{StoreId, StoreName};
