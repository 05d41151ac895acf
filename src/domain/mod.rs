//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Store Context: 门店管理

pub mod store;
