//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（StoreServicePort、StoreRepositoryPort）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - service: 门店服务（组合命令与查询）
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;
pub mod service;

// Re-exports
pub use commands::{handlers::CreateStoreHandler, CreateStore};

pub use error::ApplicationError;

pub use ports::{
    NewStoreRecord, RepositoryError, StoreRecord, StoreRepositoryPort, StoreServicePort,
};

pub use queries::{handlers::GetStoreHandler, GetStore};

pub use service::StoreService;
