//! Application Ports - 端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod repositories;
mod store_service;

pub use repositories::{NewStoreRecord, RepositoryError, StoreRecord, StoreRepositoryPort};
pub use store_service::StoreServicePort;
