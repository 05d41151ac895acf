//! projectstore - 门店 CRUD 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Store Context: 门店实体、名称校验、领域错误
//!
//! 应用层 (application/):
//! - Ports: StoreServicePort, StoreRepositoryPort
//! - Commands / Queries: CreateStore, GetStore
//! - StoreService: 组合命令与查询
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API (axum)
//! - Persistence: SQLite 存储
//! - Memory: 内存存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
