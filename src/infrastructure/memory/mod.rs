//! Memory Layer - 内存实现
//!
//! 不落盘的门店仓储，用于 `memory` 后端和测试

mod store_repo;

pub use store_repo::InMemoryStoreRepository;
