//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod store_repo;

pub use database::*;
pub use store_repo::*;
