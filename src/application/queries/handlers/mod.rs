//! Query Handlers 实现

mod store_handlers;

pub use store_handlers::*;
