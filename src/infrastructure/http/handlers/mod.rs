//! HTTP Handlers

mod ping;
mod store;

pub use ping::*;
pub use store::*;
