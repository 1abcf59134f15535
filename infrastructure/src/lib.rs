//! Infrastructure layer for qaha
//!
//! External adapters: the HTTPS fetcher behind the `ResourceFetcher` port
//! and the figment-based configuration loader.

pub mod config;
pub mod http;

pub use config::{ConfigLoader, FileConfig};
pub use http::HttpResourceFetcher;
