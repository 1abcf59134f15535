//! Configuration loading

pub mod file_config;
pub mod loader;

pub use file_config::{CacheConfig, FetchConfig, FileConfig, SourceConfig, UiConfig};
pub use loader::ConfigLoader;
