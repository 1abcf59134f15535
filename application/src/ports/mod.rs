//! Ports — interfaces implemented by infrastructure adapters

pub mod resource_fetcher;

pub use resource_fetcher::{FetchError, ResourceFetcher};
