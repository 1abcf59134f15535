//! HTTP adapters

pub mod fetcher;

pub use fetcher::HttpResourceFetcher;
