//! Application layer for qaha
//!
//! Use cases and ports. The loader orchestrates fetching and merging
//! through the `ResourceFetcher` port; the `CorpusCache` memoizes one load
//! per source list with explicit invalidation.

pub mod cache;
pub mod ports;
pub mod use_cases;

pub use cache::CorpusCache;
pub use ports::{FetchError, ResourceFetcher};
pub use use_cases::{LoadCorpusError, LoadCorpusUseCase, LoadOutcome};
