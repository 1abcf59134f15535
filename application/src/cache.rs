//! Corpus cache — explicit memoization of the load pass
//!
//! The source list is static for the life of the process and fetching is
//! the dominant cost, so the load result is cached keyed on source-list
//! identity. Invalidation is explicit (user-initiated reload); there is no
//! implicit global caching.

use crate::ports::resource_fetcher::ResourceFetcher;
use crate::use_cases::load_corpus::{LoadCorpusError, LoadCorpusUseCase, LoadOutcome};
use qaha_domain::SourceList;
use std::time::Duration;
use tokio::sync::Mutex;

struct CacheEntry {
    sources: SourceList,
    outcome: LoadOutcome,
}

/// Single-slot cache for the memoized load.
///
/// Holding the lock across the load also serializes concurrent callers, so
/// an unchanged list is fetched at most once per window.
pub struct CorpusCache {
    ttl: Option<Duration>,
    slot: Mutex<Option<CacheEntry>>,
}

impl CorpusCache {
    /// `ttl = None` caches for the life of the process
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Return the cached outcome, or run the loader and cache its result.
    ///
    /// A hit requires the same source list and, when a TTL is set, an entry
    /// younger than the window.
    pub async fn get_or_load<F: ResourceFetcher + 'static>(
        &self,
        use_case: &LoadCorpusUseCase<F>,
        sources: &SourceList,
    ) -> Result<LoadOutcome, LoadCorpusError> {
        let mut slot = self.slot.lock().await;

        if let Some(entry) = slot.as_ref() {
            let fresh = self
                .ttl
                .map(|ttl| entry.outcome.loaded_at.elapsed() < ttl)
                .unwrap_or(true);
            if fresh && entry.sources == *sources {
                return Ok(entry.outcome.clone());
            }
        }

        let outcome = use_case.execute(sources).await?;
        *slot = Some(CacheEntry {
            sources: sources.clone(),
            outcome: outcome.clone(),
        });
        Ok(outcome)
    }

    /// Drop the cached entry so the next call re-fetches
    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::resource_fetcher::FetchError;
    use async_trait::async_trait;
    use qaha_domain::{Model, VerseSource};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingFetcher {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ResourceFetcher for CountingFetcher {
        async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(",chapter,verse,orig\n0,1,1,x\n".to_string())
        }
    }

    fn list() -> SourceList {
        SourceList::new(vec![VerseSource::new("https://h/GPT3.csv", Model::Gpt3)])
    }

    #[tokio::test]
    async fn test_second_load_hits_the_cache() {
        let fetcher = Arc::new(CountingFetcher {
            calls: AtomicUsize::new(0),
        });
        let use_case = LoadCorpusUseCase::new(fetcher.clone());
        let cache = CorpusCache::new(None);

        let first = cache.get_or_load(&use_case, &list()).await.unwrap();
        let second = cache.get_or_load(&use_case, &list()).await.unwrap();

        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
        // Identical corpus, not merely an equal one
        assert!(Arc::ptr_eq(&first.corpus, &second.corpus));
    }

    #[tokio::test]
    async fn test_changed_list_reloads() {
        let fetcher = Arc::new(CountingFetcher {
            calls: AtomicUsize::new(0),
        });
        let use_case = LoadCorpusUseCase::new(fetcher.clone());
        let cache = CorpusCache::new(None);

        cache.get_or_load(&use_case, &list()).await.unwrap();
        let other = SourceList::new(vec![VerseSource::new(
            "https://h/Llama2.csv",
            Model::Llama2,
        )]);
        cache.get_or_load(&use_case, &other).await.unwrap();

        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let fetcher = Arc::new(CountingFetcher {
            calls: AtomicUsize::new(0),
        });
        let use_case = LoadCorpusUseCase::new(fetcher.clone());
        let cache = CorpusCache::new(None);

        cache.get_or_load(&use_case, &list()).await.unwrap();
        cache.invalidate().await;
        cache.get_or_load(&use_case, &list()).await.unwrap();

        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_zero_ttl_never_hits() {
        let fetcher = Arc::new(CountingFetcher {
            calls: AtomicUsize::new(0),
        });
        let use_case = LoadCorpusUseCase::new(fetcher.clone());
        let cache = CorpusCache::new(Some(Duration::ZERO));

        cache.get_or_load(&use_case, &list()).await.unwrap();
        cache.get_or_load(&use_case, &list()).await.unwrap();

        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
    }
}
