//! Load corpus use case
//!
//! Fetches every source table, merges the ones that parse, and reports the
//! rest. One bad source never aborts the others; zero good sources is fatal.

use crate::ports::resource_fetcher::ResourceFetcher;
use qaha_domain::{Corpus, CorpusBuilder, LoadReport, SourceList, parse_table};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during a corpus load
#[derive(Error, Debug)]
pub enum LoadCorpusError {
    /// Every source failed; the report says why, per source
    #[error("All sources failed to load")]
    AllSourcesFailed(LoadReport),

    #[error("Source list is empty")]
    NoSources,
}

/// Result of one load pass
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    /// The merged corpus; shared read-only with every viewer
    pub corpus: Arc<Corpus>,
    /// Per-source failures, possibly empty
    pub report: LoadReport,
    pub loaded_at: Instant,
}

/// Use case for building the corpus from a source list
pub struct LoadCorpusUseCase<F: ResourceFetcher + 'static> {
    fetcher: Arc<F>,
}

impl<F: ResourceFetcher + 'static> LoadCorpusUseCase<F> {
    pub fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    /// Fetch and merge all sources, in list order.
    ///
    /// Fetches are sequential; a per-source fetch or parse failure is
    /// recorded in the report and the loop continues.
    pub async fn execute(&self, sources: &SourceList) -> Result<LoadOutcome, LoadCorpusError> {
        if sources.is_empty() {
            return Err(LoadCorpusError::NoSources);
        }

        info!("Loading {} source tables", sources.len());

        let mut builder = CorpusBuilder::new();
        let mut report = LoadReport::default();
        let mut loaded = 0usize;

        for source in sources.iter() {
            let name = source.display_name();
            let body = match self.fetcher.fetch(&source.url).await {
                Ok(body) => body,
                Err(e) => {
                    warn!(model = name, "fetch failed: {}", e);
                    report.push(name, e.to_string());
                    continue;
                }
            };
            let rows = match parse_table(&body) {
                Ok(rows) => rows,
                Err(e) => {
                    warn!(model = name, "parse failed: {}", e);
                    report.push(name, e.to_string());
                    continue;
                }
            };
            let dropped = builder.append_table(name, rows);
            if dropped > 0 {
                debug!(model = name, dropped, "dropped rows with bad indices");
            }
            loaded += 1;
        }

        if loaded == 0 {
            return Err(LoadCorpusError::AllSourcesFailed(report));
        }

        let corpus = builder.build();
        info!(
            "Loaded {} of {} sources, {} records, {} failures",
            loaded,
            sources.len(),
            corpus.len(),
            report.len()
        );

        Ok(LoadOutcome {
            corpus: Arc::new(corpus),
            report,
            loaded_at: Instant::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::resource_fetcher::FetchError;
    use async_trait::async_trait;
    use qaha_domain::{Model, VerseSource};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub(crate) struct StubFetcher {
        pub bodies: HashMap<String, String>,
        pub calls: AtomicUsize,
    }

    impl StubFetcher {
        pub fn new(bodies: &[(&str, &str)]) -> Self {
            Self {
                bodies: bodies
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ResourceFetcher for StubFetcher {
        async fn fetch(&self, url: &str) -> Result<String, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.bodies
                .get(url)
                .cloned()
                .ok_or(FetchError::Timeout)
        }
    }

    fn sources(urls: &[&str]) -> SourceList {
        SourceList::new(
            urls.iter()
                .map(|u| {
                    let file = u.rsplit('/').next().unwrap();
                    VerseSource::new(*u, Model::from_csv_file(file))
                })
                .collect(),
        )
    }

    const GOOD: &str = ",chapter,verse,orig,translation\n0,1,1,x,alpha\n";

    #[tokio::test]
    async fn test_partial_failure_is_reported_not_fatal() {
        let fetcher = Arc::new(StubFetcher::new(&[("https://h/GPT3.csv", GOOD)]));
        let use_case = LoadCorpusUseCase::new(fetcher);
        let list = sources(&["https://h/GPT3.csv", "https://h/Llama2.csv"]);

        let outcome = use_case.execute(&list).await.unwrap();
        assert_eq!(outcome.corpus.len(), 1);
        assert_eq!(outcome.report.len(), 1);
        assert_eq!(outcome.report.failures[0].model, "Llama 2");
        assert_eq!(outcome.report.failures[0].message, "Request timed out");
        // The failed model never shows up among selectable models
        assert_eq!(outcome.corpus.model_names(), vec!["GPT-3".to_string()]);
    }

    #[tokio::test]
    async fn test_all_sources_failed_is_fatal() {
        let fetcher = Arc::new(StubFetcher::new(&[]));
        let use_case = LoadCorpusUseCase::new(fetcher);
        let list = sources(&["https://h/GPT3.csv", "https://h/Llama2.csv"]);

        let err = use_case.execute(&list).await.unwrap_err();
        match err {
            LoadCorpusError::AllSourcesFailed(report) => assert_eq!(report.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_unparseable_body_is_a_per_source_failure() {
        let fetcher = Arc::new(StubFetcher::new(&[
            ("https://h/GPT3.csv", GOOD),
            ("https://h/Llama2.csv", ",verse,orig\n0,1,x\n"),
        ]));
        let use_case = LoadCorpusUseCase::new(fetcher);
        let list = sources(&["https://h/GPT3.csv", "https://h/Llama2.csv"]);

        let outcome = use_case.execute(&list).await.unwrap();
        assert_eq!(outcome.report.len(), 1);
        assert!(outcome.report.failures[0].message.contains("chapter"));
    }

    #[tokio::test]
    async fn test_empty_source_list_is_rejected() {
        let fetcher = Arc::new(StubFetcher::new(&[]));
        let use_case = LoadCorpusUseCase::new(fetcher);
        let err = use_case.execute(&SourceList::default()).await.unwrap_err();
        assert!(matches!(err, LoadCorpusError::NoSources));
    }

    #[tokio::test]
    async fn test_corpus_order_follows_list_order() {
        let fetcher = Arc::new(StubFetcher::new(&[
            ("https://h/Llama2.csv", GOOD),
            ("https://h/GPT3.csv", GOOD),
        ]));
        let use_case = LoadCorpusUseCase::new(fetcher);
        let list = sources(&["https://h/Llama2.csv", "https://h/GPT3.csv"]);

        let outcome = use_case.execute(&list).await.unwrap();
        let models: Vec<&str> = outcome
            .corpus
            .records()
            .iter()
            .map(|r| r.model.as_str())
            .collect();
        assert_eq!(models, vec!["Llama 2", "GPT-3"]);
    }
}
