//! Configuration file schema
//!
//! The defaults reproduce the upstream archive: fifteen per-model CSV
//! tables served from GitHub raw content. The list is config-like and
//! static; overriding it is for mirrors and tests, not a runtime feature.

use qaha_domain::{Model, SourceList};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Upstream repository serving the per-model CSV tables
pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/jsnhum/LLM.-Qur-an-translation/main";

fn default_files() -> Vec<String> {
    Model::catalog().iter().map(Model::csv_file).collect()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

/// Where the source tables live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-model CSV file names, in loader order
    #[serde(default = "default_files")]
    pub files: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            files: default_files(),
        }
    }
}

/// Network behavior for the loader
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Memoization window for the load
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Seconds before a cached load goes stale; absent = process lifetime
    #[serde(default)]
    pub ttl_secs: Option<u64>,
}

/// Viewer behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Start with every model checked
    #[serde(default = "default_true")]
    pub select_all: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { select_all: true }
    }
}

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl FileConfig {
    /// Build the ordered source list the loader consumes
    pub fn source_list(&self) -> SourceList {
        SourceList::from_base(&self.source.base_url, &self.source.files)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch.timeout_secs)
    }

    pub fn cache_ttl(&self) -> Option<Duration> {
        self.cache.ttl_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reproduce_the_archive_catalog() {
        let config = FileConfig::default();
        assert_eq!(config.source.files.len(), 15);
        assert_eq!(config.source.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.fetch.timeout_secs, 30);
        assert!(config.ui.select_all);
        assert_eq!(config.cache_ttl(), None);

        let list = config.source_list();
        assert_eq!(list.len(), 15);
        let first = list.iter().next().unwrap();
        assert_eq!(
            first.url,
            format!("{}/Claude_haiku.csv", DEFAULT_BASE_URL)
        );
        assert_eq!(first.display_name(), "Claude Haiku");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [cache]
            ttl_secs = 600

            [ui]
            select_all = false
            "#,
        )
        .unwrap();
        assert_eq!(config.cache_ttl(), Some(Duration::from_secs(600)));
        assert!(!config.ui.select_all);
        assert_eq!(config.source.files.len(), 15);
    }
}
