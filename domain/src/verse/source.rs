//! Source list — the ordered set of remote tables to load

use crate::core::model::Model;

/// One remote CSV table and the model it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VerseSource {
    pub url: String,
    pub model: Model,
}

impl VerseSource {
    pub fn new(url: impl Into<String>, model: Model) -> Self {
        Self {
            url: url.into(),
            model,
        }
    }

    /// Display name used to tag rows and label failures
    pub fn display_name(&self) -> &str {
        self.model.display_name()
    }
}

/// Ordered list of sources; order defines corpus concatenation order.
///
/// Equality over the whole list is the memoization key for the loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SourceList {
    sources: Vec<VerseSource>,
}

impl SourceList {
    pub fn new(sources: Vec<VerseSource>) -> Self {
        Self { sources }
    }

    /// Build from a raw-content base URL and per-model CSV file names
    pub fn from_base(base_url: &str, files: &[String]) -> Self {
        let base = base_url.trim_end_matches('/');
        let sources = files
            .iter()
            .map(|file| {
                VerseSource::new(format!("{}/{}", base, file), Model::from_csv_file(file))
            })
            .collect();
        Self { sources }
    }

    pub fn iter(&self) -> impl Iterator<Item = &VerseSource> {
        self.sources.iter()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_base_joins_urls_and_resolves_models() {
        let list = SourceList::from_base(
            "https://raw.example.com/repo/main/",
            &["Claude_haiku.csv".to_string(), "Unknown_model.csv".to_string()],
        );
        let sources: Vec<&VerseSource> = list.iter().collect();
        assert_eq!(
            sources[0].url,
            "https://raw.example.com/repo/main/Claude_haiku.csv"
        );
        assert_eq!(sources[0].display_name(), "Claude Haiku");
        assert_eq!(sources[1].display_name(), "Unknown_model");
    }

    #[test]
    fn test_list_identity_is_the_cache_key() {
        let files = vec!["GPT3.csv".to_string()];
        let a = SourceList::from_base("https://host/x", &files);
        let b = SourceList::from_base("https://host/x", &files);
        let c = SourceList::from_base("https://host/y", &files);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
