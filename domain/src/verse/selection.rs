//! User selection value object

use std::collections::BTreeSet;

/// A chapter/verse choice plus the set of models to display.
///
/// The model set holds display names, matching `VerseRecord::model`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub chapter: u32,
    pub verse: u32,
    pub models: BTreeSet<String>,
}

impl Selection {
    pub fn new(chapter: u32, verse: u32) -> Self {
        Self {
            chapter,
            verse,
            models: BTreeSet::new(),
        }
    }

    pub fn with_models<I, S>(mut self, models: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.models = models.into_iter().map(Into::into).collect();
        self
    }

    /// An empty model set is a guidance state, not a query
    pub fn has_models(&self) -> bool {
        !self.models.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_has_no_models() {
        let selection = Selection::new(1, 1);
        assert!(!selection.has_models());
    }

    #[test]
    fn test_with_models_deduplicates() {
        let selection = Selection::new(1, 1).with_models(["GPT-3", "GPT-3", "Mixtral"]);
        assert_eq!(selection.models.len(), 2);
        assert!(selection.has_models());
    }
}
