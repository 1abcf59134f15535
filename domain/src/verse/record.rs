//! Verse record entity — one row of the merged corpus

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One verse as rendered by one model.
///
/// `chapter` and `verse` are 1-based indices (surah and ayah numbers).
/// Optional fields are genuinely absent when a source table has no value
/// for them; blank-after-trim values are treated as absent by the
/// `*_text()` accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    pub chapter: u32,
    pub verse: u32,
    /// Display name of the producing model
    pub model: String,
    /// Source-language (Arabic) text of the verse
    pub original_text: Option<String>,
    pub translation: Option<String>,
    pub interpretation: Option<String>,
    /// Columns present in a source table but not used by the view
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl VerseRecord {
    pub fn new(chapter: u32, verse: u32, model: impl Into<String>) -> Self {
        Self {
            chapter,
            verse,
            model: model.into(),
            original_text: None,
            translation: None,
            interpretation: None,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_original(mut self, text: impl Into<String>) -> Self {
        self.original_text = Some(text.into());
        self
    }

    pub fn with_translation(mut self, text: impl Into<String>) -> Self {
        self.translation = Some(text.into());
        self
    }

    pub fn with_interpretation(mut self, text: impl Into<String>) -> Self {
        self.interpretation = Some(text.into());
        self
    }

    /// Original text, trimmed; `None` when missing or blank
    pub fn original(&self) -> Option<&str> {
        non_blank(self.original_text.as_deref())
    }

    /// Translation, trimmed; `None` when missing or blank
    pub fn translation_text(&self) -> Option<&str> {
        non_blank(self.translation.as_deref())
    }

    /// Interpretation, trimmed; `None` when missing or blank
    pub fn interpretation_text(&self) -> Option<&str> {
        non_blank(self.interpretation.as_deref())
    }

    /// Whether this record carries neither translation nor interpretation
    pub fn is_heading_only(&self) -> bool {
        self.translation_text().is_none() && self.interpretation_text().is_none()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
