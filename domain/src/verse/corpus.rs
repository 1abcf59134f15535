//! Merged corpus of verse records across all models

use super::parser::{TableRow, coerce_index};
use super::record::VerseRecord;
use super::selection::Selection;
use std::collections::BTreeSet;

/// The merged, normalized table of all verse records.
///
/// Built once per load by the loader, in source-list order, then only read.
/// `(chapter, verse, model)` uniqueness is not enforced; readers take the
/// first match where it matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    records: Vec<VerseRecord>,
}

impl Corpus {
    pub fn records(&self) -> &[VerseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct chapter numbers, ascending
    pub fn chapters(&self) -> Vec<u32> {
        self.records
            .iter()
            .map(|r| r.chapter)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct verse numbers within a chapter, ascending.
    ///
    /// This is a dependent choice set: callers must recompute it whenever
    /// the chapter selection changes.
    pub fn verses_in(&self, chapter: u32) -> Vec<u32> {
        self.records
            .iter()
            .filter(|r| r.chapter == chapter)
            .map(|r| r.verse)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct model display names, ascending
    pub fn model_names(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|r| r.model.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Records matching the selection, sorted by model name ascending.
    ///
    /// Callers are expected to short-circuit on an empty model set before
    /// filtering and show guidance instead of an empty result.
    pub fn select(&self, selection: &Selection) -> Vec<&VerseRecord> {
        let mut matches: Vec<&VerseRecord> = self
            .records
            .iter()
            .filter(|r| {
                r.chapter == selection.chapter
                    && r.verse == selection.verse
                    && selection.models.contains(&r.model)
            })
            .collect();
        matches.sort_by(|a, b| a.model.cmp(&b.model));
        matches
    }

    /// First non-missing original text among the given records, trimmed.
    ///
    /// The original is expected to be identical across models for the same
    /// chapter and verse, so first match wins.
    pub fn shared_original<'a>(records: &[&'a VerseRecord]) -> Option<&'a str> {
        records.iter().find_map(|r| r.original())
    }
}

/// Incremental corpus builder, owned by the loader.
///
/// Tables are appended in loader-list order; rows failing chapter/verse
/// coercion are dropped here, permanently.
#[derive(Debug, Default)]
pub struct CorpusBuilder {
    records: Vec<VerseRecord>,
}

impl CorpusBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one parsed source table, tagging every row with the model's
    /// display name. Returns the number of rows dropped by coercion.
    pub fn append_table(&mut self, model: &str, rows: Vec<TableRow>) -> usize {
        let mut dropped = 0;
        for mut row in rows {
            let chapter = row.get("chapter").and_then(|v| coerce_index(v));
            let verse = row.get("verse").and_then(|v| coerce_index(v));
            let (Some(chapter), Some(verse)) = (chapter, verse) else {
                dropped += 1;
                continue;
            };
            row.remove("chapter");
            row.remove("verse");

            let mut record = VerseRecord::new(chapter, verse, model);
            record.original_text = row.remove("orig").or_else(|| row.remove("original text"));
            record.translation = row.remove("translation");
            record.interpretation = row.remove("interpretation");
            record.extra = row;
            self.records.push(record);
        }
        dropped
    }

    pub fn build(self) -> Corpus {
        Corpus {
            records: self.records,
        }
    }
}
