//! TUI viewer state
//!
//! Single source of truth for everything the viewer renders. The corpus is
//! read-only here; the state only tracks cursors, checkboxes, and scroll.

use qaha_domain::{Corpus, LoadReport, Selection};
use std::sync::Arc;
use std::time::Instant;

/// Which pane has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Chapters,
    Verses,
    Models,
}

impl Pane {
    pub fn next(self) -> Self {
        match self {
            Pane::Chapters => Pane::Verses,
            Pane::Verses => Pane::Models,
            Pane::Models => Pane::Chapters,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Pane::Chapters => Pane::Models,
            Pane::Verses => Pane::Chapters,
            Pane::Models => Pane::Verses,
        }
    }
}

/// One entry in the model multi-select
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelChoice {
    pub name: String,
    pub checked: bool,
}

/// Central viewer state — owned by the event loop
pub struct ViewerState {
    corpus: Arc<Corpus>,
    pub report: LoadReport,

    // -- Choice sets and cursors --
    pub chapters: Vec<u32>,
    pub chapter_cursor: usize,
    /// Dependent on the chapter cursor; rebuilt on every chapter change
    pub verses: Vec<u32>,
    pub verse_cursor: usize,
    pub models: Vec<ModelChoice>,
    pub model_cursor: usize,

    // -- View --
    pub focus: Pane,
    pub scroll: u16,
    pub show_report: bool,
    pub flash_message: Option<(String, Instant)>,

    // -- Lifecycle --
    pub should_quit: bool,
}

impl ViewerState {
    pub fn new(corpus: Arc<Corpus>, report: LoadReport, select_all: bool) -> Self {
        let chapters = corpus.chapters();
        let verses = chapters
            .first()
            .map(|c| corpus.verses_in(*c))
            .unwrap_or_default();
        let models = corpus
            .model_names()
            .into_iter()
            .map(|name| ModelChoice {
                name,
                checked: select_all,
            })
            .collect();

        Self {
            corpus,
            report,
            chapters,
            chapter_cursor: 0,
            verses,
            verse_cursor: 0,
            models,
            model_cursor: 0,
            focus: Pane::default(),
            scroll: 0,
            show_report: false,
            flash_message: None,
            should_quit: false,
        }
    }

    pub fn corpus(&self) -> &Arc<Corpus> {
        &self.corpus
    }

    pub fn current_chapter(&self) -> Option<u32> {
        self.chapters.get(self.chapter_cursor).copied()
    }

    pub fn current_verse(&self) -> Option<u32> {
        self.verses.get(self.verse_cursor).copied()
    }

    pub fn checked_models(&self) -> Vec<String> {
        self.models
            .iter()
            .filter(|m| m.checked)
            .map(|m| m.name.clone())
            .collect()
    }

    /// Current selection, or `None` when the corpus has no chapters
    pub fn selection(&self) -> Option<Selection> {
        let chapter = self.current_chapter()?;
        let verse = self.current_verse()?;
        Some(Selection::new(chapter, verse).with_models(self.checked_models()))
    }

    // -- Cursor movement --

    pub fn move_up(&mut self) {
        match self.focus {
            Pane::Chapters => {
                if self.chapter_cursor > 0 {
                    self.chapter_cursor -= 1;
                    self.on_chapter_changed();
                }
            }
            Pane::Verses => {
                if self.verse_cursor > 0 {
                    self.verse_cursor -= 1;
                    self.scroll = 0;
                }
            }
            Pane::Models => {
                self.model_cursor = self.model_cursor.saturating_sub(1);
            }
        }
    }

    pub fn move_down(&mut self) {
        match self.focus {
            Pane::Chapters => {
                if self.chapter_cursor + 1 < self.chapters.len() {
                    self.chapter_cursor += 1;
                    self.on_chapter_changed();
                }
            }
            Pane::Verses => {
                if self.verse_cursor + 1 < self.verses.len() {
                    self.verse_cursor += 1;
                    self.scroll = 0;
                }
            }
            Pane::Models => {
                if self.model_cursor + 1 < self.models.len() {
                    self.model_cursor += 1;
                }
            }
        }
    }

    /// Rebuild the dependent verse choice set and reset downstream cursors
    fn on_chapter_changed(&mut self) {
        self.verses = self
            .current_chapter()
            .map(|c| self.corpus.verses_in(c))
            .unwrap_or_default();
        self.verse_cursor = 0;
        self.scroll = 0;
    }

    // -- Model multi-select --

    /// Toggle the checkbox under the cursor
    pub fn toggle_model(&mut self) {
        if let Some(choice) = self.models.get_mut(self.model_cursor) {
            choice.checked = !choice.checked;
            self.scroll = 0;
        }
    }

    /// Select-all toggle: check everything unless everything is already
    /// checked, in which case uncheck everything.
    pub fn toggle_select_all(&mut self) {
        let all_checked = !self.models.is_empty() && self.models.iter().all(|m| m.checked);
        for choice in &mut self.models {
            choice.checked = !all_checked;
        }
        self.scroll = 0;
    }

    // -- Reload --

    /// Swap in a freshly loaded corpus, keeping cursor positions and
    /// checkbox choices where they still exist.
    pub fn replace_data(&mut self, corpus: Arc<Corpus>, report: LoadReport) {
        let chapter = self.current_chapter();
        let verse = self.current_verse();
        let checked: Vec<String> = self.checked_models();

        self.corpus = corpus;
        self.report = report;

        self.chapters = self.corpus.chapters();
        self.chapter_cursor = chapter
            .and_then(|c| self.chapters.iter().position(|x| *x == c))
            .unwrap_or(0);
        self.verses = self
            .current_chapter()
            .map(|c| self.corpus.verses_in(c))
            .unwrap_or_default();
        self.verse_cursor = verse
            .and_then(|v| self.verses.iter().position(|x| *x == v))
            .unwrap_or(0);

        self.models = self
            .corpus
            .model_names()
            .into_iter()
            .map(|name| {
                let checked = checked.contains(&name);
                ModelChoice { name, checked }
            })
            .collect();
        self.model_cursor = self.model_cursor.min(self.models.len().saturating_sub(1));
        self.scroll = 0;
    }

    // -- Flash messages --

    pub fn flash(&mut self, message: impl Into<String>) {
        self.flash_message = Some((message.into(), Instant::now()));
    }

    /// Expire flash messages older than three seconds (called on tick)
    pub fn tick(&mut self) {
        if let Some((_, at)) = &self.flash_message {
            if at.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qaha_domain::{CorpusBuilder, parse_table};

    fn state() -> ViewerState {
        let mut builder = CorpusBuilder::new();
        builder.append_table(
            "Claude Opus",
            parse_table(",chapter,verse,orig\n0,1,1,a\n1,1,2,b\n2,2,1,c\n3,2,3,d\n").unwrap(),
        );
        builder.append_table(
            "GPT-4o",
            parse_table(",chapter,verse,orig\n0,1,1,a\n").unwrap(),
        );
        ViewerState::new(
            Arc::new(builder.build()),
            LoadReport::default(),
            true,
        )
    }

    #[test]
    fn test_initial_choice_sets() {
        let state = state();
        assert_eq!(state.chapters, vec![1, 2]);
        assert_eq!(state.verses, vec![1, 2]);
        assert_eq!(state.checked_models().len(), 2);
    }

    #[test]
    fn test_chapter_change_recomputes_verses_and_resets_cursor() {
        let mut state = state();
        state.focus = Pane::Verses;
        state.move_down();
        assert_eq!(state.current_verse(), Some(2));

        state.focus = Pane::Chapters;
        state.move_down();
        assert_eq!(state.current_chapter(), Some(2));
        assert_eq!(state.verses, vec![1, 3]);
        assert_eq!(state.verse_cursor, 0);
    }

    #[test]
    fn test_select_all_toggle() {
        let mut state = state();
        // Everything is checked: toggling unchecks all
        state.toggle_select_all();
        assert!(state.checked_models().is_empty());
        assert!(state.selection().is_some_and(|s| !s.has_models()));
        // And back
        state.toggle_select_all();
        assert_eq!(state.checked_models().len(), 2);
    }

    #[test]
    fn test_partial_check_then_select_all_checks_everything() {
        let mut state = state();
        state.focus = Pane::Models;
        state.toggle_model();
        assert_eq!(state.checked_models().len(), 1);
        state.toggle_select_all();
        assert_eq!(state.checked_models().len(), 2);
    }

    #[test]
    fn test_replace_data_preserves_position_where_possible() {
        let mut state = state();
        state.focus = Pane::Chapters;
        state.move_down();

        let mut builder = CorpusBuilder::new();
        builder.append_table(
            "Claude Opus",
            parse_table(",chapter,verse,orig\n0,2,1,c\n").unwrap(),
        );
        state.replace_data(Arc::new(builder.build()), LoadReport::default());

        assert_eq!(state.current_chapter(), Some(2));
        assert_eq!(state.checked_models(), vec!["Claude Opus".to_string()]);
    }

    #[test]
    fn test_cursor_clamps_at_edges() {
        let mut state = state();
        state.move_up();
        assert_eq!(state.chapter_cursor, 0);
        state.move_down();
        state.move_down();
        state.move_down();
        assert_eq!(state.current_chapter(), Some(2));
    }
}
