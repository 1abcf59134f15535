//! Sidebar selector lists — chapter, dependent verse, model multi-select

use super::visible_window;
use crate::tui::state::{Pane, ViewerState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

fn cursor_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

pub struct ChapterListWidget<'a> {
    state: &'a ViewerState,
}

impl<'a> ChapterListWidget<'a> {
    pub fn new(state: &'a ViewerState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for ChapterListWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Pane::Chapters;
        let block = pane_block(" Chapter (Surah) ", focused);
        let inner_height = area.height.saturating_sub(2) as usize;

        let window = visible_window(
            self.state.chapters.len(),
            self.state.chapter_cursor,
            inner_height,
        );
        let lines: Vec<Line> = self.state.chapters[window.clone()]
            .iter()
            .zip(window.clone())
            .map(|(chapter, i)| {
                Line::styled(
                    format!("Surah {}", chapter),
                    cursor_style(i == self.state.chapter_cursor),
                )
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

pub struct VerseListWidget<'a> {
    state: &'a ViewerState,
}

impl<'a> VerseListWidget<'a> {
    pub fn new(state: &'a ViewerState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for VerseListWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Pane::Verses;
        let block = pane_block(" Verse (Ayah) ", focused);
        let inner_height = area.height.saturating_sub(2) as usize;

        let window = visible_window(
            self.state.verses.len(),
            self.state.verse_cursor,
            inner_height,
        );
        let lines: Vec<Line> = self.state.verses[window.clone()]
            .iter()
            .zip(window.clone())
            .map(|(verse, i)| {
                Line::styled(
                    format!("Ayah {}", verse),
                    cursor_style(i == self.state.verse_cursor),
                )
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

pub struct ModelListWidget<'a> {
    state: &'a ViewerState,
}

impl<'a> ModelListWidget<'a> {
    pub fn new(state: &'a ViewerState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for ModelListWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Pane::Models;
        let block = pane_block(" Models (space: toggle, a: all) ", focused);
        let inner_height = area.height.saturating_sub(2) as usize;

        let window = visible_window(
            self.state.models.len(),
            self.state.model_cursor,
            inner_height,
        );
        let lines: Vec<Line> = self.state.models[window.clone()]
            .iter()
            .zip(window.clone())
            .map(|(choice, i)| {
                let under_cursor = cursor_style(i == self.state.model_cursor);
                let mark = if choice.checked { "[x] " } else { "[ ] " };
                let name_style = if choice.checked {
                    Style::default().fg(Color::White)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                Line::from(vec![
                    Span::styled(mark, under_cursor),
                    Span::styled(choice.name.clone(), name_style.patch(under_cursor)),
                ])
            })
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
