//! Verse pane — the scrollable side-by-side comparison view

use crate::tui::presenter;
use crate::tui::state::ViewerState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct VersePaneWidget<'a> {
    state: &'a ViewerState,
}

impl<'a> VersePaneWidget<'a> {
    pub fn new(state: &'a ViewerState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for VersePaneWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Verse ");

        // Empty model set short-circuits before any filtering
        let text = match self.state.selection() {
            None => presenter::render_empty_corpus(),
            Some(selection) if !selection.has_models() => presenter::render_no_selection(),
            Some(selection) => {
                let records = self.state.corpus().select(&selection);
                if records.is_empty() {
                    presenter::render_no_matches(selection.chapter, selection.verse)
                } else {
                    presenter::render_verse(&records)
                }
            }
        };

        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.state.scroll, 0))
            .render(area, buf);
    }
}
