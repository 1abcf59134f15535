//! Load report overlay — non-blocking warning list for failed sources

use super::MainLayout;
use crate::tui::state::ViewerState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

pub struct ReportOverlayWidget<'a> {
    state: &'a ViewerState,
}

impl<'a> ReportOverlayWidget<'a> {
    pub fn new(state: &'a ViewerState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for ReportOverlayWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let overlay = MainLayout::overlay(area);
        Clear.render(overlay, buf);

        let title = format!(" {} model(s) failed to load ", self.state.report.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));

        let mut lines: Vec<Line> = self
            .state
            .report
            .iter()
            .map(|failure| {
                Line::from(vec![
                    Span::styled(
                        format!("{}: ", failure.model),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(failure.message.clone()),
                ])
            })
            .collect();
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "These models stay unavailable until you reload (r).",
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(overlay, buf);
    }
}
