//! Header widget — shows the current verse, model count, and load health

use crate::tui::state::ViewerState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    state: &'a ViewerState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a ViewerState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let verse_label = match (self.state.current_chapter(), self.state.current_verse()) {
            (Some(c), Some(v)) => format!("Surah {}, Ayah {}", c, v),
            _ => "No verses loaded".to_string(),
        };

        let checked = self.state.checked_models().len();
        let total = self.state.models.len();

        let mut spans = vec![
            Span::styled("◉ ", Style::default().fg(Color::Green)),
            Span::styled(
                verse_label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("{}/{} models", checked, total),
                Style::default().fg(Color::White),
            ),
        ];

        if !self.state.report.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("{} failed to load (w)", self.state.report.len()),
                Style::default().fg(Color::Yellow),
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" QAHA — Qur'anic Artificial Hermeneutics Archive ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
