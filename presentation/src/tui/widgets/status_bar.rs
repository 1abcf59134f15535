//! Status bar widget — key hints and flash messages

use crate::tui::state::ViewerState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

const KEY_HINTS: &str =
    "Tab:pane  j/k:move  space:toggle  a:all  PgUp/PgDn:scroll  r:reload  w:warnings  q:quit";

pub struct StatusBarWidget<'a> {
    state: &'a ViewerState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a ViewerState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let text = if let Some((ref flash, _)) = self.state.flash_message {
            flash.clone()
        } else {
            KEY_HINTS.to_string()
        };

        let line = Line::from(Span::styled(format!(" {}", text), bg_style));
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
