//! Viewer widgets and screen layout

pub mod header;
pub mod report;
pub mod sidebar;
pub mod status_bar;
pub mod verse_pane;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Computed screen regions for one frame
pub struct MainLayout {
    pub header: Rect,
    pub chapters: Rect,
    pub verses: Rect,
    pub models: Rect,
    pub verse_pane: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    /// Header on top, status bar at the bottom, and a 30/70 split between
    /// the selector sidebar and the verse pane. The sidebar stacks the
    /// chapter, verse, and model lists; models get the larger share.
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(rows[1]);

        let sidebar = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Percentage(30),
                Constraint::Percentage(40),
            ])
            .split(columns[0]);

        Self {
            header: rows[0],
            chapters: sidebar[0],
            verses: sidebar[1],
            models: sidebar[2],
            verse_pane: columns[1],
            status_bar: rows[2],
        }
    }

    /// Centered overlay rectangle for the load report
    pub fn overlay(area: Rect) -> Rect {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(20),
                Constraint::Percentage(60),
                Constraint::Percentage(20),
            ])
            .split(area);
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(15),
                Constraint::Percentage(70),
                Constraint::Percentage(15),
            ])
            .split(vertical[1]);
        horizontal[1]
    }
}

/// Index window to show `height` items around the cursor
pub(crate) fn visible_window(len: usize, cursor: usize, height: usize) -> std::ops::Range<usize> {
    if len <= height {
        return 0..len;
    }
    let start = cursor.saturating_sub(height / 2).min(len - height);
    start..start + height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_covers_the_area() {
        let layout = MainLayout::compute(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.status_bar.height, 1);
        assert!(layout.verse_pane.width > layout.models.width);
    }

    #[test]
    fn test_visible_window_clamps() {
        assert_eq!(visible_window(3, 0, 10), 0..3);
        assert_eq!(visible_window(100, 0, 10), 0..10);
        assert_eq!(visible_window(100, 99, 10), 90..100);
        let mid = visible_window(100, 50, 10);
        assert!(mid.contains(&50));
        assert_eq!(mid.len(), 10);
    }
}
