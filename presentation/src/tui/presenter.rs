//! Verse presenter — pure mapping from selected records to renderable text
//!
//! Same rules as the console formatter: one shared original line, then one
//! section per record in model-sorted order, dividers between sections.

use qaha_domain::{Corpus, VerseRecord};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
};

fn divider() -> Line<'static> {
    Line::from(Span::styled(
        "─".repeat(40),
        Style::default().fg(Color::DarkGray),
    ))
}

/// Render the selected records into the verse pane body.
///
/// `records` must already be model-sorted (the corpus selector guarantees
/// this); the shared original is taken first-match-wins in that order.
pub fn render_verse(records: &[&VerseRecord]) -> Text<'static> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    // Shared original text, right-aligned for RTL script; omitted when no
    // record carries one.
    if let Some(original) = Corpus::shared_original(records) {
        lines.push(
            Line::from(Span::styled(
                original.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Right),
        );
        lines.push(divider());
    }

    for record in records {
        lines.push(Line::from(Span::styled(
            record.model.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));

        if let Some(translation) = record.translation_text() {
            lines.push(Line::from(Span::styled(
                "Translation",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
            for text_line in translation.lines() {
                lines.push(Line::from(vec![
                    Span::styled("▌ ", Style::default().fg(Color::DarkGray)),
                    Span::raw(text_line.to_string()),
                ]));
            }
        }

        if let Some(interpretation) = record.interpretation_text() {
            lines.push(Line::from(Span::styled(
                "Interpretation",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
            for text_line in interpretation.lines() {
                lines.push(Line::from(Span::raw(text_line.to_string())));
            }
        }

        lines.push(divider());
    }

    Text::from(lines)
}

/// Guidance shown when the model set is empty; the selector is never
/// consulted in this state.
pub fn render_no_selection() -> Text<'static> {
    Text::from(Line::from(Span::styled(
        "Please select at least one model from the sidebar.",
        Style::default().fg(Color::Yellow),
    )))
}

/// Shown when every surviving table normalized down to zero rows
pub fn render_empty_corpus() -> Text<'static> {
    Text::from(Line::from(Span::raw(
        "The loaded tables contained no usable verse rows.",
    )))
}

/// Shown when the selected models have no rows for this verse
pub fn render_no_matches(chapter: u32, verse: u32) -> Text<'static> {
    Text::from(Line::from(Span::raw(format!(
        "No records for Surah {}, Ayah {} among the selected models.",
        chapter, verse
    ))))
}
