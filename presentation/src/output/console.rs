//! Console output formatter for one-shot verse display
//!
//! The Presenter as a pure function: (records, selection) in, text out.
//! The same rules drive the TUI verse pane.

use colored::Colorize;
use qaha_domain::{Corpus, LoadReport, VerseRecord};

/// Visible divider between sections
const DIVIDER: &str = "────────────────────────────────────────";

/// Formats a selected verse for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the full verse view: shared original, then one section per
    /// record in the given (already model-sorted) order.
    pub fn format(chapter: u32, verse: u32, records: &[&VerseRecord]) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            format!("Surah {}, Ayah {}", chapter, verse).cyan().bold()
        ));

        // Shared original text, identical across models, shown once.
        // Omitted entirely when no record carries one.
        if let Some(original) = Corpus::shared_original(records) {
            output.push_str(&format!("{}\n{}\n", original.bold(), DIVIDER));
        }

        for record in records {
            output.push_str(&Self::format_section(record));
        }

        output
    }

    /// One per-model section: heading, then whichever of translation and
    /// interpretation is present. Both blank = heading only, no placeholder.
    fn format_section(record: &VerseRecord) -> String {
        let mut section = String::new();

        section.push_str(&format!(
            "\n{}\n",
            format!("── {} ──", record.model).yellow().bold()
        ));

        if let Some(translation) = record.translation_text() {
            section.push_str(&format!("{}\n", "Translation".cyan().bold()));
            for line in translation.lines() {
                section.push_str(&format!("> {}\n", line));
            }
        }

        if let Some(interpretation) = record.interpretation_text() {
            section.push_str(&format!("{}\n", "Interpretation".cyan().bold()));
            section.push_str(&format!("{}\n", interpretation));
        }

        section.push_str(&format!("{}\n", DIVIDER));
        section
    }

    /// Format the non-fatal load warnings
    pub fn format_report(report: &LoadReport) -> String {
        let mut output = format!(
            "{}\n",
            format!("{} model(s) failed to load", report.len())
                .yellow()
                .bold()
        );
        for failure in report.iter() {
            output.push_str(&format!("  * {}\n", failure));
        }
        output
    }

    /// Guidance shown instead of results when no model is selected
    pub fn format_no_selection() -> String {
        "Please select at least one model.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qaha_domain::LoadFailure;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_shared_original_rendered_once_above_sections() {
        plain();
        let a = VerseRecord::new(1, 1, "Claude Opus")
            .with_original("x")
            .with_translation("alpha");
        let b = VerseRecord::new(1, 1, "GPT-4o")
            .with_original("x")
            .with_interpretation("beta");
        let output = ConsoleFormatter::format(1, 1, &[&a, &b]);

        assert_eq!(output.matches('x').count(), 1);
        let original_pos = output.find('x').unwrap();
        assert!(original_pos < output.find("Claude Opus").unwrap());
        assert!(output.find("Claude Opus").unwrap() < output.find("GPT-4o").unwrap());
        assert!(output.contains("> alpha"));
        assert!(output.contains("Interpretation\nbeta"));
        // One divider after the header, one after each section
        assert_eq!(output.matches(DIVIDER).count(), 3);
    }

    #[test]
    fn test_missing_original_omits_header_block() {
        plain();
        let record = VerseRecord::new(1, 1, "Llama 2").with_translation("alpha");
        let output = ConsoleFormatter::format(1, 1, &[&record]);
        assert_eq!(output.matches(DIVIDER).count(), 1);
    }

    #[test]
    fn test_blank_fields_render_heading_only() {
        plain();
        let record = VerseRecord::new(1, 1, "Mixtral").with_translation("   ");
        let output = ConsoleFormatter::format(1, 1, &[&record]);
        assert!(output.contains("── Mixtral ──"));
        assert!(!output.contains("Translation"));
        assert!(!output.contains("Interpretation"));
    }

    #[test]
    fn test_report_lists_each_failure() {
        plain();
        let report = LoadReport {
            failures: vec![
                LoadFailure::new("Grok 2", "Request timed out"),
                LoadFailure::new("GPT-3", "HTTP error: 404 Not Found"),
            ],
        };
        let output = ConsoleFormatter::format_report(&report);
        assert!(output.contains("2 model(s) failed to load"));
        assert!(output.contains("* Grok 2: Request timed out"));
        assert!(output.contains("* GPT-3: HTTP error: 404 Not Found"));
    }
}
