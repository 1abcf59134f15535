//! Presentation layer for qaha
//!
//! The clap CLI surface, the pure console formatter, and the ratatui
//! viewer. Rendering is a function of (corpus, selections); the event loop
//! only routes keys into state changes.

pub mod cli;
pub mod output;
pub mod tui;

pub use cli::Cli;
pub use output::ConsoleFormatter;
pub use tui::ViewerApp;
