//! Interactive terminal viewer

pub mod app;
pub mod keys;
pub mod presenter;
pub mod state;
pub mod widgets;

pub use app::ViewerApp;
pub use state::{ModelChoice, Pane, ViewerState};
