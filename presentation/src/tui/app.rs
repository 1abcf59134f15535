//! TUI viewer — main event loop
//!
//! Single-threaded request/response: every key event mutates the state and
//! the next draw re-renders from (corpus, selections). The only async work
//! is the user-initiated reload, which runs inline through the cache.

use super::keys::{KeyAction, map_key};
use super::state::{Pane, ViewerState};
use super::widgets::{
    MainLayout, header::HeaderWidget, report::ReportOverlayWidget,
    sidebar::{ChapterListWidget, ModelListWidget, VerseListWidget},
    status_bar::StatusBarWidget, verse_pane::VersePaneWidget,
};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use qaha_application::{CorpusCache, LoadCorpusUseCase, LoadOutcome, ResourceFetcher};
use qaha_domain::SourceList;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Scroll step for PageUp/PageDown in the verse pane
const SCROLL_STEP: u16 = 5;

/// Interactive archive viewer
pub struct ViewerApp<F: ResourceFetcher + 'static> {
    state: ViewerState,
    use_case: LoadCorpusUseCase<F>,
    cache: Arc<CorpusCache>,
    sources: SourceList,
}

impl<F: ResourceFetcher + 'static> ViewerApp<F> {
    pub fn new(
        outcome: LoadOutcome,
        use_case: LoadCorpusUseCase<F>,
        cache: Arc<CorpusCache>,
        sources: SourceList,
        select_all: bool,
    ) -> Self {
        let state = ViewerState::new(outcome.corpus, outcome.report, select_all);
        Self {
            state,
            use_case,
            cache,
            sources,
        }
    }

    /// Run the viewer until quit
    pub async fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let mut events = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        loop {
            terminal.draw(|frame| self.draw(frame))?;

            tokio::select! {
                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            if let Some(action) = map_key(key) {
                                self.apply(action, terminal).await?;
                            }
                        }
                        Some(Ok(_)) => {} // resize redraws on the next pass
                        Some(Err(e)) => return Err(e),
                        None => break,
                    }
                }
                _ = tick.tick() => {
                    self.state.tick();
                }
            }

            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    async fn apply(
        &mut self,
        action: KeyAction,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        match action {
            KeyAction::Quit => self.state.should_quit = true,
            KeyAction::FocusNext => self.state.focus = self.state.focus.next(),
            KeyAction::FocusPrev => self.state.focus = self.state.focus.prev(),
            KeyAction::Up => self.state.move_up(),
            KeyAction::Down => self.state.move_down(),
            KeyAction::Toggle => {
                if self.state.focus == Pane::Models {
                    self.state.toggle_model();
                }
            }
            KeyAction::SelectAll => self.state.toggle_select_all(),
            KeyAction::ScrollUp => {
                self.state.scroll = self.state.scroll.saturating_sub(SCROLL_STEP);
            }
            KeyAction::ScrollDown => {
                self.state.scroll = self.state.scroll.saturating_add(SCROLL_STEP);
            }
            KeyAction::ToggleReport => {
                if !self.state.report.is_empty() {
                    self.state.show_report = !self.state.show_report;
                }
            }
            KeyAction::Reload => self.reload(terminal).await?,
        }
        Ok(())
    }

    /// Invalidate the cached load and fetch fresh tables.
    ///
    /// The fetch blocks the loop; the viewer keeps the old corpus when the
    /// reload fails outright.
    async fn reload(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        self.state.flash("Reloading source tables...");
        terminal.draw(|frame| self.draw(frame))?;

        self.cache.invalidate().await;
        match self.cache.get_or_load(&self.use_case, &self.sources).await {
            Ok(outcome) => {
                let failures = outcome.report.len();
                self.state.replace_data(outcome.corpus, outcome.report);
                if failures > 0 {
                    self.state
                        .flash(format!("Reloaded, {} model(s) failed (w)", failures));
                } else {
                    self.state.flash("Reloaded");
                }
            }
            Err(e) => {
                warn!("reload failed: {}", e);
                self.state.flash(format!("Reload failed: {}", e));
            }
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let layout = MainLayout::compute(frame.area());

        frame.render_widget(HeaderWidget::new(&self.state), layout.header);
        frame.render_widget(ChapterListWidget::new(&self.state), layout.chapters);
        frame.render_widget(VerseListWidget::new(&self.state), layout.verses);
        frame.render_widget(ModelListWidget::new(&self.state), layout.models);
        frame.render_widget(VersePaneWidget::new(&self.state), layout.verse_pane);
        frame.render_widget(StatusBarWidget::new(&self.state), layout.status_bar);

        if self.state.show_report {
            frame.render_widget(ReportOverlayWidget::new(&self.state), frame.area());
        }
    }
}
