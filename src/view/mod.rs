//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
mod layout;
mod pagination_bar;
mod search_input;
mod styles;
mod table;
pub mod tabs;

pub use help::render_help_overlay;
pub use layout::render_layout;
pub use search_input::SearchInput;
pub use styles::{ColorConfig, TableStyles};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::FetchError;
use crate::source::{FetchWorker, HttpFetcher};
use crate::state::{AppState, ApplyResult, FetchOutcome, FetchTicket};
use constants::TICK_INTERVAL_MS;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// The fetch collaborator could not be built
    #[error("Fetcher error: {0}")]
    Fetch(#[from] FetchError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    worker: FetchWorker,
    key_bindings: KeyBindings,
    styles: TableStyles,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        app_state: AppState,
        worker: FetchWorker,
        styles: TableStyles,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(
            terminal,
            app_state,
            worker,
            KeyBindings::default(),
            styles,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q or Ctrl+C). Fetch outcomes are drained
    /// after every event and on every tick; the screen is redrawn only when
    /// input arrived or an outcome changed a table.
    pub fn run(&mut self) -> Result<(), TuiError> {
        const TICK_INTERVAL: Duration = Duration::from_millis(TICK_INTERVAL_MS);

        self.start();
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(_, _) => self.draw()?,
                    _ => {}
                }
            }

            if self.drain_outcomes() {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Assemble an app around an already-initialized terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        worker: FetchWorker,
        key_bindings: KeyBindings,
        styles: TableStyles,
    ) -> Self {
        Self {
            terminal,
            app_state,
            worker,
            key_bindings,
            styles,
        }
    }

    /// Issue the initial fetch for the table on screen.
    fn start(&mut self) {
        let ticket = self.app_state.start();
        self.submit(ticket);
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C quits from anywhere, prompts included
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.input_mode.is_editing() {
            if let Some(ticket) = self.handle_prompt_key(key) {
                self.submit(ticket);
            }
            return false;
        }

        if self.app_state.help_visible && key.code == KeyCode::Esc {
            self.app_state.help_visible = false;
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        // The help overlay is modal: only toggling it and quitting get through
        if self.app_state.help_visible
            && !matches!(action, crate::model::KeyAction::Help | crate::model::KeyAction::Quit)
        {
            return false;
        }

        if let Some(ticket) = self.app_state.handle_action(action) {
            self.submit(ticket);
        }

        self.app_state.quit_requested()
    }

    /// Keys while a search or filter prompt is open.
    fn handle_prompt_key(&mut self, key: KeyEvent) -> Option<FetchTicket> {
        match key.code {
            KeyCode::Enter => return self.app_state.submit_input(),
            KeyCode::Esc => self.app_state.cancel_input(),
            KeyCode::Backspace => self.app_state.input_backspace(),
            KeyCode::Left => self.app_state.input_cursor_left(),
            KeyCode::Right => self.app_state.input_cursor_right(),
            KeyCode::Tab => self.app_state.next_filter_field(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.app_state.input_char(ch);
            }
            _ => {}
        }
        None
    }

    /// Hand `ticket` to the worker.
    ///
    /// A worker that cannot start the fetch fails the ticket immediately, so
    /// the table leaves its loading state and shows the error.
    fn submit(&mut self, ticket: FetchTicket) {
        let resource = ticket.resource;
        let seq = ticket.seq;

        if let Err(error) = self.worker.submit(ticket) {
            warn!(%resource, seq, %error, "Fetch could not be started");
            self.app_state.apply_outcome(FetchOutcome {
                resource,
                seq,
                result: Err(error),
            });
        }
    }

    /// Apply every outcome that has arrived.
    ///
    /// Returns true if any of them changed a table.
    fn drain_outcomes(&mut self) -> bool {
        let mut changed = false;
        for outcome in self.worker.drain() {
            if self.app_state.apply_outcome(outcome) != ApplyResult::Stale {
                changed = true;
            }
        }
        changed
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let app_state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, app_state, styles);
        })?;
        Ok(())
    }
}

/// Initialize and run the TUI application for a resolved configuration
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(config: &ResolvedConfig, no_color: bool) -> Result<(), TuiError> {
    // Built before raw mode so a bad base URL is reported on a normal terminal
    let fetcher = HttpFetcher::new(
        &config.base_url,
        Duration::from_secs(config.timeout_secs),
    )?;
    info!(base_url = %fetcher.base_url(), "HTTP fetcher ready");
    let worker = FetchWorker::new(Arc::new(fetcher))?;

    let mut app_state = AppState::new(config.resource, config.page_size, &config.product_tabs);
    if let Some(term) = &config.initial_search {
        app_state.active_table_mut().set_search_term(term.as_str());
    }

    let styles = TableStyles::with_color_config(ColorConfig::from_env_and_args(no_color));

    info!(
        resource = %config.resource,
        page_size = %config.page_size,
        "Starting TUI"
    );

    let mut app = TuiApp::new(app_state, worker, styles)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    restore_terminal()?;
    debug!("Terminal restored");

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
