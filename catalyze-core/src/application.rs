//! Terminal application loop.
//!
//! Owns the terminal lifecycle (raw mode, alternate screen) and multiplexes
//! redraw requests against polled crossterm input. Everything runs on the UI
//! task; the only asynchrony is cosmetic (scheduled transitions requesting a
//! redraw through [`AppContext::refresh`]).

use std::future::Future;
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::prelude::*;
use snafu::ResultExt;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::component::{Action, Event};
use crate::element::Element;
use crate::error::{RuntimeSnafu, TerminalSnafu};
use crate::render;
use crate::task::TaskHandle;

/// Application context handed to the shell and to scheduled tasks.
#[derive(Clone)]
pub struct AppContext {
    redraw_tx: mpsc::UnboundedSender<()>,
}

impl AppContext {
    /// A context with no attached loop: refresh requests go nowhere. Useful
    /// for tests and headless setups.
    pub fn detached() -> Self {
        let (redraw_tx, _) = mpsc::unbounded_channel();
        Self { redraw_tx }
    }

    /// Request a redraw on the next loop iteration.
    pub fn refresh(&self) {
        let _ = self.redraw_tx.send(());
    }

    /// Spawn an abortable background task.
    pub fn spawn<F>(&self, fut: F) -> TaskHandle
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(fut);
        TaskHandle::new(handle.abort_handle())
    }
}

/// The application shell: owns the document tree and dispatches input.
pub trait Shell: Send + 'static {
    /// The element tree drawn every frame.
    fn document(&self) -> &Element;

    /// Handle an input event, returning an optional action. Navigation
    /// actions are the shell's own business; the loop only acts on `Quit`.
    fn handle_event(&mut self, event: &Event) -> Option<Action>;

    /// Called once before the terminal is torn down.
    fn on_shutdown(&mut self) {}
}

/// Main application handle.
pub struct Application;

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

impl Application {
    pub fn new() -> Self {
        Self
    }

    /// Build the runtime, run `setup` to construct the shell, then drive the
    /// event loop until the shell returns [`Action::Quit`].
    pub fn run<S, F>(self, setup: F) -> crate::Result<()>
    where
        S: Shell,
        F: FnOnce(&AppContext) -> crate::Result<S>,
    {
        let rt = Runtime::new().context(RuntimeSnafu)?;
        let (redraw_tx, redraw_rx) = mpsc::unbounded_channel();
        let cx = AppContext { redraw_tx };

        let guard = rt.enter();
        let shell = setup(&cx)?;
        drop(guard);

        rt.block_on(self.run_loop(cx, shell, redraw_rx))
    }

    async fn run_loop<S: Shell>(
        &self,
        cx: AppContext,
        mut shell: S,
        redraw_rx: mpsc::UnboundedReceiver<()>,
    ) -> crate::Result<()> {
        enable_raw_mode().context(TerminalSnafu)?;
        let mut out = stdout();
        execute!(out, EnterAlternateScreen, EnableMouseCapture).context(TerminalSnafu)?;
        let backend = CrosstermBackend::new(out);
        let mut terminal = Terminal::new(backend).context(TerminalSnafu)?;

        let result = self.event_loop(&cx, &mut shell, &mut terminal, redraw_rx).await;

        disable_raw_mode().context(TerminalSnafu)?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)
            .context(TerminalSnafu)?;
        terminal.show_cursor().context(TerminalSnafu)?;
        result
    }

    async fn event_loop<S: Shell>(
        &self,
        cx: &AppContext,
        shell: &mut S,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        mut redraw_rx: mpsc::UnboundedReceiver<()>,
    ) -> crate::Result<()> {
        // Initial frame.
        cx.refresh();

        loop {
            tokio::select! {
                _ = redraw_rx.recv() => {
                    terminal
                        .draw(|frame| render::render_document(frame, shell.document()))
                        .context(TerminalSnafu)?;
                }
                ready = async { event::poll(Duration::from_millis(100)) } => {
                    if let Ok(true) = ready {
                        let raw = event::read().context(TerminalSnafu)?;
                        let event = match raw {
                            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                                Some(Event::Key(key))
                            }
                            CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
                            CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
                            CrosstermEvent::FocusGained => Some(Event::FocusGained),
                            CrosstermEvent::FocusLost => Some(Event::FocusLost),
                            CrosstermEvent::Paste(s) => Some(Event::Paste(s)),
                            _ => None,
                        };

                        if let Some(event) = event {
                            let action = shell.handle_event(&event);
                            cx.refresh();

                            if let Some(Action::Quit) = action {
                                tracing::info!("shutting down");
                                shell.on_shutdown();
                                return Ok(());
                            }
                        }
                    }
                }
            }
        }
    }
}
