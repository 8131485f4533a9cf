//! TUI rendering and terminal management (impure shell)

pub mod constants;
pub mod footer;
pub mod formatter;
pub mod styles;

pub use footer::{footer_lines, position_hint};
pub use formatter::{format_all, format_entry, BODY_INSET, TITLE};
pub use styles::{ColorConfig, Palette};

use crate::config::KeyBindings;
use crate::model::{KeyAction, LayoutBlock};
use crate::view_state::{
    Canvas, KeyOutcome, LayoutContent, ScrollViewport, ViewportDimensions,
};
use constants::{BODY_MARGIN, FOOTER_HEIGHT};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect},
    widgets::{Paragraph, Widget},
    Terminal,
};
use std::io::{self, IsTerminal};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// Stdout is not a terminal
    #[error("Interactive view needs a terminal on stdout")]
    Unavailable,

    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

// ===== Terminal session =====

/// Raw mode, alternate screen and mouse capture for as long as it lives.
///
/// The previous terminal mode is restored in `Drop`, so every exit path
/// (normal return, `?` propagation, panic unwinding) releases the terminal.
#[derive(Debug)]
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Take over the terminal.
    ///
    /// # Errors
    ///
    /// `TuiError::Unavailable` when stdout is not a TTY, `TuiError::Io` when a
    /// terminal mode cannot be set. Modes set before the failure are restored.
    pub fn acquire() -> Result<Self, TuiError> {
        if !io::stdout().is_terminal() {
            return Err(TuiError::Unavailable);
        }

        enable_raw_mode()?;
        // From here on, dropping the guard undoes whatever succeeded.
        let guard = Self { _private: () };

        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;

        info!("Terminal acquired");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        match restore_terminal() {
            Ok(()) => info!("Terminal released"),
            Err(e) => warn!(error = %e, "Failed to restore terminal"),
        }
    }
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

// ===== Rendering =====

impl Widget for &Canvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (y, line) in (area.y..area.bottom()).zip(self.rows()) {
            buf.set_line(area.x, y, line, area.width);
        }
    }
}

/// Split the screen into the body (inset by the side margin) and the footer.
fn screen_areas(area: Rect) -> (Rect, Rect) {
    let [body, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)]).areas(area);
    let body = body.inner(Margin {
        horizontal: BODY_MARGIN,
        vertical: 0,
    });
    (body, footer)
}

// ===== Application =====

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct App<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    viewport: ScrollViewport<LayoutContent>,
    palette: Palette,
    /// Body area of the last draw, for key and mouse routing.
    body: Rect,
}

impl<B> App<B>
where
    B: Backend,
{
    /// Create an app showing `root`.
    pub fn new(terminal: Terminal<B>, root: LayoutBlock, bindings: KeyBindings, palette: Palette) -> Self {
        let content = LayoutContent::new(root, palette.text_palette());
        Self {
            terminal,
            viewport: ScrollViewport::new(content, bindings),
            palette,
            body: Rect::default(),
        }
    }

    /// The scroll viewport over the content.
    pub fn viewport(&self) -> &ScrollViewport<LayoutContent> {
        &self.viewport
    }

    /// The terminal being drawn to.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Render the current frame
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let (body, footer) = screen_areas(Rect::new(0, 0, size.width, size.height));
        self.body = body;

        let canvas = self.viewport.render(ViewportDimensions::from(body));
        let footer_text = footer_lines(self.viewport.scroll_info(), &self.palette, footer.width);

        self.terminal.draw(|frame| {
            frame.render_widget(&canvas, body);
            frame.render_widget(Paragraph::new(footer_text), footer);
            if let Some((col, row)) = canvas.cursor() {
                let x = body.x.saturating_add(u16::try_from(col).unwrap_or(u16::MAX));
                let y = body.y.saturating_add(u16::try_from(row).unwrap_or(u16::MAX));
                frame.set_cursor_position(Position::new(x, y));
            }
        })?;

        Ok(())
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Ctrl+C always quits, even if rebound
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        match self.viewport.handle_key(ViewportDimensions::from(self.body), key) {
            KeyOutcome::Handled => {
                debug!(?key, command = ?self.viewport.pending_command(), "Key routed to viewport");
                false
            }
            KeyOutcome::Unhandled(key) => {
                let quit = self.viewport.bindings().get(key) == Some(KeyAction::Quit);
                debug!(?key, quit, "Key not handled by viewport");
                quit
            }
        }
    }

    /// Handle a single mouse event in screen coordinates
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let local = MouseEvent {
            column: mouse.column.saturating_sub(self.body.x),
            row: mouse.row.saturating_sub(self.body.y),
            ..mouse
        };
        let consumed = self
            .viewport
            .handle_mouse(ViewportDimensions::from(self.body), local);
        debug!(kind = ?mouse.kind, consumed, "Mouse event");
    }

    /// Dispatch one terminal event. Returns true if app should quit.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                false
            }
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                false
            }
            _ => false,
        }
    }

    /// Run the main event loop
    ///
    /// Draws, then blocks on `next_event` and redraws after every event.
    /// Returns when the user quits (q, Q or Ctrl+C).
    pub fn run<F>(&mut self, mut next_event: F) -> Result<(), TuiError>
    where
        F: FnMut() -> io::Result<Event>,
    {
        self.draw()?;
        loop {
            let event = next_event()?;
            if self.handle_event(event) {
                return Ok(());
            }
            self.draw()?;
        }
    }
}

/// Show `root` in the interactive pager until the user quits.
///
/// The terminal is restored on every exit path.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_interactive(
    root: LayoutBlock,
    bindings: KeyBindings,
    palette: Palette,
) -> Result<(), TuiError> {
    let _guard = TerminalGuard::acquire()?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut app = App::new(terminal, root, bindings, palette);
    app.run(event::read)
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
