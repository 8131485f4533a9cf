//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! App<TestBackend> with convenient methods for simulating user interactions.

use crate::config::KeyBindings;
use crate::model::{resolve, LayoutBlock, LookupError};
use crate::source::TableSource;
use crate::view::{format_all, format_entry, App, ColorConfig, Palette};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed to keep snapshots clean.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps App<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests. Colors are off so snapshots stay stable.
pub struct AcceptanceTestHarness {
    app: App<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Show an arbitrary layout tree.
    pub fn from_block(root: LayoutBlock, width: u16, height: u16) -> Self {
        Self::from_block_with_bindings(root, width, height, KeyBindings::default())
    }

    /// Show a layout tree with custom key bindings.
    pub fn from_block_with_bindings(
        root: LayoutBlock,
        width: u16,
        height: u16,
        bindings: KeyBindings,
    ) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("TestBackend terminal creation cannot fail");
        let palette = Palette::with_color_config(ColorConfig::from_env_and_args(true));
        Self {
            app: App::new(terminal, root, bindings, palette),
            running: true,
        }
    }

    /// Look `token` up in the embedded table and show it, as `statcode <token>` would.
    pub fn from_token(token: &str, width: u16, height: u16) -> Result<Self, LookupError> {
        let table = TableSource::Embedded
            .load()
            .expect("embedded table must load");
        let entry = resolve(&table, token)?;
        Ok(Self::from_block(
            format_entry(entry, token.trim()),
            width,
            height,
        ))
    }

    /// Show every entry of the embedded table, as `statcode --list` would.
    pub fn list(width: u16, height: u16) -> Self {
        let table = TableSource::Embedded
            .load()
            .expect("embedded table must load");
        let root = format_all(&table).expect("embedded table is not empty");
        Self::from_block(root, width, height)
    }

    /// Send a single key event
    ///
    /// # Returns
    /// * `true` - If app quit as a result of this key
    /// * `false` - If app is still running
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        } else {
            self.render();
        }
        quit
    }

    /// Send a sequence of keys
    ///
    /// Continues sending keys until the sequence is exhausted or app quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Send a mouse wheel event over the body.
    pub fn scroll_wheel(&mut self, kind: MouseEventKind) {
        self.app.handle_mouse(MouseEvent {
            kind,
            column: 2,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        self.render();
    }

    /// Check if app is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current scroll offset of the body.
    pub fn scroll_position(&self) -> isize {
        self.app.viewport().scroll_position()
    }

    fn render(&mut self) {
        self.app
            .draw()
            .expect("Rendering should succeed in test harness");
    }

    /// Render the current frame to a string
    pub fn render_to_string(&mut self) -> String {
        self.render();
        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
