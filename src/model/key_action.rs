//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Scroll up by one line. Default: ↑/k
    ScrollUp,
    /// Scroll down by one line. Default: ↓/j
    ScrollDown,
    /// Scroll up by one page. Default: Page Up/b
    PageUp,
    /// Scroll down by one page. Default: Page Down/Space
    PageDown,
    /// Jump to the first line. Default: Home/g
    ScrollToTop,
    /// Jump to the last page. Default: End/G
    ScrollToBottom,
    /// Leave the viewer. Default: q/Q
    Quit,
}

impl KeyAction {
    /// All actions, in the order they are listed in help and config docs.
    pub const ALL: [KeyAction; 7] = [
        KeyAction::ScrollUp,
        KeyAction::ScrollDown,
        KeyAction::PageUp,
        KeyAction::PageDown,
        KeyAction::ScrollToTop,
        KeyAction::ScrollToBottom,
        KeyAction::Quit,
    ];

    /// Name used for this action in the `[keybindings]` config table.
    pub fn config_name(self) -> &'static str {
        match self {
            KeyAction::ScrollUp => "scroll_up",
            KeyAction::ScrollDown => "scroll_down",
            KeyAction::PageUp => "page_up",
            KeyAction::PageDown => "page_down",
            KeyAction::ScrollToTop => "scroll_to_top",
            KeyAction::ScrollToBottom => "scroll_to_bottom",
            KeyAction::Quit => "quit",
        }
    }

    /// Parse a `[keybindings]` table key.
    pub fn from_config_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.config_name() == name)
    }
}
