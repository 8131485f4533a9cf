//! Keyboard bindings configuration.

use super::loader::ConfigError;
use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Provides man-page style default bindings with option to override via configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    ///
    /// Terminals disagree on whether an uppercase letter carries SHIFT, so
    /// character keys are retried with SHIFT toggled.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        let key = KeyEvent::new(key.code, key.modifiers);
        if let Some(action) = self.bindings.get(&key) {
            return Some(*action);
        }
        match key.code {
            KeyCode::Char(_) => {
                let toggled = KeyEvent::new(key.code, key.modifiers ^ KeyModifiers::SHIFT);
                self.bindings.get(&toggled).copied()
            }
            _ => None,
        }
    }

    /// Replace the keys of each configured action.
    ///
    /// `overrides` maps action config names (`"page_down"`) to key specs
    /// (`"pagedown"`, `"ctrl+d"`). Actions not named keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownAction` or `ConfigError::InvalidKey` for
    /// names and specs that do not parse.
    pub fn with_overrides(
        mut self,
        overrides: &HashMap<String, Vec<String>>,
    ) -> Result<Self, ConfigError> {
        for (name, specs) in overrides {
            let action = KeyAction::from_config_name(name)
                .ok_or_else(|| ConfigError::UnknownAction(name.clone()))?;

            let keys = specs
                .iter()
                .map(|spec| {
                    parse_key_spec(spec).ok_or_else(|| ConfigError::InvalidKey {
                        action: name.clone(),
                        spec: spec.clone(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            self.bindings.retain(|_, a| *a != action);
            for key in keys {
                self.bindings.insert(key, action);
            }
        }
        Ok(self)
    }
}

/// Parse a key spec such as `"j"`, `"G"`, `"pagedown"` or `"ctrl+d"`.
///
/// Named keys and modifiers are case-insensitive. A single uppercase letter
/// implies SHIFT, matching how crossterm reports it.
pub fn parse_key_spec(spec: &str) -> Option<KeyEvent> {
    let spec = spec.trim();
    if spec.is_empty() {
        return None;
    }

    let mut modifiers = KeyModifiers::NONE;
    let mut rest = spec;
    while let Some((prefix, tail)) = rest.split_once('+') {
        // A lone "+" is the plus key, not a separator.
        if tail.is_empty() {
            break;
        }
        modifiers |= match prefix.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "shift" => KeyModifiers::SHIFT,
            "alt" => KeyModifiers::ALT,
            _ => return None,
        };
        rest = tail;
    }

    let mut chars = rest.chars();
    let code = match (chars.next(), chars.next()) {
        (Some(c), None) => {
            if c.is_uppercase() {
                modifiers |= KeyModifiers::SHIFT;
            }
            KeyCode::Char(c)
        }
        _ => match rest.to_ascii_lowercase().as_str() {
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "space" => KeyCode::Char(' '),
            "enter" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backspace" => KeyCode::Backspace,
            _ => return None,
        },
    };

    Some(KeyEvent::new(code, modifiers))
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Arrow key scrolling
        bindings.insert(
            KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            KeyAction::ScrollUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            KeyAction::ScrollDown,
        );

        // Man-page style scrolling
        bindings.insert(
            KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE),
            KeyAction::ScrollUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE),
            KeyAction::ScrollDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            KeyAction::ScrollToTop,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT),
            KeyAction::ScrollToBottom,
        );

        // Page navigation
        bindings.insert(
            KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE),
            KeyAction::PageUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE),
            KeyAction::PageDown,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('b'), KeyModifiers::NONE),
            KeyAction::PageUp,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            KeyAction::PageDown,
        );

        // Jumps
        bindings.insert(
            KeyEvent::new(KeyCode::Home, KeyModifiers::NONE),
            KeyAction::ScrollToTop,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::End, KeyModifiers::NONE),
            KeyAction::ScrollToBottom,
        );

        // Application controls
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );
        bindings.insert(
            KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT),
            KeyAction::Quit,
        );

        Self { bindings }
    }
}
