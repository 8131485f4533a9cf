//! Screen styling configuration.
//!
//! Provides the palette for titles and the footer menu key and hint.

use crate::view_state::TextPalette;
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag or `no_color` in the config file
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        Self::resolve(no_color_flag, std::env::var_os("NO_COLOR").is_some())
    }

    fn resolve(no_color_flag: bool, no_color_env: bool) -> Self {
        Self {
            enabled: !no_color_flag && !no_color_env,
        }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== Palette =====

/// Styles used by the interactive view.
///
/// - Title labels (bold)
/// - Footer menu key (black on light cyan)
/// - Footer hint (gray)
///
/// With colors disabled only the bold and reversed modifiers remain, so the
/// screen keeps its structure on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Body text.
    pub plain: Style,
    /// Section labels.
    pub title: Style,
    /// The ` Q ` key in the footer.
    pub menu: Style,
    /// Footer text next to the menu key.
    pub hint: Style,
}

impl Palette {
    /// Create a palette for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        if config.colors_enabled() {
            Self {
                plain: Style::default(),
                title: bold,
                menu: Style::default().fg(Color::Black).bg(Color::LightCyan),
                hint: Style::default().fg(Color::Gray),
            }
        } else {
            Self {
                plain: Style::default(),
                title: bold,
                menu: Style::default().add_modifier(Modifier::REVERSED),
                hint: Style::default(),
            }
        }
    }

    /// The subset used to render layout text.
    pub fn text_palette(&self) -> TextPalette {
        TextPalette {
            plain: self.plain,
            title: self.title,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}

// ===== Tests =====
