//! Configuration module.
//!
//! Precedence: built-in defaults, then the TOML config file, then CLI flags.

pub mod keybindings;
pub mod loader;

pub use keybindings::{parse_key_spec, KeyBindings};
pub use loader::{
    apply_cli_overrides, default_config_path, default_log_path, load_config_file,
    load_config_with_precedence, merge_config, ConfigError, ConfigFile, ResolvedConfig,
};
