//! Configuration file loading with precedence handling.

use super::keybindings::KeyBindings;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown fields.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// `[keybindings]` names an action that does not exist.
    #[error("Unknown key binding action: {0}")]
    UnknownAction(String),

    /// `[keybindings]` contains a key spec that does not parse.
    #[error("Invalid key '{spec}' for action {action}")]
    InvalidKey {
        /// Action the key was bound to.
        action: String,
        /// The offending key spec.
        spec: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/statcode/config.toml`.
///
/// ```toml
/// data_file = "/etc/statcode/codes.toml"
/// no_color = true
///
/// [keybindings]
/// page_down = ["space", "ctrl+d"]
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Reference table to load instead of the embedded one.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Disable colors.
    #[serde(default)]
    pub no_color: Option<bool>,

    /// Action name to key specs. Listed actions replace their default keys.
    #[serde(default)]
    pub keybindings: Option<HashMap<String, Vec<String>>>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Reference table path; `None` means the embedded table.
    pub data_file: Option<PathBuf>,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Colors disabled by configuration or flag.
    pub no_color: bool,
    /// Effective key bindings.
    pub keybindings: KeyBindings,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            log_file_path: default_log_path(),
            no_color: false,
            keybindings: KeyBindings::default(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/statcode/statcode.log` on Linux,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    match dirs::state_dir() {
        Some(state_dir) => state_dir.join("statcode").join("statcode.log"),
        None => PathBuf::from("statcode.log"),
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/statcode/config.toml` on Linux, appropriate path on other platforms.
/// Returns `None` if the config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("statcode").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. Default path `~/.config/statcode/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    match default_config_path() {
        Some(default_path) => load_config_file(default_path),
        None => Ok(None),
    }
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
///
/// # Errors
///
/// Returns error if `[keybindings]` names an unknown action or an invalid key.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    let keybindings = match &config.keybindings {
        Some(overrides) => defaults.keybindings.with_overrides(overrides)?,
        None => defaults.keybindings,
    };

    Ok(ResolvedConfig {
        data_file: config.data_file.or(defaults.data_file),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        no_color: config.no_color.unwrap_or(defaults.no_color),
        keybindings,
    })
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → CLI Args (highest)
///
/// # Arguments
///
/// * `config` - Base resolved config (already merged with defaults and file)
/// * `data_override` - Optional table path from `--data`
/// * `no_color_flag` - `--no-color` was given
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    data_override: Option<PathBuf>,
    no_color_flag: bool,
) -> ResolvedConfig {
    if let Some(path) = data_override {
        config.data_file = Some(path);
    }

    if no_color_flag {
        config.no_color = true;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
