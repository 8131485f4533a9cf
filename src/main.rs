//! statcode - Entry Point

use clap::{CommandFactory, Parser};
use crossterm::style::Stylize;
use statcode::config::{apply_cli_overrides, load_config_with_precedence, merge_config};
use statcode::model::{resolve, AppError};
use statcode::source::TableSource;
use statcode::view::{format_all, format_entry, run_interactive, ColorConfig, Palette, TuiError};
use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// statcode - Like man pages, but for HTTP status codes and headers
#[derive(Parser, Debug)]
#[command(name = "statcode")]
#[command(version)]
#[command(about = "Like man pages, but for HTTP status codes and headers")]
#[command(
    after_help = "Keys: Up/Down or k/j scroll, PgUp/PgDn or b/Space page, Home/End or g/G jump, q quits."
)]
pub struct Args {
    /// Status code or header name to look up (e.g. 404, Content-Type)
    #[arg(allow_negative_numbers = true)]
    pub token: Option<String>,

    /// Browse every status code and header
    #[arg(short, long)]
    pub list: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Reference table to use instead of the built-in one
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,
}

/// Lowercase the help and list flags so `-H`, `--HELP`, `-L` and `--List` work.
fn normalize_flag_case<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 {
                return arg;
            }
            match arg.to_str().map(str::to_ascii_lowercase) {
                Some(lower) if matches!(lower.as_str(), "-h" | "--help" | "-l" | "--list") => {
                    OsString::from(lower)
                }
                _ => arg,
            }
        })
        .collect()
}

fn main() -> ExitCode {
    let args = Args::parse_from(normalize_flag_case(std::env::args_os()));
    let mut colors = ColorConfig::from_env_and_args(args.no_color);

    match run(args, &mut colors) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, colors);
            ExitCode::from(err.exit_code())
        }
    }
}

fn report_error(err: &AppError, colors: ColorConfig) {
    let message = err.to_string();
    if colors.colors_enabled() && std::io::stderr().is_terminal() {
        eprintln!("{}", message.red());
    } else {
        eprintln!("{message}");
    }
}

/// Run one lookup or listing.
///
/// `colors` is updated once the config file is resolved so later errors
/// honor `no_color` from the file as well as the flag.
fn run(args: Args, colors: &mut ColorConfig) -> Result<(), AppError> {
    if args.token.is_none() && !args.list {
        Args::command().print_help().map_err(TuiError::Io)?;
        return Ok(());
    }

    // Defaults → Config File → CLI Args
    let config_file = load_config_with_precedence(args.config.clone())?;
    let config = apply_cli_overrides(merge_config(config_file)?, args.data.clone(), args.no_color);
    *colors = ColorConfig::from_env_and_args(config.no_color);

    // Logging is best effort: the pager still works without it
    if let Err(e) = statcode::logging::init(&config.log_file_path) {
        eprintln!("Warning: logging disabled: {e}");
    }

    info!(
        data_file = ?config.data_file,
        no_color = config.no_color,
        "Configuration loaded and resolved"
    );

    let table = TableSource::from_path(config.data_file.clone()).load()?;

    let root = match args.token.as_deref() {
        Some(token) if !args.list => {
            let entry = resolve(&table, token)?;
            format_entry(entry, token.trim())
        }
        _ => format_all(&table)?,
    };

    let palette = Palette::with_color_config(*colors);
    run_interactive(root, config.keybindings, palette)?;

    Ok(())
}
