//! # hilo CLI Library
//!
//! Command-line interface for the `hilo-engine` Hi-Lo counting core.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand. [`run_with_input`] does
//! the same with an explicit input stream, for embedding and tests.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["hilo", "count", "--decks", "6"];
//! let code = hilo_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `count`: Interactive counting session (the default)
//! - `deal`: Deal and count cards from a seeded practice shoe
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, IsTerminal, Write};
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod ui;
pub mod validation;

use cli::{Commands, HiloCli};
use config::{ConfigError, ConfigResolved};
use commands::{handle_cfg_command, handle_count_command, handle_deal_command};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand
/// handler. Session input is read from the process's stdin, and output is
/// colorized when stdout is a terminal.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["hilo", "deal", "--decks", "1", "--cards", "5", "--seed", "42"];
/// let code = hilo_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    let terminal = std::io::stdout().is_terminal();
    dispatch(args, out, err, &mut stdin_lock, terminal)
}

/// Same as [`run`], reading session input from `stdin`. Output is never colorized.
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    dispatch(args, out, err, stdin, false)
}

fn dispatch<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
    terminal: bool,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HiloCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "For full help, run: hilo --help");
                    exit_code::ERROR
                }
            };
        }
    };

    logging::init_logging(cli.verbose);

    let result = execute(cli, config::load_with_sources(), terminal, out, err, stdin);
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn execute(
    cli: HiloCli,
    loaded: Result<ConfigResolved, ConfigError>,
    terminal: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let resolved = loaded?;
    let color = terminal && !cli.no_color && resolved.config.color;

    match cli.cmd.unwrap_or(Commands::Count { decks: None }) {
        Commands::Count { decks } => {
            handle_count_command(decks, &resolved.config, color, out, err, stdin)
        }
        Commands::Deal {
            decks,
            cards,
            seed,
            json,
        } => handle_deal_command(decks, cards, seed, json, &resolved.config, color, out),
        Commands::Cfg => handle_cfg_command(&resolved, out),
    }
}
