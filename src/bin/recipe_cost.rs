//! Recipe cost CLI - interactive recipe cost calculator
//!
//! Usage:
//!   recipe-cost                    Start the interactive menu
//!   recipe-cost --currency EUR     Print costs with a different unit
//!   recipe-cost -vv                Debug logging on stderr
//!
//! Colors are used only when stdout is a terminal and neither `--no-color`
//! nor a non-empty `NO_COLOR` is set.

use std::ffi::OsStr;
use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use recipe_cost::config::DEFAULT_CURRENCY;
use recipe_cost::{Config, RecipeStore, Session, output};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "recipe-cost")]
#[command(about = "Record recipes and calculate what a dish costs")]
#[command(version)]
struct Cli {
    /// Unit suffix printed after every cost
    #[arg(long, env = "RECIPE_CURRENCY", default_value = DEFAULT_CURRENCY)]
    currency: String,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        output::fatal(&format!("{:#}", e));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose)?;

    let no_color_env = std::env::var_os("NO_COLOR");
    let color = color_enabled(cli.no_color, no_color_env.as_deref(), io::stdout().is_terminal());
    let config = Config::default()
        .with_currency(cli.currency)
        .with_color(color);

    run_session(io::stdin().lock(), io::stdout().lock(), config)
}

/// Run a fresh session over the given console streams.
fn run_session<R: BufRead, W: Write>(input: R, output: W, config: Config) -> Result<()> {
    let mut store = RecipeStore::new();
    Session::new(input, output, &mut store, config)
        .run()
        .context("Console session failed")
}

/// Any non-empty `NO_COLOR` disables color, whatever its value.
fn color_enabled(no_color_flag: bool, no_color_env: Option<&OsStr>, is_terminal: bool) -> bool {
    let env_disabled = no_color_env.is_some_and(|v| !v.is_empty());
    is_terminal && !no_color_flag && !env_disabled
}

/// Log to stderr; `RECIPE_LOG` overrides the verbosity flag.
fn init_logging(verbose: u8) -> Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_env("RECIPE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Output sink whose every write fails
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
        }
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["recipe-cost"]).unwrap();
        assert_eq!(cli.verbose, 0);
        assert!(!cli.no_color);
        assert!(!cli.currency.is_empty());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from(["recipe-cost", "--currency", "EUR", "--no-color", "-vv"])
            .unwrap();
        assert_eq!(cli.currency, "EUR");
        assert!(cli.no_color);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_rejects_positional_args() {
        assert!(Cli::try_parse_from(["recipe-cost", "extra"]).is_err());
    }

    #[test]
    fn test_color_only_on_terminal() {
        assert!(color_enabled(false, None, true));
        assert!(!color_enabled(false, None, false));
        assert!(!color_enabled(true, None, true));
    }

    #[test]
    fn test_any_non_empty_no_color_disables() {
        for value in ["1", "0", "false", "no"] {
            assert!(!color_enabled(false, Some(OsStr::new(value)), true), "NO_COLOR={}", value);
        }
        assert!(color_enabled(false, Some(OsStr::new("")), true));
    }

    #[test]
    fn test_session_completes_on_exit() {
        let result = run_session(Cursor::new("5\n"), Vec::new(), Config::default());
        assert!(result.is_ok());
    }

    #[test]
    fn test_console_failure_is_reported() {
        let result = run_session(Cursor::new("5\n"), BrokenPipe, Config::default());
        let err = result.unwrap_err();
        assert!(format!("{:#}", err).contains("Console session failed"));
        assert!(format!("{:#}", err).contains("stdout closed"));
    }
}
