//! # pokerhand CLI Library
//!
//! Command-line front end for the pokerhand engine: classify five cards,
//! compare two hands, deal seeded hands, and inspect configuration.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments and dispatches to a subcommand, writing to the
//! supplied streams and returning the process exit code.
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let args = ["pokerhand", "eval", "Js", "Jc", "Jh", "4d", "4s"];
//! let code = pokerhand_cli::run(args, &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8_lossy(&out).contains("full house"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `eval`: Classify five cards and print their tie-break order
//! - `compare`: Compare two hands (win / lose / draw for the first)
//! - `deal`: Deal two hands per round from a seeded deck
//! - `bench`: Benchmark classification and comparison
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
#[macro_use]
mod macros;
pub mod ui;

use cli::{Commands, PokerhandCli};
use commands::{
    handle_bench_command, handle_cfg_command, handle_compare_command, handle_deal_command,
    handle_eval_command,
};
use config::Config;
use formatters::CardStyle;

pub use error::CliError;

const COMMANDS: &[&str] = &["eval", "compare", "deal", "bench", "cfg"];

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match PokerhandCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match config::load() {
        Ok(config) => dispatch(cli.cmd, &config, out, err),
        Err(e) => Err(e.into()),
    };
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn dispatch(
    cmd: Commands,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let style = CardStyle::resolve(config.ascii);
    match cmd {
        Commands::Eval { cards, json } => handle_eval_command(&cards, json, style, out),
        Commands::Compare {
            hand,
            against,
            json,
        } => handle_compare_command(&hand, &against, json, style, out),
        Commands::Deal { seed, rounds } => handle_deal_command(seed, rounds, config, style, out, err),
        Commands::Bench { iters } => handle_bench_command(iters, out),
        Commands::Cfg => handle_cfg_command(out),
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        if write!(out, "{}", e).is_err() {
            return exit_code::ERROR;
        }
        return exit_code::SUCCESS;
    }
    write_or_exit!(err, "{}", e);
    write_or_exit!(err, "Usage: pokerhand <command> [options]\n");
    write_or_exit!(err, "Commands:");
    for c in COMMANDS {
        write_or_exit!(err, "  {}", c);
    }
    write_or_exit!(err, "\nFor full help, run: pokerhand --help");
    exit_code::ERROR
}
