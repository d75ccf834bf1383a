//! Mastermind - CLI
//!
//! Console game by default, with a full-screen TUI and a generator
//! distribution report as subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind::{
    commands::{PlayConfig, run_play, run_sample},
    interactive::{App, run_tui},
    output::{DisplayMode, RULES, print_sample_report, print_version_info},
};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind: guess the hidden combination of 4 colors out of 8",
    disable_version_flag = true,
    after_help = RULES
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show pegs as numbers instead of color blocks
    #[arg(short = 'n', long = "numbers", global = true)]
    numbers: bool,

    /// Display version information
    #[arg(short = 'v', long = "version", global = true)]
    version: bool,

    /// Seed the code generator for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write diagnostic logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Console game (default)
    Play,

    /// Full-screen terminal interface
    Tui,

    /// Draw many secrets and report how evenly colors are spread
    Sample {
        /// Number of secrets to draw
        #[arg(short = 'c', long, default_value = "1000000")]
        count: usize,
    },
}

/// Set up the tracing subscriber
///
/// Logs go to `log_file` when given. Without one they go to stderr, except
/// under the TUI where they would corrupt the screen.
fn init_logging(log_file: Option<&Path>, fullscreen: bool) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    // Don't panic if already initialized
    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            let _ = builder
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init();
        }
        None if fullscreen => {
            let _ = builder.with_writer(std::io::sink).try_init();
        }
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.version {
        print_version_info();
        return Ok(());
    }

    // Default to the console game if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.log_file.as_deref(), matches!(command, Commands::Tui))?;

    let display = if cli.numbers {
        DisplayMode::Numbers
    } else {
        DisplayMode::Blocks
    };
    let config = PlayConfig::new(display, cli.seed);

    match command {
        Commands::Play => run_play(&config),
        Commands::Tui => run_tui(App::new(&config)),
        Commands::Sample { count } => {
            let report = run_sample(count, cli.seed, true);
            print_sample_report(&report);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_flag_accepted_after_subcommand() {
        for args in [
            ["mastermind", "-v"].as_slice(),
            &["mastermind", "play", "-v"],
            &["mastermind", "tui", "--version"],
        ] {
            let cli = Cli::try_parse_from(args).unwrap();
            assert!(cli.version, "{args:?}");
        }
    }

    #[test]
    fn numbers_flag_and_sample_count() {
        let cli = Cli::try_parse_from(["mastermind", "sample", "-c", "500", "-n"]).unwrap();
        assert!(cli.numbers);
        assert!(matches!(cli.command, Some(Commands::Sample { count: 500 })));
    }
}
