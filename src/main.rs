//! Haags CLI entry point

use clap::Parser;
use haags::cli::{Command, args::Cli};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    let global = &cli.global;
    let exit_code = match &cli.command {
        Command::Translate { text, file, format } => {
            haags::cli::translate::run_translate(global, text, file.as_deref(), *format)
        }
        Command::Hits {
            text,
            fired,
            format,
        } => haags::cli::hits::run_hits(global, text, *fired, *format),
        Command::Rules { format } => haags::cli::rules::run_rules(global, *format),
        Command::Check => haags::cli::check::run_check(global),
    };

    process::exit(exit_code);
}

/// Logs go to stderr so that stdout stays clean for translations
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("haags=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
