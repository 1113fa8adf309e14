//! CLI argument parsing using clap

use crate::config;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for haags commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

impl From<OutputFormat> for config::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => config::OutputFormat::Human,
            OutputFormat::Jsonl => config::OutputFormat::Jsonl,
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when writing to a terminal
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

impl From<ColorChoice> for config::ColorOption {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => config::ColorOption::Auto,
            ColorChoice::Always => config::ColorOption::Always,
            ColorChoice::Never => config::ColorOption::Never,
        }
    }
}

/// Haags CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "haags")]
#[command(about = "Translate standard Dutch into the dialect of The Hague")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Flags accepted by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Configuration file (defaults to ./haags.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Alternate rule table, overriding the configuration
    #[arg(long, global = true, value_name = "PATH")]
    pub rules: Option<PathBuf>,

    /// Output coloring, overriding the configuration
    #[arg(long, global = true)]
    pub color: Option<ColorChoice>,

    /// Log table compilation and rule activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available haags subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Translate text (arguments, a file, or stdin lines)
    Translate {
        /// Text to translate; each argument is translated separately
        text: Vec<String>,

        /// Translate each line of this file
        #[arg(long, value_name = "PATH", conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Show, per rule, whether it changed the text
    Hits {
        /// Text to trace through the rule table
        text: String,

        /// Only list rules that changed the text
        #[arg(long)]
        fired: bool,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// List the rule table in application order
    Rules {
        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Compile and validate the rule table
    Check,
}
