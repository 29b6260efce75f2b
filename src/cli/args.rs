//! Command line argument parsing for the profanity CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::filter::DEFAULT_LANGUAGE;

/// Profanity - multilingual fuzzy profanity detection
#[derive(Parser, Debug, Clone)]
#[command(name = "profanity")]
#[command(about = "Detect profane terms in text, tolerating obfuscated spellings")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct ProfanityArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Directory holding `dictionary.<lang>` files
    #[arg(
        short,
        long,
        value_name = "DIR",
        env = "PROFANITY_DICTIONARY_DIR",
        default_value = "."
    )]
    pub dir: PathBuf,

    /// Filter configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Similarity threshold in [0.0, 1.0], overriding the configuration
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl ProfanityArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Default log filter for the verbosity level, used when `RUST_LOG` is
    /// not set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity() {
            0 => "error",
            1 => "warn",
            2 => "info",
            3 => "debug",
            _ => "trace",
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check texts for profanity (reads lines from stdin when no text is given)
    Check(CheckArgs),

    /// List the terms of a language dictionary
    Terms(TermsArgs),
}

/// Arguments for checking texts
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Language code, e.g. "en" or "pt-BR"
    #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
    pub lang: String,

    /// Texts to check
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Exit with status 2 when any text contains profanity
    #[arg(long)]
    pub fail_on_match: bool,
}

/// Arguments for listing terms
#[derive(Parser, Debug, Clone)]
pub struct TermsArgs {
    /// Language code
    #[arg(short, long, default_value = DEFAULT_LANGUAGE)]
    pub lang: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
