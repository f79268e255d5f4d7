//! Command-line interface definition using clap.

use crate::config::Variant;
use clap::Parser;
use std::path::PathBuf;

/// A three-pane terminal console: list, input and output
#[derive(Parser, Debug)]
#[command(name = "termpanes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Layout variant to run
    #[arg(value_enum)]
    pub variant: Variant,

    /// TOML file overriding sizes, list items and key bindings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (logs are discarded otherwise)
    #[arg(long, env = "TERMPANES_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
