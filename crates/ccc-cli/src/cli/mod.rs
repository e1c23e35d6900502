use chrono::NaiveDate;
use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `ccc` binary.
#[derive(Debug, Parser)]
#[command(
    name = "ccc",
    version,
    about = "Campus Club Connect - browse clubs and events, track memberships"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to config `general.default_format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding persisted membership (overrides `storage.dir`)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Treat this date as today, YYYY-MM-DD (overrides `general.today`)
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,
}

impl Cli {
    /// Merge parsed flags with the configured fallbacks.
    #[must_use]
    pub fn global_flags(&self, default_format: OutputFormat) -> GlobalFlags {
        GlobalFlags {
            format: self.format.unwrap_or(default_format),
            quiet: self.quiet,
            data_dir: self.data_dir.clone(),
            today: self.today,
        }
    }
}
