//! Command-line options.

use clap::Parser;
use todo_core::default_log_level;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Startup configuration for one session.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "todo_cli",
    version,
    about = "Terminal to-do list",
    after_help = crate::session::HELP
)]
pub struct CliOptions {
    /// Absolute directory for rolling log files; logging is off without it.
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<String>,

    /// Log level; only used together with `--log-dir`.
    #[arg(
        long,
        value_name = "LEVEL",
        value_parser = LOG_LEVELS,
        ignore_case = true,
        default_value = default_log_level()
    )]
    pub log_level: String,

    /// Start without the sample list.
    #[arg(long)]
    pub empty: bool,
}

impl CliOptions {
    pub fn seed_samples(&self) -> bool {
        !self.empty
    }
}
