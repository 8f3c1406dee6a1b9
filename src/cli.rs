// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `taskplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskplan",
    version,
    about = "Assign prioritized, dependency-linked tasks to workers.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the plan file (TOML).
    ///
    /// Default: `Taskplan.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Taskplan.toml")]
    pub config: String,

    /// Print the plan as a single line of JSON instead of pretty-printing.
    #[arg(long)]
    pub compact: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKPLAN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse the plan file and print workers and tasks, but compute nothing.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
