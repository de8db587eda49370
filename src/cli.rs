// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `dirwatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dirwatch",
    version,
    about = "Poll a directory and log the line numbers where a magic string appears.",
    long_about = None
)]
pub struct CliArgs {
    /// Directory path to watch.
    #[arg(value_name = "PATH")]
    pub path: String,

    /// String to watch for (matched case-insensitively). Must not be empty.
    #[arg(
        value_name = "MAGIC",
        value_parser = clap::builder::NonEmptyStringValueParser::new()
    )]
    pub magic: String,

    /// Only watch files whose name ends with this suffix (e.g. ".txt").
    #[arg(short, long, value_name = "EXT")]
    pub ext: Option<String>,

    /// Number of seconds between polls.
    #[arg(
        short,
        long,
        value_name = "SECONDS",
        default_value_t = 3,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub interval: u64,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DIRWATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
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
///
/// On missing or malformed arguments clap prints usage and exits non-zero.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
