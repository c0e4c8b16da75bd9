// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `pollwatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pollwatch",
    version,
    about = "Run a command each time one of a set of files changes.",
    long_about = "Polls the files matched by PATTERN and runs CMD whenever one of them \
                  changes. In CMD, `%` is replaced by the changed file's path and `\\%` \
                  is a literal percent sign. When standard input is not a terminal, the \
                  paths are read from it (one per line) and every positional argument \
                  belongs to CMD."
)]
pub struct CliArgs {
    /// Delay in seconds between two polls of the same file (default 1).
    #[arg(short = 'd', long = "delay", value_name = "SECONDS")]
    pub delay: Option<u64>,

    /// Log the watch set, every detected change and every invocation.
    #[arg(short, long)]
    pub verbose: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// Takes precedence over `-v` and `POLLWATCH_LOG`.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Optional TOML file providing defaults for any of these settings.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Never read paths from standard input, even when it is not a terminal.
    #[arg(long)]
    pub no_stdin: bool,

    /// `PATTERN CMD [ARGS...]`, or `CMD [ARGS...]` when paths come from stdin.
    #[arg(
        value_name = "PATTERN CMD [ARGS]",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::try_parse()`.
///
/// Errors are returned rather than printed so `main` can pick the exit code.
pub fn parse() -> Result<CliArgs, clap::Error> {
    CliArgs::try_parse()
}
