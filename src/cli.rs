// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::ignore::DEFAULT_SIZE_LIMIT;

/// Command-line arguments for `pkgignore`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pkgignore",
    version,
    about = "Decide which files of a package directory are excluded from packaging.",
    long_about = None
)]
pub struct CliArgs {
    /// Package root directory.
    #[arg(long, value_name = "DIR", default_value = ".", global = true)]
    pub root: PathBuf,

    /// Ignore file to read.
    ///
    /// Default: `.pkgignore` inside the package root. A missing file is not
    /// an error.
    #[arg(long, value_name = "PATH", global = true)]
    pub ignore_file: Option<PathBuf>,

    /// Fail instead of warning when a pattern cannot be compiled.
    #[arg(long, global = true)]
    pub strict: bool,

    /// Upper bound, in bytes, on each pattern's compiled regex.
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_SIZE_LIMIT, global = true)]
    pub size_limit: usize,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PKGIGNORE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the effective ignore patterns.
    Print,

    /// Report whether each root-relative path is ignored.
    Check {
        /// Paths such as `/src/app.js`, `src/app.js` or `./src/app.js`.
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// List the files under the package root that would be packaged.
    List,
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
