// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod ignore;
pub mod logging;
pub mod walk;

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::cli::{CliArgs, Command};
use crate::config::RunConfig;
use crate::fs::{FileSystem, RealFileSystem};

pub use crate::errors::IgnoreError;
pub use crate::ignore::{BUILTIN_PATTERNS, IgnoreMatcher, PatternSet};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config resolution
/// - ignore file loading + pattern compilation
/// - the requested subcommand, writing to stdout
pub fn run(args: CliArgs) -> Result<()> {
    let fs = RealFileSystem;
    let stdout = io::stdout();
    run_with(&args, &fs, stdout.lock())
}

/// Same as [`run`] with an explicit filesystem and output sink.
pub fn run_with<W: Write>(args: &CliArgs, fs: &dyn FileSystem, mut out: W) -> Result<()> {
    let cfg = RunConfig::from_args(args, fs)?;

    let set = PatternSet::initialize(fs, Some(&cfg.ignore_file))?
        .with_size_limit(cfg.size_limit);
    let matcher = compile(&set, cfg.strict)?;

    match &args.command {
        Command::Print => {
            writeln!(out, "ignore patterns ({}):", set.len())?;
            set.print_patterns(&mut out)?;
        }
        Command::Check { paths } => {
            for path in paths {
                // `./x` is how shells spell a root-relative path.
                let query = path.strip_prefix("./").unwrap_or(path.as_str());
                let verdict = if matcher.is_ignored(query) {
                    "ignored"
                } else {
                    "included"
                };
                writeln!(out, "{verdict}\t{path}")?;
            }
        }
        Command::List => {
            let files = walk::collect_included_files(fs, &cfg.root, &matcher)
                .with_context(|| format!("listing package root {:?}", cfg.root))?;
            for file in &files {
                writeln!(out, "{}", file.display())?;
            }
            info!(count = files.len(), "files to package");
        }
    }

    Ok(())
}

fn compile(set: &PatternSet, strict: bool) -> Result<IgnoreMatcher> {
    if strict {
        return Ok(set.compile_strict()?);
    }

    let matcher = set.compile();
    if !matcher.errors().is_empty() {
        warn!(
            rejected = matcher.errors().len(),
            "some ignore patterns were skipped; fewer files will be excluded"
        );
    }
    Ok(matcher)
}
