// src/config.rs

//! Run configuration resolved from CLI arguments.

use std::path::PathBuf;

use crate::cli::CliArgs;
use crate::errors::{IgnoreError, Result};
use crate::fs::FileSystem;
use crate::ignore::DEFAULT_IGNORE_FILE;

/// Everything a run needs besides the subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub root: PathBuf,
    pub ignore_file: PathBuf,
    pub strict: bool,
    pub size_limit: usize,
}

impl RunConfig {
    /// Resolve defaults and validate against the filesystem.
    ///
    /// - The ignore file defaults to `<root>/.pkgignore`.
    /// - The root must be an existing directory.
    /// - The size limit must be non-zero.
    pub fn from_args(args: &CliArgs, fs: &dyn FileSystem) -> Result<Self> {
        let ignore_file = args
            .ignore_file
            .clone()
            .unwrap_or_else(|| args.root.join(DEFAULT_IGNORE_FILE));

        let config = RunConfig {
            root: args.root.clone(),
            ignore_file,
            strict: args.strict,
            size_limit: args.size_limit,
        };
        config.validate(fs)?;
        Ok(config)
    }

    fn validate(&self, fs: &dyn FileSystem) -> Result<()> {
        if !fs.is_dir(&self.root) {
            return Err(IgnoreError::ConfigError(format!(
                "package root {:?} is not a directory",
                self.root
            )));
        }
        if self.size_limit == 0 {
            return Err(IgnoreError::ConfigError(
                "pattern size limit must be >= 1 (got 0)".to_string(),
            ));
        }
        Ok(())
    }
}
