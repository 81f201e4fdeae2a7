// src/walk.rs

//! Enumerate the files of a package tree that survive the ignore rules.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::errors::{IgnoreError, Result};
use crate::fs::FileSystem;
use crate::ignore::{IgnoreMatcher, relative_str};

/// Collect all files under `root` that are not ignored by `matcher`.
///
/// Ignored directories are not descended into, and neither are symlinked
/// directories, so link cycles cannot recurse. Paths are returned sorted so
/// the listing is stable across platforms.
pub fn collect_included_files(
    fs: &dyn FileSystem,
    root: &Path,
    matcher: &IgnoreMatcher,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    let mut skipped = 0usize;

    while let Some(dir) = stack.pop() {
        let entries = fs.read_dir(&dir).map_err(|source| IgnoreError::Io {
            path: dir.clone(),
            source,
        })?;

        for path in entries {
            let Some(rel) = relative_str(root, &path) else {
                trace!(?path, "skipping path outside package root");
                continue;
            };
            if matcher.is_ignored(&rel) {
                trace!(path = %rel, "ignored");
                skipped += 1;
                continue;
            }

            if fs.is_dir(&path) {
                if fs.is_symlink(&path) {
                    debug!(path = %rel, "not following symlinked directory");
                    continue;
                }
                stack.push(path);
            } else if fs.is_file(&path) {
                files.push(path);
            }
        }
    }

    files.sort();
    debug!(included = files.len(), skipped, "walked package tree");
    Ok(files)
}
