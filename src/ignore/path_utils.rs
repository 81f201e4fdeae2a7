// src/ignore/path_utils.rs

//! Path normalization shared by patterns and queried paths.

use std::borrow::Cow;
use std::path::Path;

/// Normalize a pattern or candidate path to its root-relative form.
///
/// The result always starts with exactly one `/` and never ends with one
/// (except for the root itself, which normalizes to `/`).
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim_start_matches('/').trim_end_matches('/');
    let mut out = String::with_capacity(trimmed.len() + 1);
    out.push('/');
    out.push_str(trimmed);
    out
}

/// Rewrite platform separators to `/`.
///
/// Only Windows treats `\` as a separator; elsewhere it is an ordinary
/// file-name character and is kept.
pub fn to_slash(s: &str) -> Cow<'_, str> {
    if cfg!(windows) {
        Cow::Owned(s.replace('\\', "/"))
    } else {
        Cow::Borrowed(s)
    }
}

/// Convert a path into a root-relative string with forward slashes, in the
/// normalized form accepted by [`normalize`].
///
/// - First we try a direct `strip_prefix(root)`.
/// - If that fails (e.g. due to symlinks or different absolute prefixes),
///   we canonicalize both paths and try again.
///
/// Returns `None` if the path cannot be related to `root` or is not valid
/// UTF-8.
pub fn relative_str(root: &Path, path: &Path) -> Option<String> {
    if let Ok(rel) = path.strip_prefix(root) {
        return rel.to_str().map(|s| normalize(&to_slash(s)));
    }

    if let (Ok(root_canon), Ok(path_canon)) = (root.canonicalize(), path.canonicalize()) {
        if let Ok(rel) = path_canon.strip_prefix(&root_canon) {
            return rel.to_str().map(|s| normalize(&to_slash(s)));
        }
    }

    None
}
