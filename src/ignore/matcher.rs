// src/ignore/matcher.rs

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use regex::{Regex, RegexBuilder};
use tracing::trace;

use crate::errors::{IgnoreError, Result};
use crate::ignore::glob;
use crate::ignore::path_utils::{normalize, to_slash};

/// A single pattern translated into an anchored regular expression.
///
/// Immutable once built; safe to share between threads.
#[derive(Clone)]
pub struct CompiledPattern {
    raw: String,
    regex: Regex,
}

impl fmt::Debug for CompiledPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledPattern")
            .field("raw", &self.raw)
            .field("regex", &self.regex.as_str())
            .finish()
    }
}

impl CompiledPattern {
    /// Translate a normalized pattern, bounding the compiled program size.
    pub fn new(raw: &str, size_limit: usize) -> Result<Self> {
        let source = glob::to_regex_source(raw);
        let regex = RegexBuilder::new(&source)
            .size_limit(size_limit)
            .build()
            .map_err(|source| IgnoreError::Pattern {
                pattern: raw.to_string(),
                source,
            })?;
        Ok(Self {
            raw: raw.to_string(),
            regex,
        })
    }

    /// The pattern text this was compiled from.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whole-string match against an already normalized path.
    pub fn is_match(&self, normalized_path: &str) -> bool {
        self.regex.is_match(normalized_path)
    }
}

/// Query-ready form of a [`PatternSet`](crate::ignore::PatternSet).
///
/// Wildcard-free patterns are answered by a hash lookup; the remaining
/// patterns are tried in insertion order until one matches.
#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    literals: HashSet<String>,
    patterns: Vec<CompiledPattern>,
    errors: Vec<PatternRejection>,
}

/// A pattern that failed to compile and was left out of the matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternRejection {
    pub pattern: String,
    pub reason: String,
}

impl IgnoreMatcher {
    pub(crate) fn new(
        literals: HashSet<String>,
        patterns: Vec<CompiledPattern>,
        errors: Vec<PatternRejection>,
    ) -> Self {
        Self {
            literals,
            patterns,
            errors,
        }
    }

    /// Returns true if `path` (root-relative, e.g. `"/src/app.js"`) is
    /// excluded by any pattern.
    ///
    /// The path is normalized the same way patterns are, so `"src/app.js"`
    /// and `"/src/app.js/"` are equivalent.
    pub fn is_ignored(&self, path: &str) -> bool {
        let path = normalize(path);

        if self.literals.contains(&path) {
            trace!(%path, "ignored by literal pattern");
            return true;
        }

        match self.patterns.iter().find(|p| p.is_match(&path)) {
            Some(pattern) => {
                trace!(%path, pattern = %pattern.raw(), "ignored by pattern");
                true
            }
            None => false,
        }
    }

    /// Like [`is_ignored`](Self::is_ignored) for a `Path`.
    ///
    /// Paths that are not valid UTF-8 never match.
    pub fn is_ignored_path(&self, path: &Path) -> bool {
        match path.to_str() {
            Some(s) => self.is_ignored(&to_slash(s)),
            None => {
                trace!(?path, "non UTF-8 path treated as not ignored");
                false
            }
        }
    }

    /// Compiled wildcard patterns, in insertion order.
    pub fn patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    /// Number of patterns that take part in matching.
    pub fn len(&self) -> usize {
        self.literals.len() + self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Patterns that were rejected during compilation.
    pub fn errors(&self) -> &[PatternRejection] {
        &self.errors
    }
}

#[allow(dead_code)]
fn assert_send_sync<T: Send + Sync>() {}

const _: fn() = assert_send_sync::<IgnoreMatcher>;
