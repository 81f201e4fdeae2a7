// src/ignore/pattern_set.rs

use std::collections::HashSet;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::errors::{IgnoreError, Result};
use crate::fs::FileSystem;
use crate::ignore::glob;
use crate::ignore::matcher::{CompiledPattern, IgnoreMatcher, PatternRejection};
use crate::ignore::path_utils::normalize;
use crate::ignore::{BUILTIN_PATTERNS, DEFAULT_SIZE_LIMIT};

/// Ordered collection of ignore patterns for one packaging run.
///
/// Always starts with [`BUILTIN_PATTERNS`]. User patterns are appended in
/// order; the order only shows up in [`print_patterns`](Self::print_patterns),
/// matching itself is a plain OR.
///
/// Compiling produces a separate [`IgnoreMatcher`]. Patterns added afterwards
/// only take effect in matchers compiled later.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<String>,
    size_limit: usize,
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternSet {
    /// A set holding only the built-in patterns.
    pub fn new() -> Self {
        Self {
            patterns: BUILTIN_PATTERNS.iter().map(|p| p.to_string()).collect(),
            size_limit: DEFAULT_SIZE_LIMIT,
        }
    }

    /// Bound the compiled size of each pattern's regex, in bytes.
    pub fn with_size_limit(mut self, size_limit: usize) -> Self {
        self.size_limit = size_limit;
        self
    }

    /// Build a set from an optional ignore file.
    ///
    /// - `None`, or a path that does not exist: built-ins only.
    /// - A path that exists but cannot be read: [`IgnoreError::Io`].
    pub fn initialize(fs: &dyn FileSystem, source: Option<&Path>) -> Result<Self> {
        let Some(path) = source.filter(|p| !p.as_os_str().is_empty()) else {
            return Ok(Self::new());
        };

        if !fs.exists(path) {
            debug!(?path, "no ignore file, using built-in patterns only");
            return Ok(Self::new());
        }

        let contents = fs.read_to_string(path).map_err(|source| IgnoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let set = Self::from_text(&contents);
        debug!(?path, patterns = set.len(), "loaded ignore file");
        Ok(set)
    }

    /// Build a set from already-read ignore file text.
    ///
    /// Blank lines and lines starting with `#` are skipped. Each remaining
    /// line, trimmed, is one pattern.
    pub fn from_text(text: &str) -> Self {
        let mut set = Self::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            set.add_pattern(line);
        }
        set
    }

    /// Append a pattern, normalized to one leading `/` and no trailing `/`.
    ///
    /// Patterns that normalize to the bare root are skipped.
    pub fn add_pattern(&mut self, text: &str) {
        let pattern = normalize(text);
        if pattern == "/" {
            debug!(raw = text, "skipping empty pattern");
            return;
        }
        debug!(%pattern, "adding ignore pattern");
        self.patterns.push(pattern);
    }

    /// All patterns in insertion order, built-ins first.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Always false: the built-ins are never removed.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Compile every pattern into a matcher.
    ///
    /// A pattern that fails to compile is logged and left out; the rest of
    /// the set still applies. Rejections are available through
    /// [`IgnoreMatcher::errors`]. Calling this again recompiles from scratch.
    pub fn compile(&self) -> IgnoreMatcher {
        let mut literals = HashSet::new();
        let mut compiled = Vec::new();
        let mut errors = Vec::new();

        for raw in &self.patterns {
            if glob::is_literal(raw) {
                literals.insert(raw.clone());
                continue;
            }
            match CompiledPattern::new(raw, self.size_limit) {
                Ok(pattern) => compiled.push(pattern),
                Err(err) => {
                    warn!(pattern = %raw, error = %err, "skipping invalid ignore pattern");
                    errors.push(PatternRejection {
                        pattern: raw.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        debug!(
            literals = literals.len(),
            wildcards = compiled.len(),
            rejected = errors.len(),
            "compiled ignore patterns"
        );
        IgnoreMatcher::new(literals, compiled, errors)
    }

    /// Like [`compile`](Self::compile), but fail on the first bad pattern.
    pub fn compile_strict(&self) -> Result<IgnoreMatcher> {
        let mut literals = HashSet::new();
        let mut compiled = Vec::new();

        for raw in &self.patterns {
            if glob::is_literal(raw) {
                literals.insert(raw.clone());
            } else {
                compiled.push(CompiledPattern::new(raw, self.size_limit)?);
            }
        }

        Ok(IgnoreMatcher::new(literals, compiled, Vec::new()))
    }

    /// Write the pattern list, one per line, in insertion order.
    pub fn print_patterns<W: Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl fmt::Display for PatternSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pattern in &self.patterns {
            writeln!(f, "  {pattern}")?;
        }
        Ok(())
    }
}
