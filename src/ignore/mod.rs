// src/ignore/mod.rs

//! Path exclusion for packaging.
//!
//! This module is responsible for:
//! - Holding the ordered ignore patterns (built-ins + ignore file + extras).
//! - Translating the small glob dialect into anchored regexes.
//! - Answering "is this path ignored?" for root-relative paths.
//!
//! It does **not** walk directories; see [`crate::walk`] for that.
//!
//! ```
//! use pkgignore::ignore::PatternSet;
//!
//! let mut set = PatternSet::new();
//! set.add_pattern("/node_modules/*");
//! set.add_pattern("/**/*.log");
//! let matcher = set.compile();
//!
//! assert!(matcher.is_ignored("/node_modules/left-pad/index.js"));
//! assert!(matcher.is_ignored("/logs/app.log"));
//! assert!(matcher.is_ignored("/.git"));
//! assert!(!matcher.is_ignored("/node_modules"));
//! assert!(!matcher.is_ignored("/src/app.js"));
//! ```

pub mod glob;
pub mod matcher;
pub mod path_utils;
pub mod pattern_set;

pub use matcher::{CompiledPattern, IgnoreMatcher, PatternRejection};
pub use path_utils::{normalize, relative_str};
pub use pattern_set::PatternSet;

/// Entries every package excludes: package metadata, the package staging
/// directory and the git directory.
pub const BUILTIN_PATTERNS: [&str; 3] = ["/meta", "/mpm-pkg", "/.git"];

/// File name of the ignore file looked up in the package root.
pub const DEFAULT_IGNORE_FILE: &str = ".pkgignore";

/// Default bound on each pattern's compiled regex, in bytes.
pub const DEFAULT_SIZE_LIMIT: usize = 1 << 20;
