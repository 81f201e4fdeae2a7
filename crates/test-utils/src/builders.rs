#![allow(dead_code)]

use pkgignore::fs::mock::MockFileSystem;
use pkgignore::ignore::{IgnoreMatcher, PatternSet};

/// Builder for a `MockFileSystem` package tree rooted at `.`.
///
/// Paths are given root-relative (`"src/app.js"` or `"/src/app.js"`).
#[derive(Default)]
pub struct MockTreeBuilder {
    files: Vec<(String, String)>,
    dirs: Vec<String>,
}

impl MockTreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, path: &str, content: &str) -> Self {
        self.files.push((to_mock_path(path), content.to_string()));
        self
    }

    /// Add several empty files at once.
    pub fn files(mut self, paths: &[&str]) -> Self {
        for path in paths {
            self.files.push((to_mock_path(path), String::new()));
        }
        self
    }

    pub fn dir(mut self, path: &str) -> Self {
        self.dirs.push(to_mock_path(path));
        self
    }

    /// Write a `.pkgignore` at the root with the given lines.
    pub fn ignore_file(self, lines: &[&str]) -> Self {
        let mut content = lines.join("\n");
        content.push('\n');
        self.file(".pkgignore", &content)
    }

    pub fn build(self) -> MockFileSystem {
        let fs = MockFileSystem::new();
        for dir in self.dirs {
            fs.add_dir(dir);
        }
        for (path, content) in self.files {
            fs.add_file(path, content);
        }
        fs
    }
}

fn to_mock_path(path: &str) -> String {
    format!("./{}", path.trim_start_matches('/'))
}

/// Compile a matcher from built-ins plus `patterns`, in order.
pub fn matcher_for(patterns: &[&str]) -> IgnoreMatcher {
    let mut set = PatternSet::new();
    for pattern in patterns {
        set.add_pattern(pattern);
    }
    set.compile()
}
