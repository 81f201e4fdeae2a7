// tests/integration/error_handling.rs

use std::path::Path;

use pkgignore::errors::IgnoreError;
use pkgignore::ignore::PatternSet;
use pkgignore_test_utils::builders::MockTreeBuilder;

#[test]
fn unreadable_ignore_file_returns_structured_error() {
    let fs = MockTreeBuilder::new().build();
    fs.add_unreadable_file("./.pkgignore");

    match PatternSet::initialize(&fs, Some(Path::new("./.pkgignore"))) {
        Err(IgnoreError::Io { path, source }) => {
            assert_eq!(path, Path::new("./.pkgignore"));
            assert_eq!(source.kind(), std::io::ErrorKind::PermissionDenied);
        }
        Err(e) => panic!("Expected Io error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn bad_pattern_is_reported_once_and_rest_still_applies() {
    let oversized = format!("/{}", "*/".repeat(5000));
    let fs = MockTreeBuilder::new()
        .ignore_file(&[oversized.as_str(), "/*.tmp"])
        .build();

    let set = PatternSet::initialize(&fs, Some(Path::new("./.pkgignore")))
        .unwrap()
        .with_size_limit(32 * 1024);
    let matcher = set.compile();

    assert_eq!(matcher.errors().len(), 1);
    assert!(matcher.errors()[0].reason.contains("Invalid ignore pattern"));
    assert!(matcher.is_ignored("/scratch.tmp"));
    assert!(matcher.is_ignored("/mpm-pkg"));

    match set.compile_strict() {
        Err(IgnoreError::Pattern { pattern, .. }) => {
            assert_eq!(pattern, oversized.trim_end_matches('/'));
        }
        Err(e) => panic!("Expected Pattern error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}
