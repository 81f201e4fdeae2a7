// tests/integration/cli_run.rs

use clap::Parser;

use pkgignore::cli::CliArgs;
use pkgignore::run_with;
use pkgignore_test_utils::builders::MockTreeBuilder;

fn run(argv: &[&str], fs: &pkgignore::fs::mock::MockFileSystem) -> String {
    let mut argv_full = vec!["pkgignore"];
    argv_full.extend_from_slice(argv);
    let args = CliArgs::try_parse_from(argv_full).unwrap();

    let mut out = Vec::new();
    run_with(&args, fs, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn print_lists_builtins_then_file_patterns() {
    let fs = MockTreeBuilder::new().ignore_file(&["tmp/*"]).build();

    let out = run(&["print"], &fs);
    assert_eq!(
        out,
        "ignore patterns (4):\n  /meta\n  /mpm-pkg\n  /.git\n  /tmp/*\n"
    );
}

#[test]
fn check_reports_each_path() {
    let fs = MockTreeBuilder::new().ignore_file(&["/*.txt"]).build();

    let out = run(&["check", "/a.txt", "/dir/a.txt", ".git"], &fs);
    assert_eq!(out, "ignored\t/a.txt\nincluded\t/dir/a.txt\nignored\t.git\n");
}

#[test]
fn list_prints_included_files() {
    let fs = MockTreeBuilder::new()
        .ignore_file(&["/.pkgignore", "/build/*"])
        .files(&["main.js", "build/out.js"])
        .build();

    let out = run(&["list"], &fs);
    assert_eq!(out.replace('\\', "/"), "./main.js\n");
}

#[test]
fn strict_mode_fails_on_bad_pattern() {
    let oversized = "/*".repeat(50_000) + "/x";
    let fs = MockTreeBuilder::new().ignore_file(&[oversized.as_str()]).build();

    let args = CliArgs::try_parse_from(["pkgignore", "print", "--strict"]).unwrap();
    let err = pkgignore::run_with(&args, &fs, Vec::new()).unwrap_err();
    assert!(err.to_string().contains("Invalid ignore pattern"));
}

#[test]
fn check_accepts_dot_slash_paths() {
    let fs = MockTreeBuilder::new().ignore_file(&["/*.txt"]).build();

    let out = run(&["check", "./a.txt", "./src/a.txt", "./.git"], &fs);
    assert_eq!(
        out,
        "ignored\t./a.txt\nincluded\t./src/a.txt\nignored\t./.git\n"
    );
}

#[test]
fn size_limit_flag_reaches_the_compiler() {
    let wide = "/*".repeat(200) + "/x";
    let fs = MockTreeBuilder::new().ignore_file(&[wide.as_str()]).build();

    let ok = CliArgs::try_parse_from(["pkgignore", "print", "--strict"]).unwrap();
    assert!(run_with(&ok, &fs, Vec::new()).is_ok());

    let tight =
        CliArgs::try_parse_from(["pkgignore", "print", "--strict", "--size-limit", "1024"])
            .unwrap();
    let err = run_with(&tight, &fs, Vec::new()).unwrap_err();
    assert!(err.to_string().contains("Invalid ignore pattern"));
}
