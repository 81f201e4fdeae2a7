use proptest::prelude::*;
use proptest::sample::select;

use pkgignore::ignore::PatternSet;

// Segments are drawn from a small alphabet so generated patterns and paths
// actually collide.
fn segment() -> impl Strategy<Value = String> {
    select(vec!["a", "b", "ab", "x.txt", "y.log"]).prop_map(|s| s.to_string())
}

fn pattern_segment() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => segment(),
        1 => Just("*".to_string()),
        1 => Just("**".to_string()),
        1 => Just("*.txt".to_string()),
    ]
}

fn pattern() -> impl Strategy<Value = String> {
    proptest::collection::vec(pattern_segment(), 1..4).prop_map(|segs| format!("/{}", segs.join("/")))
}

fn path() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 0..4).prop_map(|segs| format!("/{}", segs.join("/")))
}

fn compile(patterns: &[String]) -> pkgignore::IgnoreMatcher {
    let mut set = PatternSet::new();
    for p in patterns {
        set.add_pattern(p);
    }
    set.compile()
}

proptest! {
    #[test]
    fn insertion_order_does_not_change_answers(
        (patterns, shuffled) in proptest::collection::vec(pattern(), 0..6)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
        paths in proptest::collection::vec(path(), 1..10),
    ) {
        let a = compile(&patterns);
        let b = compile(&shuffled);
        for p in &paths {
            prop_assert_eq!(a.is_ignored(p), b.is_ignored(p), "path {}", p);
        }
    }

    #[test]
    fn recompiling_gives_identical_answers(
        patterns in proptest::collection::vec(pattern(), 0..6),
        paths in proptest::collection::vec(path(), 1..10),
    ) {
        let mut set = PatternSet::new();
        for p in &patterns {
            set.add_pattern(p);
        }
        let first = set.compile();
        let second = set.compile();
        for p in &paths {
            prop_assert_eq!(first.is_ignored(p), second.is_ignored(p));
        }
    }

    #[test]
    fn matching_is_an_or_over_single_patterns(
        patterns in proptest::collection::vec(pattern(), 0..6),
        p in path(),
    ) {
        let combined = compile(&patterns).is_ignored(&p);
        let any_single = patterns.iter().any(|pat| compile(std::slice::from_ref(pat)).is_ignored(&p))
            || PatternSet::new().compile().is_ignored(&p);
        prop_assert_eq!(combined, any_single);
    }

    #[test]
    fn extra_patterns_only_add_exclusions(
        patterns in proptest::collection::vec(pattern(), 0..6),
        extra in pattern(),
        p in path(),
    ) {
        let before = compile(&patterns).is_ignored(&p);
        let mut more = patterns.clone();
        more.push(extra);
        let after = compile(&more).is_ignored(&p);
        prop_assert!(!before || after);
    }

    #[test]
    fn inner_star_never_crosses_separators(
        prefix in segment(),
        p in path(),
    ) {
        let pattern = format!("/{prefix}/*.txt");
        let ignored = compile(&[pattern]).is_ignored(&p);
        let depth = p.matches('/').count();
        if ignored {
            prop_assert_eq!(depth, 2);
        }
    }
}
