//! Property-based tests for path decomposition.

use super::{ancestors, parent, AbsoluteForm, PathStyle};
use proptest::prelude::*;

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_. -]{1,20}"
}

fn posix_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(path_component_strategy(), 0..8)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn drive_path_strategy() -> impl Strategy<Value = String> {
    (
        "[A-Z]",
        prop::collection::vec(path_component_strategy(), 0..8),
    )
        .prop_map(|(drive, parts)| format!("{drive}:\\{}", parts.join("\\")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        max_shrink_iters: 5000,
        .. ProptestConfig::default()
    })]

    // Every generated absolute path is accepted by the auto style
    #[test]
    fn absolute_paths_validate(path in prop_oneof![posix_path_strategy(), drive_path_strategy()]) {
        prop_assert!(PathStyle::Auto.validate(&path).is_ok());
    }

    // The ancestor chain of a POSIX path ends at "/" and contains it once
    #[test]
    fn posix_ancestors_end_at_root(path in posix_path_strategy()) {
        let chain: Vec<_> = ancestors(&path).collect();
        prop_assert_eq!(chain.last().copied(), Some("/"));
        prop_assert_eq!(chain.iter().filter(|p| **p == "/").count(), 1);
    }

    // Each ancestor is a strict prefix of the one before it
    #[test]
    fn ancestors_shrink(path in prop_oneof![posix_path_strategy(), drive_path_strategy()]) {
        let chain: Vec<_> = ancestors(&path).collect();
        for pair in chain.windows(2) {
            prop_assert!(pair[0].starts_with(pair[1]));
            prop_assert!(pair[1].len() < pair[0].len());
        }
    }

    // Chain length is bounded by the number of components plus the root
    #[test]
    fn ancestors_bounded_by_depth(parts in prop::collection::vec(path_component_strategy(), 0..8)) {
        let path = format!("/{}", parts.join("/"));
        prop_assert!(ancestors(&path).count() <= parts.len() + 1);
    }

    // Parents stay in the same absolute form
    #[test]
    fn parent_preserves_form(path in drive_path_strategy()) {
        prop_assert_eq!(AbsoluteForm::of(parent(&path)), Some(AbsoluteForm::Drive));
    }

    // Arbitrary strings never make the ancestor walk diverge
    #[test]
    fn ancestors_terminate_for_any_input(path in ".{0,40}") {
        prop_assert!(ancestors(&path).count() <= path.len() + 1);
    }
}
