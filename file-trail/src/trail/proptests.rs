//! Property-based tests for trail bookkeeping and replay.

use super::Trail;
use crate::format::hydrate;
use crate::path::{ancestors, parent};
use proptest::prelude::*;

// Small alphabet so generated paths share directories often
fn component_strategy() -> impl Strategy<Value = String> {
    "[a-c]{1,2}"
}

fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(component_strategy(), 1..5)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn visits_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(path_strategy(), 0..40)
}

fn replay(visits: &[String]) -> Trail {
    let mut trail = Trail::new();
    trail.visit_all(visits).unwrap();
    trail
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 2000,
        .. ProptestConfig::default()
    })]

    // Every ancestor of every visited path is visited
    #[test]
    fn ancestors_are_visited(visits in visits_strategy()) {
        let trail = replay(&visits);
        for path in &visits {
            for ancestor in ancestors(path) {
                prop_assert!(trail.has_visited(ancestor));
            }
        }
    }

    // Nothing outside the ancestor closure of the log is visited
    #[test]
    fn unrelated_paths_not_visited(visits in visits_strategy(), probe in path_strategy()) {
        let trail = replay(&visits);
        let derived = visits.iter().any(|p| ancestors(p).any(|a| a == probe));
        prop_assert_eq!(trail.has_visited(&probe), derived);
    }

    // A directory is completed exactly when some consecutive pair of visits
    // moved out of it
    #[test]
    fn completion_matches_transitions(visits in visits_strategy(), probe in path_strategy()) {
        let trail = replay(&visits);
        let left = visits
            .windows(2)
            .any(|w| parent(&w[0]) == probe && parent(&w[1]) != probe);
        prop_assert_eq!(trail.has_completed(&probe), left);
    }

    // The most recent directory is never completed by its own visit
    #[test]
    fn current_directory_only_completed_if_left_earlier(visits in visits_strategy()) {
        let trail = replay(&visits);
        if let Some(last) = visits.last() {
            let dir = parent(last);
            prop_assert_eq!(trail.last_directory(), Some(dir));
            let left_before = visits
                .windows(2)
                .any(|w| parent(&w[0]) == dir && parent(&w[1]) != dir);
            prop_assert_eq!(trail.has_completed(dir), left_before);
        }
    }

    // Hydrating serialized output reproduces the trail
    #[test]
    fn serialize_hydrate_reproduces_trail(visits in visits_strategy()) {
        let trail = replay(&visits);
        let restored = hydrate(&trail.serialize()).unwrap();
        prop_assert_eq!(restored.visit_log(), trail.visit_log());
        prop_assert_eq!(restored, trail);
    }

    // Serialized output is deterministic for a given log
    #[test]
    fn serialize_is_deterministic(visits in visits_strategy()) {
        prop_assert_eq!(replay(&visits).serialize(), replay(&visits).serialize());
    }
}
