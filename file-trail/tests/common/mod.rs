//! Common test utilities for integration tests.

use file_trail::Trail;

/// Directory used by the photo-library walkthroughs.
#[allow(dead_code)]
pub const PICTURES: &str = "/var/home/jdoe/Pictures/2022";

/// Builds a trail by visiting `paths` in order.
///
/// Panics if any path is rejected; tests should only pass absolute paths.
#[allow(dead_code)]
pub fn trail_from(paths: &[&str]) -> Trail {
    let mut trail = Trail::new();
    trail
        .visit_all(paths)
        .expect("test paths should be absolute");
    trail
}

/// Asserts that two trails give the same answers for every path either of
/// them knows about.
#[allow(dead_code)]
pub fn assert_equivalent(a: &Trail, b: &Trail) {
    for path in a.visit_log().iter().chain(b.visit_log()) {
        for ancestor in file_trail::path::ancestors(path) {
            assert_eq!(
                a.has_visited(ancestor),
                b.has_visited(ancestor),
                "has_visited({ancestor}) differs"
            );
            assert_eq!(
                a.has_completed(ancestor),
                b.has_completed(ancestor),
                "has_completed({ancestor}) differs"
            );
        }
    }
}
