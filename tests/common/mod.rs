//! Utility helpers shared across integration tests.

/// Assert that `fragment` contains each needle, in the given order.
///
/// Used to check cross-stage output without pinning the full fragment.
pub fn assert_contains_in_order(fragment: &str, needles: &[&str]) {
    let mut offset = 0;
    for needle in needles {
        match fragment[offset..].find(needle) {
            Some(pos) => offset += pos + needle.len(),
            None => panic!("expected {needle:?} after offset {offset} in {fragment:?}"),
        }
    }
}
