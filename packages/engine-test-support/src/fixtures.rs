//! Engine-agnostic fixture helpers.

use std::env;

/// Default player names in seat order, `"Player 1"` .. `"Player n"`.
///
/// # Examples
/// ```
/// use engine_test_support::fixtures::player_names;
///
/// assert_eq!(player_names(2), vec!["Player 1", "Player 2"]);
/// ```
pub fn player_names(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Player {i}")).collect()
}

/// Number of property-test cases, read from `PROPTEST_CASES`.
///
/// Falls back to `default` when the variable is unset or not a number.
/// Increase locally with: `PROPTEST_CASES=800 cargo test`.
pub fn proptest_cases(default: u32) -> u32 {
    env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
