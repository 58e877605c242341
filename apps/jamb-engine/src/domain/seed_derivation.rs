//! RNG seed derivation utilities for deterministic dice.
//!
//! A game seed fans out into one seed per turn so that any single turn can be
//! replayed without re-rolling everything before it.

/// Derive the dice seed for one turn.
///
/// # Arguments
///
/// * `game_seed` - Base seed from `GameConfig::seed`
/// * `hand_no` - 1-based hand number
/// * `player` - Seat index (0-3)
pub fn derive_turn_seed(game_seed: u64, hand_no: u8, player: usize) -> u64 {
    game_seed
        .wrapping_add(u64::from(hand_no).wrapping_mul(1_000_000))
        .wrapping_add((player as u64).wrapping_mul(1000))
        .wrapping_add(1)
}

/// Derive the base seed for the n-th game of a batch run.
pub fn derive_game_seed(base_seed: u64, game_index: u64) -> u64 {
    base_seed.wrapping_add(game_index.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}
