use std::ops::RangeInclusive;

pub const NUMBER_OF_DICE: usize = 6;
pub const MAX_PLAYERS: usize = 4;
pub const PLAYER_COUNT_RANGE: RangeInclusive<usize> = 1..=MAX_PLAYERS;

/// Upper-section subtotal that earns the bonus.
pub const UPPER_BONUS_THRESHOLD: i32 = 60;
pub const UPPER_BONUS: i32 = 30;

/// Cells outside the Checkout column; an upper bound on hands a game can last
/// without stranding a player with nothing to write.
pub const MAX_HANDS: u8 = 65;

/// Roll budget for a turn.
///
/// The final hand of the game (exactly one hand remaining) grants
/// `bonus` extra rolls on top of the regular budget.
pub fn roll_budget(rolls_per_turn: u8, bonus: u8, hands_remaining: u8) -> u8 {
    if hands_remaining == 1 {
        rolls_per_turn.saturating_add(bonus)
    } else {
        rolls_per_turn
    }
}

pub fn valid_player_count(count: usize) -> bool {
    PLAYER_COUNT_RANGE.contains(&count)
}
