//! Error codes for the Jamb engine.
//!
//! All error codes are SCREAMING_SNAKE_CASE and are stable: hosts key their
//! user-facing messages on these strings. Add new codes here; never pass
//! ad-hoc strings as error codes.

use core::fmt;

/// Centralized error codes for the Jamb engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Scoresheet
    /// Cell is not writable or already filled
    IllegalAssignment,
    /// Written value does not match the computed score
    ScoreMismatch,
    /// No cell selected before writing
    NoSelection,

    // Turn protocol
    /// Roll budget for this turn is spent
    RollBudgetExceeded,
    /// Announcement window closed
    AnnouncementClosed,
    /// Player must fill the designated checkout cell first
    CheckoutPending,
    /// Dice have not been rolled this turn
    DiceNotRolled,
    /// The final hand has been played
    GameOver,

    // Request validation
    /// Player count outside 1..=4
    InvalidPlayerCount,
    /// Die, column, row, or player index out of range
    IndexOutOfRange,

    // System
    /// Invalid configuration value
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IllegalAssignment => "ILLEGAL_ASSIGNMENT",
            Self::ScoreMismatch => "SCORE_MISMATCH",
            Self::NoSelection => "NO_SELECTION",

            Self::RollBudgetExceeded => "ROLL_BUDGET_EXCEEDED",
            Self::AnnouncementClosed => "ANNOUNCEMENT_CLOSED",
            Self::CheckoutPending => "CHECKOUT_PENDING",
            Self::DiceNotRolled => "DICE_NOT_ROLLED",
            Self::GameOver => "GAME_OVER",

            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::IndexOutOfRange => "INDEX_OUT_OF_RANGE",

            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
