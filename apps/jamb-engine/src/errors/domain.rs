//! Domain-level error type returned by every engine operation.
//!
//! This error type is UI-agnostic. Hosts map it to messages through
//! [`DomainError::code`] and the stable [`ErrorCode`] strings.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use super::error_code::ErrorCode;

/// Validation kinds: every way an operation can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Target cell is locked, already filled, or outside the current write gate.
    IllegalAssignment,
    /// `roll` called after the turn's roll budget was spent.
    RollBudgetExceeded,
    /// `write` called without a selected cell.
    NoSelection,
    /// Game started with fewer than 1 or more than 4 players.
    InvalidPlayerCount,
    /// Die, column, row, or player index outside its range.
    IndexOutOfRange,
    /// Announcement attempted outside the window after the first roll.
    AnnouncementClosed,
    /// Announcement attempted while a checkout obligation is pending.
    CheckoutPending,
    /// Written value differs from the score computed for the selected row.
    ScoreMismatch,
    /// Dice interaction before the first roll of the turn.
    DiceNotRolled,
    /// Mutation attempted after the final hand.
    GameOver,
    /// `GameConfig` rejected at game start.
    InvalidConfig,
}

impl ValidationKind {
    pub const fn code(self) -> ErrorCode {
        match self {
            Self::IllegalAssignment => ErrorCode::IllegalAssignment,
            Self::RollBudgetExceeded => ErrorCode::RollBudgetExceeded,
            Self::NoSelection => ErrorCode::NoSelection,
            Self::InvalidPlayerCount => ErrorCode::InvalidPlayerCount,
            Self::IndexOutOfRange => ErrorCode::IndexOutOfRange,
            Self::AnnouncementClosed => ErrorCode::AnnouncementClosed,
            Self::CheckoutPending => ErrorCode::CheckoutPending,
            Self::ScoreMismatch => ErrorCode::ScoreMismatch,
            Self::DiceNotRolled => ErrorCode::DiceNotRolled,
            Self::GameOver => ErrorCode::GameOver,
            Self::InvalidConfig => ErrorCode::ConfigError,
        }
    }
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Rule violation by the caller; state is unchanged.
    Validation(ValidationKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn illegal_assignment(detail: impl Into<String>) -> Self {
        Self::validation(ValidationKind::IllegalAssignment, detail)
    }

    pub fn out_of_range(detail: impl Into<String>) -> Self {
        Self::validation(ValidationKind::IndexOutOfRange, detail)
    }

    pub fn kind(&self) -> ValidationKind {
        match self {
            DomainError::Validation(kind, _) => *kind,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind().code()
    }

    pub fn is(&self, kind: ValidationKind) -> bool {
        self.kind() == kind
    }
}
