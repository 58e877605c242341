use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::domain::columns::WriteGate;
use crate::domain::dice::DiceSet;
use crate::domain::rules::roll_budget;
use crate::domain::scoring::ScoreSnapshot;
use crate::domain::sheet::PlayerSheet;
use crate::domain::sheet_types::CellRef;
use crate::errors::domain::DomainError;

pub type PlayerId = usize; // 0..players

/// Turn progression, derived from the game state.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// More rolls available; `rolls` already taken this turn.
    AwaitingRoll { rolls: u8 },
    /// First roll taken and the player may still announce.
    AwaitingAnnouncementChoice,
    /// Roll budget spent; the player must write.
    RolledAwaitingWrite,
    /// Final hand written; nobody acts.
    TurnComplete,
}

/// Entire game container, sufficient for pure domain operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    /// One sheet per player, in seat order.
    pub sheets: Vec<PlayerSheet>,
    /// Player whose sheet is editable.
    pub active: PlayerId,
    pub dice: DiceSet,
    /// Rolls taken in the current turn.
    pub rolls: u8,
    /// Hands left including the current one; 0 once the game is complete.
    pub hands_remaining: u8,
    /// Cell announced by the active player this turn.
    pub announced: Option<CellRef>,
    /// Cell the active player picked for the next write.
    pub selection: Option<CellRef>,
    /// Scores for the latest roll of this turn.
    pub snapshot: Option<ScoreSnapshot>,
}

impl GameState {
    pub fn player_count(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_complete(&self) -> bool {
        self.hands_remaining == 0
    }

    pub fn roll_budget(&self) -> u8 {
        roll_budget(
            self.config.rolls_per_turn,
            self.config.final_hand_bonus_rolls,
            self.hands_remaining,
        )
    }

    pub fn remaining_rolls(&self) -> u8 {
        if self.is_complete() {
            return 0;
        }
        self.roll_budget().saturating_sub(self.rolls)
    }

    /// 1-based number of the hand being played.
    pub fn hand_no(&self) -> u8 {
        self.config.hands.saturating_sub(self.hands_remaining) + 1
    }

    pub fn active_sheet(&self) -> &PlayerSheet {
        &self.sheets[self.active]
    }

    pub fn sheet(&self, player: PlayerId) -> Result<&PlayerSheet, DomainError> {
        self.sheets.get(player).ok_or_else(|| {
            DomainError::out_of_range(format!(
                "player {player} not in 0..{}",
                self.player_count()
            ))
        })
    }

    /// The announcement may be made right after the first roll, before the second.
    pub fn announcement_open(&self) -> bool {
        self.rolls <= 1
    }

    pub fn can_announce(&self) -> bool {
        !self.is_complete()
            && self.rolls == 1
            && self.announced.is_none()
            && self.active_sheet().checkout().is_none()
    }

    pub fn write_gate(&self) -> WriteGate {
        match self.announced {
            Some(cell) => WriteGate::Announced(cell),
            None => WriteGate::Open {
                announcement_open: self.announcement_open(),
            },
        }
    }

    pub fn writable_cells(&self) -> Vec<CellRef> {
        if self.is_complete() {
            return Vec::new();
        }
        self.active_sheet().writable_cells(self.write_gate())
    }

    pub fn phase(&self) -> TurnPhase {
        if self.is_complete() {
            TurnPhase::TurnComplete
        } else if self.can_announce() {
            TurnPhase::AwaitingAnnouncementChoice
        } else if self.rolls < self.roll_budget() {
            TurnPhase::AwaitingRoll { rolls: self.rolls }
        } else {
            TurnPhase::RolledAwaitingWrite
        }
    }

    /// Seat after `player`, wrapping to 0.
    pub fn next_player(&self, player: PlayerId) -> PlayerId {
        (player + 1) % self.player_count()
    }
}
