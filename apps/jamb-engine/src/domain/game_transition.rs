//! Typed events emitted by the turn controller.

use serde::{Deserialize, Serialize};

use crate::domain::sheet_types::{Category, CellRef};
use crate::domain::state::{GameState, PlayerId};

/// Lifecycle facts compared before and after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnView {
    pub active: PlayerId,
    pub hands_remaining: u8,
    pub complete: bool,
    /// Pending checkout row per player.
    pub checkouts: Vec<Option<Category>>,
}

impl TurnView {
    pub fn of(state: &GameState) -> Self {
        Self {
            active: state.active,
            hands_remaining: state.hands_remaining,
            complete: state.is_complete(),
            checkouts: state.sheets.iter().map(|s| s.checkout()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameTransition {
    /// Explicit: a game started with these players.
    GameStarted { players: Vec<String> },

    /// Explicit: the active player rolled.
    DiceRolled {
        player_id: PlayerId,
        roll: u8,
        dice: [u8; 6],
    },

    /// Explicit: the active player announced a cell.
    Announced { player_id: PlayerId, cell: CellRef },

    /// Explicit: a value was written to a sheet.
    CellWritten {
        player_id: PlayerId,
        cell: CellRef,
        value: u16,
    },

    /// Edge-triggered: a player received a checkout obligation.
    CheckoutDesignated { player_id: PlayerId, row: Category },

    /// Edge-triggered: the turn became a specific player.
    TurnBecame { player_id: PlayerId },

    /// Edge-triggered: every player finished a hand.
    HandCompleted { hands_remaining: u8 },

    /// Edge-triggered: the final hand was written.
    GameEnded { totals: Vec<i32> },
}

/// Derive edge-triggered transitions from before/after lifecycle views.
///
/// `totals` is attached to `GameEnded` and only read on that edge.
pub fn derive_turn_transitions(
    before: &TurnView,
    after: &TurnView,
    totals: impl FnOnce() -> Vec<i32>,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. New checkout obligations
    for (player_id, (was, now)) in before.checkouts.iter().zip(&after.checkouts).enumerate() {
        if let (None, Some(row)) = (was, now) {
            transitions.push(GameTransition::CheckoutDesignated {
                player_id,
                row: *row,
            });
        }
    }

    // 2. Hand boundary
    if after.hands_remaining < before.hands_remaining {
        transitions.push(GameTransition::HandCompleted {
            hands_remaining: after.hands_remaining,
        });
    }

    // 3. Game end (!complete -> complete), otherwise the turn change
    if !before.complete && after.complete {
        transitions.push(GameTransition::GameEnded { totals: totals() });
    } else if !after.complete
        && (before.active != after.active || before.hands_remaining != after.hands_remaining)
    {
        transitions.push(GameTransition::TurnBecame {
            player_id: after.active,
        });
    }

    transitions
}
