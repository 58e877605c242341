//! Domain layer: pure game logic types and helpers.

pub mod columns;
pub mod dice;
pub mod game_transition;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod sheet;
pub mod sheet_types;
pub mod state;
pub mod turn;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_turn;

// Re-exports for ergonomics
pub use columns::{CellState, FillOrder, WriteGate};
pub use dice::{DiceRoller, DiceSet, Die, ScriptedRoller, SeededRoller};
pub use game_transition::{derive_turn_transitions, GameTransition, TurnView};
pub use scoring::{compute_scores, ScoreSnapshot};
pub use seed_derivation::{derive_game_seed, derive_turn_seed};
pub use sheet::{Cell, PlayerSheet};
pub use sheet_types::{Category, CellRef, Column};
pub use state::{GameState, PlayerId, TurnPhase};
pub use turn::{AnnounceResult, RollResult, Standing, WriteResult};
