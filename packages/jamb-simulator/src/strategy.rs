//! Automated players for the simulator.
//!
//! A [`Strategy`] sees the whole [`Game`] and answers the decisions a human
//! would make during a turn. The simulator enforces the turn order and only
//! asks questions whose answers the engine will accept.

use std::fmt;
use std::sync::Mutex;

use jamb_engine::domain::rules::NUMBER_OF_DICE;
use jamb_engine::{CellRef, Column, Game};
use rand::prelude::*;

/// Errors that can occur while a strategy decides.
#[derive(Debug)]
pub enum StrategyError {
    /// Strategy encountered an internal error
    Internal(String),
    /// No legal option was offered
    NoOptions(String),
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyError::Internal(msg) => write!(f, "strategy internal error: {msg}"),
            StrategyError::NoOptions(msg) => write!(f, "strategy has no options: {msg}"),
        }
    }
}

impl std::error::Error for StrategyError {}

pub trait Strategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Announce a cell right after the first roll, or `None` to play on.
    fn announcement(&self, game: &Game) -> Result<Option<CellRef>, StrategyError>;

    /// Roll again? Only asked while rolls remain.
    fn keep_rolling(&self, game: &Game) -> Result<bool, StrategyError>;

    /// Desired held flag per die before the next roll.
    fn holds(&self, game: &Game) -> Result<[bool; NUMBER_OF_DICE], StrategyError>;

    /// Cell to write; must be one of `game.writable_cells()`.
    fn pick_cell(&self, game: &Game) -> Result<CellRef, StrategyError>;
}

/// Score the current dice would earn in `cell`.
pub fn score_for(game: &Game, cell: CellRef) -> u16 {
    game.snapshot().map_or(0, |s| s.score(cell.category))
}

fn best_cell(game: &Game, cells: &[CellRef]) -> Option<(CellRef, u16)> {
    cells
        .iter()
        .map(|&cell| (cell, score_for(game, cell)))
        // max_by_key keeps the last maximum; reverse so the earliest cell wins ties
        .rev()
        .max_by_key(|&(_, score)| score)
}

/// Takes the highest-scoring cell and stops rolling once it reaches
/// `stop_at`. Announces when the Announcement column already pays that much.
pub struct Greedy {
    stop_at: u16,
}

impl Greedy {
    pub const NAME: &'static str = "Greedy";

    pub fn new(stop_at: u16) -> Self {
        Self { stop_at }
    }
}

impl Default for Greedy {
    fn default() -> Self {
        Self::new(40)
    }
}

impl Strategy for Greedy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn announcement(&self, game: &Game) -> Result<Option<CellRef>, StrategyError> {
        let cells: Vec<CellRef> = game
            .writable_cells()
            .into_iter()
            .filter(|c| c.column == Column::Announcement)
            .collect();
        Ok(best_cell(game, &cells)
            .filter(|&(_, score)| score >= self.stop_at)
            .map(|(cell, _)| cell))
    }

    fn keep_rolling(&self, game: &Game) -> Result<bool, StrategyError> {
        let cells = game.writable_cells();
        Ok(best_cell(game, &cells).is_none_or(|(_, score)| score < self.stop_at))
    }

    /// Hold every die showing the most common face, preferring high faces.
    fn holds(&self, game: &Game) -> Result<[bool; NUMBER_OF_DICE], StrategyError> {
        let values = game.dice().values();
        let mut counts = [0usize; 7];
        for &v in &values {
            counts[usize::from(v)] += 1;
        }
        let keep = (1..=6u8)
            .max_by_key(|&face| (counts[usize::from(face)], face))
            .ok_or_else(|| StrategyError::Internal("no faces".into()))?;
        Ok(values.map(|v| v == keep))
    }

    fn pick_cell(&self, game: &Game) -> Result<CellRef, StrategyError> {
        best_cell(game, &game.writable_cells())
            .map(|(cell, _)| cell)
            .ok_or_else(|| StrategyError::NoOptions("no writable cell".into()))
    }
}

/// Chooses uniformly among legal options.
pub struct RandomStrategy {
    rng: Mutex<StdRng>,
}

impl RandomStrategy {
    pub const NAME: &'static str = "Random";

    /// `None` seeds from system entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> Result<T, StrategyError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| StrategyError::Internal(format!("RNG lock poisoned: {e}")))?;
        Ok(f(&mut rng))
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn announcement(&self, game: &Game) -> Result<Option<CellRef>, StrategyError> {
        let cells = game.writable_cells();
        self.with_rng(|rng| {
            if rng.random_bool(0.2) {
                cells.choose(rng).copied()
            } else {
                None
            }
        })
    }

    fn keep_rolling(&self, _game: &Game) -> Result<bool, StrategyError> {
        self.with_rng(|rng| rng.random_bool(0.5))
    }

    fn holds(&self, _game: &Game) -> Result<[bool; NUMBER_OF_DICE], StrategyError> {
        self.with_rng(|rng| std::array::from_fn(|_| rng.random_bool(0.5)))
    }

    fn pick_cell(&self, game: &Game) -> Result<CellRef, StrategyError> {
        let cells = game.writable_cells();
        self.with_rng(|rng| cells.choose(rng).copied())?
            .ok_or_else(|| StrategyError::NoOptions("no writable cell".into()))
    }
}
