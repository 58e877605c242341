//! In-memory game runner for strategy evaluation.
//!
//! Drives a [`Game`] to completion, asking each seat's [`Strategy`] for its
//! decisions, and tallies the transitions the engine publishes.

use std::sync::{Arc, Mutex};

use jamb_engine::domain::Standing;
use jamb_engine::{Column, DomainError, Game, GameConfig, GameTransition, TurnPhase};
use tracing::debug;

use crate::strategy::{score_for, Strategy, StrategyError};

/// Errors that end a simulated game early.
#[derive(Debug)]
pub enum SimError {
    Engine(DomainError),
    Strategy(StrategyError),
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::Engine(e) => write!(f, "engine rejected a move: {e}"),
            SimError::Strategy(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SimError {}

impl From<DomainError> for SimError {
    fn from(e: DomainError) -> Self {
        SimError::Engine(e)
    }
}

impl From<StrategyError> for SimError {
    fn from(e: StrategyError) -> Self {
        SimError::Strategy(e)
    }
}

/// Event counts gathered from the published transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    pub rolls: u32,
    pub announcements: u32,
    pub checkouts_designated: u32,
    pub cells_written: u32,
    pub hands_completed: u32,
}

impl Tally {
    fn record(&mut self, transition: &GameTransition) {
        match transition {
            GameTransition::DiceRolled { .. } => self.rolls += 1,
            GameTransition::Announced { .. } => self.announcements += 1,
            GameTransition::CheckoutDesignated { .. } => self.checkouts_designated += 1,
            GameTransition::CellWritten { .. } => self.cells_written += 1,
            GameTransition::HandCompleted { .. } => self.hands_completed += 1,
            GameTransition::GameStarted { .. }
            | GameTransition::TurnBecame { .. }
            | GameTransition::GameEnded { .. } => {}
        }
    }
}

/// Result of simulating a complete game.
#[derive(Debug, Clone)]
pub struct GameResult {
    /// Grand total per seat.
    pub final_totals: Vec<i32>,
    /// Column totals per seat.
    pub column_totals: Vec<[i32; Column::COUNT]>,
    pub standings: Vec<Standing>,
    pub tally: Tally,
}

pub struct Simulator {
    config: GameConfig,
    players: usize,
}

impl Simulator {
    pub fn new(players: usize, config: GameConfig) -> Self {
        Self { config, players }
    }

    /// Play one game. `strategies[seat]` decides for that seat.
    pub fn simulate_game(&self, strategies: &[Box<dyn Strategy>]) -> Result<GameResult, SimError> {
        let names: Vec<String> = strategies
            .iter()
            .take(self.players)
            .enumerate()
            .map(|(seat, s)| format!("{} {}", s.name(), seat + 1))
            .collect();
        let mut game = Game::start(&names, self.config.clone())?;

        let tally = Arc::new(Mutex::new(Tally::default()));
        let sink = Arc::clone(&tally);
        game.subscribe(move |t| {
            if let Ok(mut tally) = sink.lock() {
                tally.record(t);
            }
        });

        while !game.is_complete() {
            let seat = game.active_player();
            play_turn(&mut game, strategies[seat].as_ref())?;
        }

        let sheets = (0..names.len())
            .map(|p| game.sheet(p))
            .collect::<Result<Vec<_>, _>>()?;
        let tally = tally.lock().map(|t| t.clone()).unwrap_or_default();

        Ok(GameResult {
            final_totals: sheets.iter().map(|s| s.grand_total()).collect(),
            column_totals: sheets.iter().map(|s| s.column_totals()).collect(),
            standings: game.standings(),
            tally,
        })
    }
}

/// Run one turn: first roll, optional announcement, rerolls, write.
fn play_turn(game: &mut Game, strategy: &dyn Strategy) -> Result<(), SimError> {
    game.roll_dice()?;

    if game.phase() == TurnPhase::AwaitingAnnouncementChoice {
        if let Some(cell) = strategy.announcement(game)? {
            game.announce(cell)?;
        }
    }

    while game.remaining_rolls() > 0 && strategy.keep_rolling(game)? {
        let wanted = strategy.holds(game)?;
        for (index, want) in wanted.into_iter().enumerate() {
            if game.dice().dice()[index].held != want {
                game.toggle_hold(index)?;
            }
        }
        game.roll_dice()?;
    }

    let cell = match game.selection() {
        Some(cell) => cell,
        None => strategy.pick_cell(game)?,
    };
    if !game.choose_cell(cell)? {
        return Err(StrategyError::NoOptions(format!("{cell} is not writable")).into());
    }
    let value = score_for(game, cell);
    let next = game.write_value(value)?;
    debug!(%cell, value, next, "Turn played");
    Ok(())
}
