//! `Game`: the facade a presentation layer drives.
//!
//! Wraps a [`GameState`], the dice source and the event subscribers. Every
//! operation delegates to [`crate::domain::turn`] and then publishes the
//! resulting [`GameTransition`]s.

use crate::config::GameConfig;
use crate::domain::dice::{DiceRoller, DiceSet, SeededRoller};
use crate::domain::game_transition::{derive_turn_transitions, GameTransition, TurnView};
use crate::domain::scoring::ScoreSnapshot;
use crate::domain::seed_derivation::derive_turn_seed;
use crate::domain::sheet::PlayerSheet;
use crate::domain::sheet_types::CellRef;
use crate::domain::state::{GameState, PlayerId, TurnPhase};
use crate::domain::turn::{self, Standing};
use crate::errors::domain::DomainError;

/// Callback receiving every transition in order.
pub type Subscriber = Box<dyn FnMut(&GameTransition) + Send>;

pub struct Game {
    state: GameState,
    roller: Box<dyn DiceRoller>,
    /// Game seed; the roller is re-derived from it at every turn.
    seed: Option<u64>,
    subscribers: Vec<Subscriber>,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("seed", &self.seed)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Start a game. Dice come from `config.seed` when set, otherwise from
    /// system entropy.
    pub fn start<S: AsRef<str>>(names: &[S], config: GameConfig) -> Result<Self, DomainError> {
        let seed = config.seed;
        let state = turn::start_game(names, config)?;
        let roller: Box<dyn DiceRoller> = match seed {
            Some(seed) => Box::new(SeededRoller::new(derive_turn_seed(seed, 1, 0))),
            None => Box::new(SeededRoller::from_entropy()),
        };
        Ok(Self {
            state,
            roller,
            seed,
            subscribers: Vec::new(),
        })
    }

    /// Start a game with an injected dice source. `config.seed` is ignored.
    pub fn with_roller<S, R>(
        names: &[S],
        config: GameConfig,
        roller: R,
    ) -> Result<Self, DomainError>
    where
        S: AsRef<str>,
        R: DiceRoller + 'static,
    {
        let state = turn::start_game(names, config)?;
        Ok(Self {
            state,
            roller: Box::new(roller),
            seed: None,
            subscribers: Vec::new(),
        })
    }

    /// Register a callback. It immediately receives `GameStarted`, then every
    /// later transition.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&GameTransition) + Send + 'static,
    {
        let mut callback: Subscriber = Box::new(callback);
        callback(&GameTransition::GameStarted {
            players: self.state.sheets.iter().map(|s| s.name.clone()).collect(),
        });
        self.subscribers.push(callback);
    }

    fn publish(&mut self, transitions: &[GameTransition]) {
        for subscriber in &mut self.subscribers {
            for transition in transitions {
                subscriber(transition);
            }
        }
    }

    pub fn roll_dice(&mut self) -> Result<ScoreSnapshot, DomainError> {
        let result = turn::roll_dice(&mut self.state, self.roller.as_mut())?;
        self.publish(&[GameTransition::DiceRolled {
            player_id: self.state.active,
            roll: result.roll_no,
            dice: result.dice,
        }]);
        Ok(result.snapshot)
    }

    pub fn toggle_hold(&mut self, die_index: usize) -> Result<bool, DomainError> {
        turn::toggle_hold(&mut self.state, die_index)
    }

    /// Select the cell for the next write; `false` when it is not writable.
    pub fn choose_cell(&mut self, cell: CellRef) -> Result<bool, DomainError> {
        turn::choose_cell(&mut self.state, cell)
    }

    pub fn announce(&mut self, cell: CellRef) -> Result<(), DomainError> {
        let before = TurnView::of(&self.state);
        let result = turn::announce(&mut self.state, cell)?;

        let mut transitions = vec![GameTransition::Announced {
            player_id: self.state.active,
            cell: result.cell,
        }];
        transitions.extend(self.derive_since(&before));
        self.publish(&transitions);
        Ok(())
    }

    /// Write `value` into the selected cell and pass the turn. Returns the
    /// index of the player who acts next.
    pub fn write_value(&mut self, value: u16) -> Result<PlayerId, DomainError> {
        let before = TurnView::of(&self.state);
        let result = turn::write_value(&mut self.state, value)?;

        if let Some(seed) = self.seed.filter(|_| !result.game_over) {
            self.roller = Box::new(SeededRoller::new(derive_turn_seed(
                seed,
                self.state.hand_no(),
                self.state.active,
            )));
        }

        let mut transitions = vec![GameTransition::CellWritten {
            player_id: result.player,
            cell: result.cell,
            value: result.value,
        }];
        transitions.extend(self.derive_since(&before));
        self.publish(&transitions);
        Ok(result.next_player)
    }

    fn derive_since(&self, before: &TurnView) -> Vec<GameTransition> {
        let after = TurnView::of(&self.state);
        derive_turn_transitions(before, &after, || {
            self.state.sheets.iter().map(PlayerSheet::grand_total).collect()
        })
    }

    pub fn sheet(&self, player: PlayerId) -> Result<&PlayerSheet, DomainError> {
        self.state.sheet(player)
    }

    pub fn active_player(&self) -> PlayerId {
        self.state.active
    }

    pub fn remaining_rolls(&self) -> u8 {
        self.state.remaining_rolls()
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn writable_cells(&self) -> Vec<CellRef> {
        self.state.writable_cells()
    }

    pub fn phase(&self) -> TurnPhase {
        self.state.phase()
    }

    /// Scores of the latest roll this turn.
    pub fn snapshot(&self) -> Option<ScoreSnapshot> {
        self.state.snapshot
    }

    pub fn selection(&self) -> Option<CellRef> {
        self.state.selection
    }

    pub fn dice(&self) -> &DiceSet {
        &self.state.dice
    }

    pub fn standings(&self) -> Vec<Standing> {
        turn::standings(&self.state)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}
