//! Dice: six dice with held flags, rolled through an injectable source.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::domain::rules::NUMBER_OF_DICE;
use crate::errors::domain::DomainError;

/// Source of die faces.
///
/// Implementations must return values in `1..=6`. The engine never shares a
/// roller across threads, but `Send` lets a host move a whole game.
pub trait DiceRoller: Send {
    fn roll_die(&mut self) -> u8;
}

/// Pseudorandom roller backed by ChaCha8, reproducible from a seed.
pub struct SeededRoller {
    rng: ChaCha8Rng,
}

impl SeededRoller {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seeded from system entropy.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl DiceRoller for SeededRoller {
    fn roll_die(&mut self) -> u8 {
        self.rng.random_range(1..=6)
    }
}

/// Replays a fixed sequence of faces, cycling when exhausted.
///
/// Used by tests and by hosts replaying a recorded game.
#[derive(Debug, Clone)]
pub struct ScriptedRoller {
    script: Vec<u8>,
    queue: VecDeque<u8>,
}

impl ScriptedRoller {
    /// # Panics
    /// Panics if `faces` is empty or contains a value outside `1..=6`.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        let script: Vec<u8> = faces.into_iter().collect();
        assert!(!script.is_empty(), "scripted roller needs at least one face");
        assert!(
            script.iter().all(|f| (1..=6).contains(f)),
            "scripted faces must be in 1..=6: {script:?}"
        );
        Self {
            queue: script.iter().copied().collect(),
            script,
        }
    }
}

impl DiceRoller for ScriptedRoller {
    fn roll_die(&mut self) -> u8 {
        if self.queue.is_empty() {
            self.queue.extend(self.script.iter().copied());
        }
        // Refilled above from a non-empty script.
        self.queue.pop_front().unwrap_or(1)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    /// 0 while unrolled, otherwise 1..=6.
    pub value: u8,
    pub held: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceSet {
    dice: [Die; NUMBER_OF_DICE],
}

impl DiceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll every die that is not held. Held dice keep their value.
    pub fn roll_all(&mut self, roller: &mut dyn DiceRoller) -> [u8; NUMBER_OF_DICE] {
        for die in self.dice.iter_mut().filter(|d| !d.held) {
            die.value = roller.roll_die();
        }
        self.values()
    }

    pub fn toggle_hold(&mut self, index: usize) -> Result<bool, DomainError> {
        let die = self.dice.get_mut(index).ok_or_else(|| {
            DomainError::out_of_range(format!("die index {index} not in 0..{NUMBER_OF_DICE}"))
        })?;
        die.held = !die.held;
        Ok(die.held)
    }

    /// Clear every held flag and return all dice to the unrolled state.
    pub fn reset(&mut self) {
        self.dice = [Die::default(); NUMBER_OF_DICE];
    }

    pub fn values(&self) -> [u8; NUMBER_OF_DICE] {
        self.dice.map(|d| d.value)
    }

    pub fn dice(&self) -> &[Die; NUMBER_OF_DICE] {
        &self.dice
    }

    pub fn is_rolled(&self) -> bool {
        self.dice.iter().all(|d| d.value != 0)
    }
}
