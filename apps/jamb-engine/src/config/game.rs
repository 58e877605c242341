//! Game configuration: length of the game and the per-turn roll budget.
//!
//! Values come from defaults, a JSON document supplied by the host, or the
//! `JAMB_*` environment variables.

use std::env;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::domain::rules::MAX_HANDS;
use crate::errors::{DomainError, ErrorCode, ValidationKind};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {detail}")]
    Invalid { name: &'static str, detail: String },
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::ConfigError
    }
}

impl From<ConfigError> for DomainError {
    fn from(err: ConfigError) -> Self {
        DomainError::validation(ValidationKind::InvalidConfig, err.to_string())
    }
}

/// Tunable game parameters.
///
/// # Example JSON Config
///
/// ```json
/// {"hands": 13, "seed": 12345}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of hands (full player rotations) before the game ends.
    #[serde(default = "default_hands")]
    pub hands: u8,

    /// Rolls allowed in a regular turn.
    #[serde(default = "default_rolls_per_turn")]
    pub rolls_per_turn: u8,

    /// Extra rolls granted on the final hand.
    #[serde(default = "default_final_hand_bonus_rolls")]
    pub final_hand_bonus_rolls: u8,

    /// Dice seed. `None` draws one from system entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_hands() -> u8 {
    5
}

fn default_rolls_per_turn() -> u8 {
    3
}

fn default_final_hand_bonus_rolls() -> u8 {
    2
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hands: default_hands(),
            rolls_per_turn: default_rolls_per_turn(),
            final_hand_bonus_rolls: default_final_hand_bonus_rolls(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load from `JAMB_HANDS`, `JAMB_ROLLS_PER_TURN`,
    /// `JAMB_FINAL_HAND_BONUS_ROLLS` and `JAMB_SEED`; unset variables keep
    /// their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = Self {
            hands: var_or("JAMB_HANDS", defaults.hands)?,
            rolls_per_turn: var_or("JAMB_ROLLS_PER_TURN", defaults.rolls_per_turn)?,
            final_hand_bonus_rolls: var_or(
                "JAMB_FINAL_HAND_BONUS_ROLLS",
                defaults.final_hand_bonus_rolls,
            )?,
            seed: optional_var("JAMB_SEED")?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse from a host-supplied JSON value; missing fields take defaults.
    pub fn from_json(value: &JsonValue) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_value(value.clone())?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_hands(mut self, hands: u8) -> Self {
        self.hands = hands;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hands == 0 || self.hands > MAX_HANDS {
            return Err(ConfigError::Invalid {
                name: "hands",
                detail: format!("{} not in 1..={MAX_HANDS}", self.hands),
            });
        }
        if self.rolls_per_turn == 0 {
            return Err(ConfigError::Invalid {
                name: "rolls_per_turn",
                detail: "at least one roll per turn is required".to_string(),
            });
        }
        Ok(())
    }
}

fn var_or<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    Ok(optional_var(name)?.unwrap_or(default))
}

fn optional_var<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid {
                name,
                detail: format!("cannot parse '{raw}'"),
            }),
        Err(_) => Ok(None),
    }
}
