#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;
pub mod game;
pub mod telemetry;

// Re-exports for public API
pub use config::{ConfigError, GameConfig};
pub use domain::{
    Category, CellRef, Column, GameTransition, PlayerId, PlayerSheet, ScoreSnapshot, TurnPhase,
};
pub use errors::{DomainError, ErrorCode, ValidationKind};
pub use game::{Game, Subscriber};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
