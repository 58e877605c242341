//! Engine test support utilities
//!
//! This crate provides helpers shared by the engine's integration tests:
//! unified logging initialization, property-test sizing, and small fixture
//! generators that do not need engine types.

pub mod fixtures;
pub mod logging;
