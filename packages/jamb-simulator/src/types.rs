//! Shared types for the simulator.

use clap::ValueEnum;

use crate::strategy::{Greedy, RandomStrategy, Strategy};

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One JSON document per game, plus the CSV summary
    Jsonl,
    /// CSV summary only
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    Greedy,
    Random,
}

impl StrategyKind {
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::Greedy => Greedy::NAME,
            StrategyKind::Random => RandomStrategy::NAME,
        }
    }

    /// Build a fresh strategy; `seed` only affects randomized ones.
    pub fn create(self, seed: Option<u64>) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Greedy => Box::new(Greedy::default()),
            StrategyKind::Random => Box::new(RandomStrategy::new(seed)),
        }
    }
}
