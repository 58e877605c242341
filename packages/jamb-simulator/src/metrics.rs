//! Metrics collection and output for simulation results.

use jamb_engine::Column;
use serde::Serialize;

use crate::simulator::GameResult;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: RunConfig,
    pub result: GameResultMetrics,
    pub player_metrics: Vec<PlayerMetrics>,
    pub events: EventMetrics,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunConfig {
    pub strategies: Vec<String>,
    pub hands: u8,
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub final_totals: Vec<i32>,
    pub winner: usize,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: usize,
    pub strategy: String,
    pub total: i32,
    /// Column label → column total.
    pub columns: Vec<(String, i32)>,
    pub rank: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct EventMetrics {
    pub rolls: u32,
    pub avg_rolls_per_turn: f64,
    pub announcements: u32,
    pub checkouts_designated: u32,
}

/// Build metrics from a finished game.
pub fn build_game_metrics(
    game_id: u32,
    seed: u64,
    config: RunConfig,
    result: &GameResult,
    duration_ms: f64,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    // Standings are sorted with ties in seat order, so the first entry wins.
    let winner = result.standings.first().map_or(0, |s| s.player);

    let player_metrics = result
        .final_totals
        .iter()
        .enumerate()
        .map(|(seat, &total)| PlayerMetrics {
            seat,
            strategy: config.strategies.get(seat).cloned().unwrap_or_default(),
            total,
            columns: Column::ALL
                .iter()
                .map(|c| (c.label().to_string(), result.column_totals[seat][c.index()]))
                .collect(),
            rank: result
                .standings
                .iter()
                .position(|s| s.player == seat)
                .map_or(0, |i| i + 1),
        })
        .collect();

    let turns = result.tally.cells_written.max(1);
    GameMetrics {
        game_id,
        seed,
        timestamp,
        config,
        result: GameResultMetrics {
            final_totals: result.final_totals.clone(),
            winner,
            duration_ms,
        },
        player_metrics,
        events: EventMetrics {
            rolls: result.tally.rolls,
            avg_rolls_per_turn: f64::from(result.tally.rolls) / f64::from(turns),
            announcements: result.tally.announcements,
            checkouts_designated: result.tally.checkouts_designated,
        },
    }
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub winner: usize,
    pub seat0_score: Option<i32>,
    pub seat1_score: Option<i32>,
    pub seat2_score: Option<i32>,
    pub seat3_score: Option<i32>,
    pub strategies: String,
    pub announcements: u32,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        let score = |seat: usize| metrics.result.final_totals.get(seat).copied();
        CsvSummaryRow {
            game_id: metrics.game_id,
            seed: metrics.seed,
            winner: metrics.result.winner,
            seat0_score: score(0),
            seat1_score: score(1),
            seat2_score: score(2),
            seat3_score: score(3),
            strategies: metrics.config.strategies.join("|"),
            announcements: metrics.events.announcements,
        }
    }
}
