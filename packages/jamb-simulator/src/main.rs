//! Jamb simulator CLI: plays seeded games between automated strategies.
//!
//! Games run entirely in memory through the public engine API, so every
//! move goes through the same validation a human player's would.

mod metrics;
mod output;
mod simulator;
mod strategy;
mod types;

use std::time::{Duration, Instant};

use clap::Parser;
use jamb_engine::domain::derive_game_seed;
use jamb_engine::telemetry::init_tracing;
use jamb_engine::GameConfig;
use metrics::{build_game_metrics, RunConfig};
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use strategy::Strategy;
use tracing::{info, warn};
use types::{OutputFormat, StrategyKind};

#[derive(Parser)]
#[command(name = "jamb-simulator")]
#[command(about = "In-memory Jamb game simulator for strategy evaluation")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Players per game
    #[arg(short, long, default_value = "2", value_parser = clap::value_parser!(u8).range(1..=4))]
    players: u8,

    /// Hands per game
    #[arg(long, default_value = "5")]
    hands: u8,

    /// Base seed; game N plays with a seed derived from it
    #[arg(long)]
    seed: Option<u64>,

    /// Strategy for every seat
    #[arg(long, default_value = "greedy")]
    strategy: StrategyKind,

    /// Per-seat strategies, overriding --strategy (comma separated)
    #[arg(long, value_delimiter = ',', conflicts_with = "strategy")]
    seats: Option<Vec<StrategyKind>>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

impl Args {
    fn seat_kinds(&self) -> Result<Vec<StrategyKind>, String> {
        let players = usize::from(self.players);
        match &self.seats {
            Some(seats) if seats.len() != players => Err(format!(
                "--seats lists {} strategies for {players} players",
                seats.len()
            )),
            Some(seats) => Ok(seats.clone()),
            None => Ok(vec![self.strategy; players]),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default; only warnings and errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    init_tracing(filter, args.json_logs);

    let kinds = args.seat_kinds()?;
    let strategy_names: Vec<String> = kinds.iter().map(|k| k.name().to_string()).collect();
    if args.show_output {
        info!(games = args.games, players = args.players, hands = args.hands, "Starting simulator");
        info!(strategies = ?strategy_names, "Seats");
    }

    let mut output_writer = OutputWriter::new(&args.output_dir, &args.output_format)?;
    if args.show_output {
        info!("Output directory: {}", args.output_dir);
    }

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0u32;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let game_seed = match args.seed {
            Some(base) => derive_game_seed(base, u64::from(game_num)),
            None => rand::random(),
        };

        // Strategies are seeded from the game seed so a run replays exactly.
        let seats: Vec<Box<dyn Strategy>> = kinds
            .iter()
            .enumerate()
            .map(|(seat, kind)| kind.create(Some(game_seed.wrapping_add(seat as u64 + 1))))
            .collect();

        let config = GameConfig::default()
            .with_hands(args.hands)
            .with_seed(game_seed);
        let simulator = Simulator::new(usize::from(args.players), config);

        match simulator.simulate_game(&seats) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let run_config = RunConfig {
                    strategies: strategy_names.clone(),
                    hands: args.hands,
                    total_games: args.games,
                };
                let metrics =
                    build_game_metrics(game_num, game_seed, run_config, &result, duration_ms);

                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_num, e);
                }
                if args.verbose {
                    info!("Game {} completed: totals={:?}", game_num, result.final_totals);
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game_num, e);
            }
        }
    }

    let elapsed = start.elapsed();

    let (jsonl_path, csv_path) = output_writer.output_paths();
    let jsonl_path = jsonl_path.cloned();
    let csv_path = csv_path.clone();
    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = jsonl_path {
            info!("Detailed results written to: {}", path.display());
        }
        info!("Summary CSV written to: {}", csv_path.display());

        print_summary(&results, &strategy_names, errors, elapsed, args.games);
    }

    Ok(())
}

fn print_summary(
    results: &[GameResult],
    strategies: &[String],
    errors: u32,
    elapsed: Duration,
    total: u32,
) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);

    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let seats = strategies.len();
    let mut wins = vec![0u32; seats];
    let mut total_scores = vec![0i64; seats];
    let mut max_scores = vec![i32::MIN; seats];
    let mut min_scores = vec![i32::MAX; seats];

    for result in results {
        // Every player sharing the top total is credited a win
        let best = result.final_totals.iter().max().copied().unwrap_or(0);
        for (seat, &score) in result.final_totals.iter().enumerate() {
            total_scores[seat] += i64::from(score);
            max_scores[seat] = max_scores[seat].max(score);
            min_scores[seat] = min_scores[seat].min(score);
            if score == best {
                wins[seat] += 1;
            }
        }
    }

    println!("\n=== Results by Seat ===");
    for seat in 0..seats {
        let avg_score = total_scores[seat] as f64 / results.len() as f64;
        let win_rate = (wins[seat] as f64 / results.len() as f64) * 100.0;
        println!(
            "Seat {} ({}): avg={:.1}, min={}, max={}, wins={} ({:.1}%)",
            seat,
            strategies[seat],
            avg_score,
            min_scores[seat],
            max_scores[seat],
            wins[seat],
            win_rate
        );
    }
}
