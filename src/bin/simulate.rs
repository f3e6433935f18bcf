//! Batch simulation CLI.
//!
//! Runs a batch of Shut the Box games between two named strategies and
//! prints the aggregate statistics.
//!
//! ```text
//! simulate --n-games 100 --p1-strategy greedy_max --p2-strategy min_tiles --seed 42
//! ```

use clap::Parser;
use tracing_subscriber::EnvFilter;

use shutbox::sim::{BatchConfig, Simulation, SummaryStats};
use shutbox::strategy::StrategyRegistry;

#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Run batch Shut the Box simulations")]
struct Args {
    /// Number of games to simulate.
    #[arg(long, default_value_t = 100)]
    n_games: u64,

    /// Player 1 strategy name.
    #[arg(long, default_value = "greedy_max")]
    p1_strategy: String,

    /// Player 2 strategy name.
    #[arg(long, default_value = "min_tiles")]
    p2_strategy: String,

    /// Base random seed; game i uses seed + i. Omit for a random base.
    #[arg(long)]
    seed: Option<u64>,

    /// Tiles on the board.
    #[arg(long, default_value_t = 9)]
    tile_count: u8,

    /// Print per-game summaries as JSON lines instead of aggregate stats.
    #[arg(long)]
    per_game: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut cfg = BatchConfig::new(args.n_games, &args.p1_strategy, &args.p2_strategy)
        .with_tile_count(args.tile_count);
    cfg.seed = args.seed;

    println!(
        "Simulating {} games: P1({}) vs P2({})",
        args.n_games, args.p1_strategy, args.p2_strategy
    );
    if let Some(seed) = args.seed {
        println!("Using base seed: {seed}");
    }

    let sim = Simulation::new();
    let summaries = match sim.run(&cfg) {
        Ok(summaries) => summaries,
        Err(e) => {
            let names = StrategyRegistry::with_builtins();
            eprintln!("error: {e}");
            eprintln!("available strategies: {:?}", names.names());
            std::process::exit(1);
        }
    };

    if args.per_game {
        for summary in &summaries {
            match serde_json::to_string(summary) {
                Ok(line) => println!("{line}"),
                Err(e) => {
                    eprintln!("error: failed to serialize summary: {e}");
                    std::process::exit(1);
                }
            }
        }
        return;
    }

    println!("==== Summary Stats ====");
    match SummaryStats::from_summaries(&summaries) {
        Some(stats) => println!("{stats}"),
        None => println!("no games simulated"),
    }
}
