use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use draughts::config::GameConfig;
use draughts::game::Game;
use draughts::pieces::Side;
use draughts::search::{Personality, SearchCounts};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Let two AI personalities play each other from the starting position.
#[derive(Debug, Parser)]
#[command(name = "selfplay")]
struct Args {
    /// JSON game configuration (board geometry, default AI settings, seed).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Search depth for both sides (overrides the configuration).
    #[arg(long)]
    depth: Option<i32>,

    /// Personality for side X.
    #[arg(long, default_value = "moderate")]
    personality_a: Personality,

    /// Personality for side O.
    #[arg(long, default_value = "moderate")]
    personality_b: Personality,

    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many turns even if the game is not over.
    #[arg(long, default_value_t = 200)]
    max_turns: usize,

    /// Do not print the board after each turn.
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match GameConfig::from_json_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::from(2);
            }
        },
        None => GameConfig::default(),
    };
    if let Some(depth) = args.depth {
        config.ai.depth = depth;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut game = match Game::new(config) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            return ExitCode::from(2);
        }
    };

    info!(
        first = %game.board().side_to_move(),
        depth = game.ai_config().depth,
        a = %args.personality_a,
        b = %args.personality_b,
        "game started"
    );

    let mut totals = SearchCounts::default();
    let mut turns = 0usize;
    while turns < args.max_turns && game.winner().is_none() {
        let side = game.board().side_to_move();
        let personality = match side {
            Side::A => args.personality_a,
            Side::B => args.personality_b,
        };
        game.set_personality(personality);

        let steps = match game.play_ai_turn() {
            Ok(s) => s,
            Err(e) => {
                warn!(%side, "ai failed: {e}");
                return ExitCode::from(1);
            }
        };
        for d in &steps {
            totals.nodes += d.counts.nodes;
            totals.leaves += d.counts.leaves;
            totals.board_copies += d.counts.board_copies;
        }
        turns += 1;

        if !args.quiet {
            println!("turn {turns}: {side} played {} step(s)\n{}", steps.len(), game.board());
        }
    }

    let winner = game.winner();
    match winner {
        Some(side) => info!(%side, turns, "game over"),
        None => info!(turns, "turn limit reached"),
    }

    let summary = serde_json::json!({
        "turns": turns,
        "winner": winner,
        "pieces": {
            "a": game.board().count(Side::A),
            "b": game.board().count(Side::B),
        },
        "search": totals,
    });
    match serde_json::to_string_pretty(&summary) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("failed to encode summary: {e}");
            return ExitCode::from(1);
        }
    }

    ExitCode::SUCCESS
}
