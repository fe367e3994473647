use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use catmate::agent::ai::{Difficulty, NegamaxPlayer};
use catmate::config::EngineConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Pick a chess move with negamax search", long_about = None)]
struct Args {
    /// Position to search, as FEN
    fen: String,

    /// Search depth in plies
    #[arg(short, long, conflicts_with = "difficulty")]
    depth: Option<u8>,

    /// Depth preset: easy, medium, hard or expert
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Opening book file; repeat to merge, later files take precedence
    #[arg(short, long = "book", value_name = "FILE")]
    books: Vec<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .target(env_logger::Target::Stderr)
    .init();

    let mut config = match args.difficulty {
        Some(difficulty) => {
            log::info!("difficulty {} (depth {})", difficulty.name(), difficulty.max_depth());
            EngineConfig::from_difficulty(difficulty)
        }
        None => EngineConfig::default(),
    };
    if let Some(depth) = args.depth {
        config = config.with_depth(depth);
    }
    for book in args.books {
        config = config.with_book(book);
    }

    let player = NegamaxPlayer::new(config).context("failed to set up the engine")?;
    let result = player
        .best_move(&args.fen)
        .with_context(|| format!("search failed for `{}`", args.fen))?;

    match result.uci() {
        Some(mv) => println!("{}", mv),
        None => println!("(none)"),
    }

    Ok(())
}
