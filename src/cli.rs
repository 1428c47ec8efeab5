use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use crate::core::engine::Engine;
use crate::games::wheel::game::{MAX_FPS, MIN_FPS};
use crate::games::wheel::phrases::DEFAULT_PUZZLE_FILE;
use crate::games::wheel::random::{RandomSource, RngSource};
use crate::games::wheel::{PhraseBook, RoundEngine, WheelGame};

#[derive(Parser)]
#[command(name = "wheelterm")]
#[command(about = "🎡 Spin the wheel, call letters, solve the puzzle - in your terminal")]
#[command(version)]
pub struct Cli {
    /// Puzzle file (category -> phrases); created with defaults if missing
    #[arg(short, long, default_value = DEFAULT_PUZZLE_FILE, global = true)]
    pub puzzles: PathBuf,

    /// Seed for puzzle choice and wheel spins, for a repeatable game
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Frames per second of the game loop
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(MIN_FPS as i64..=MAX_FPS as i64))]
    pub fps: u32,

    /// Where log output goes; the terminal belongs to the game
    #[arg(long, default_value = "wheelterm.log", global = true)]
    pub log_file: PathBuf,

    /// Log debug detail, including puzzle answers
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play the game (default)
    Play,
    /// List the categories in the puzzle file
    Categories,
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file, cli.verbose)?;

    let phrases = PhraseBook::load_or_init(&cli.puzzles)?;

    match cli.command {
        Some(Commands::Categories) => {
            println!("📋 Categories in {}:", cli.puzzles.display());
            for (name, count) in phrases.categories() {
                println!("  • {} ({} puzzles)", name, count);
            }
            Ok(())
        }
        Some(Commands::Play) | None => play(phrases, cli.seed, cli.fps).await,
    }
}


async fn play(phrases: PhraseBook, seed: Option<u64>, fps: u32) -> Result<()> {
    let rng: Box<dyn RandomSource> = match seed {
        Some(seed) => Box::new(RngSource(StdRng::seed_from_u64(seed))),
        None => Box::new(RngSource(rand::rng())),
    };
    info!(?seed, fps, "starting game");

    let game = WheelGame::new(RoundEngine::new(phrases, rng), fps);
    let terminal = ratatui::init();
    let result = Engine::new(game).run(terminal).await;
    ratatui::restore();

    let game = result?;
    println!("💰 Final score: ${}", game.round().score());
    Ok(())
}

fn init_logging(path: &Path, verbose: bool) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .init();
    Ok(())
}
