mod console;
mod driver;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::io::{self, Write};
use std::path::PathBuf;
use treasure_hunter_game::{Difficulty, GameConfig};

use console::Console;
use driver::{Ending, SessionOptions};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DifficultyArg {
    /// Gentle towns, more gold, items never break
    Easy,
    /// The standard hunt
    Normal,
    /// Rough towns everywhere
    Hard,
    /// Start with a sword
    Samurai,
}

impl From<DifficultyArg> for Difficulty {
    fn from(value: DifficultyArg) -> Self {
        match value {
            DifficultyArg::Easy => Self::Easy,
            DifficultyArg::Normal => Self::Normal,
            DifficultyArg::Hard => Self::Hard,
            DifficultyArg::Samurai => Self::Samurai,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "treasure-hunter", version)]
#[command(about = "Hunt for treasure from town to town in a text adventure")]
struct Args {
    /// Difficulty preset
    #[arg(long, value_enum, default_value_t = DifficultyArg::Normal)]
    difficulty: DifficultyArg,

    /// Hunter name (prompted when omitted)
    #[arg(long)]
    name: Option<String>,

    /// Seed for a reproducible run; entropy is used when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file overriding difficulty presets and store prices
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Disable coloured output
    #[arg(long)]
    plain: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(GameConfig::default_config()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_ref())?;
    if args.print_config {
        let json = serde_json::to_string_pretty(&config).context("serializing config")?;
        let mut out = io::stdout().lock();
        writeln!(out, "{json}")?;
        return Ok(());
    }

    let mut rng = match args.seed {
        Some(seed) => {
            log::info!("using seed {seed}");
            SmallRng::seed_from_u64(seed)
        }
        None => SmallRng::from_entropy(),
    };

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock(), !args.plain);
    let options = SessionOptions {
        name: args.name,
        difficulty: args.difficulty.into(),
        config,
    };
    let ending = driver::run(options, &mut rng, &mut console)?;
    log::info!("session ended: {ending:?}");
    if ending == Ending::OutOfInput {
        console.say("")?;
    }
    Ok(())
}
