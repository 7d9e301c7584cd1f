//! Sente: no-pass Go at the terminal.
//!
//! ## Usage
//!
//! - `sente` - Play Black against the random policy on 9x9
//! - `sente play --size 13 --color white --seed 7` - Pick your seat
//! - `sente watch` - Let the random policy play itself

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use sente::ai::RandomAi;
use sente::board::Color;
use sente::cli;

/// Sente: a no-pass Go engine with a random sparring partner
#[derive(Parser)]
#[command(name = "sente")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(long, default_value = "warn", global = true)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a match against the built-in random policy
    Play {
        /// Board size, 1 to 19
        #[arg(short, long, default_value_t = 9)]
        size: usize,
        /// The color you play
        #[arg(short, long, value_enum, default_value = "black")]
        color: Side,
        /// Seed for the opponent; drawn from entropy when omitted
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Watch the random policy play both sides
    Watch {
        /// Board size, 1 to 19
        #[arg(short, long, default_value_t = 9)]
        size: usize,
        /// Seed for both seats; drawn from entropy when omitted
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many moves; defaults to three board areas
        #[arg(short, long)]
        moves: Option<usize>,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum Side {
    Black,
    White,
}

impl From<Side> for Color {
    fn from(side: Side) -> Color {
        match side {
            Side::Black => Color::Black,
            Side::White => Color::White,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    initialize_logging(cli.log_level);

    match cli.command {
        Some(Commands::Play { size, color, seed }) => run_play(size, color.into(), seed),
        Some(Commands::Watch { size, seed, moves }) => run_watch(size, seed, moves),
        None => run_play(9, Color::Black, None),
    }
}

fn run_play(size: usize, color: Color, seed: Option<u64>) -> anyhow::Result<()> {
    anyhow::ensure!((1..=19).contains(&size), "board size must be 1 to 19");
    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    info!(seed);
    let mut source = RandomAi::with_seed(seed);
    cli::play(size, color, &mut source)
}

fn run_watch(size: usize, seed: Option<u64>, moves: Option<usize>) -> anyhow::Result<()> {
    anyhow::ensure!((1..=19).contains(&size), "board size must be 1 to 19");
    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    info!(seed);
    let mut source = RandomAi::with_seed(seed);
    cli::watch(size, &mut source, moves.unwrap_or(size * size * 3))
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(Targets::new().with_default(level))
        .init();
}
