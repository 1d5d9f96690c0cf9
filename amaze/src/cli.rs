use std::path::PathBuf;

use amaze_gen::MAX_DIM;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "amaze")]
#[command(about = "Solve text mazes with A* and show what the search explored")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a maze file and solve it
    Solve(SolveArgs),

    /// Print a randomly generated maze in the text format
    Generate(GenerateArgs),

    /// Solve a batch of generated mazes and report timings
    Bench(BenchArgs),
}

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Maze file: '#' wall, ' ' open, 'o' start, '*' goal
    pub file: PathBuf,

    /// Print every finalized cell as the search reports it
    #[arg(long)]
    pub trace: bool,

    /// Cancel the search if it runs longer than this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Stop after finalizing this many cells
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// When to colour the rendered maze
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub shape: MazeShape,

    /// RNG seed; random when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct BenchArgs {
    #[command(flatten)]
    pub shape: MazeShape,

    /// Number of mazes to solve
    #[arg(short, long, default_value = "100")]
    pub runs: usize,

    /// Seed of the first maze; run i uses seed + i
    #[arg(short, long, default_value = "0")]
    pub seed: u64,
}

#[derive(Args, Debug, Clone, Copy)]
pub struct MazeShape {
    /// Maze width in cells
    #[arg(long, default_value = "41", value_parser = clap::value_parser!(i32).range(1..=MAX_DIM as i64))]
    pub width: i32,

    /// Maze height in cells
    #[arg(long, default_value = "21", value_parser = clap::value_parser!(i32).range(1..=MAX_DIM as i64))]
    pub height: i32,

    /// Probability of opening each removable wall to add loops
    #[arg(long, default_value = "0.0")]
    pub braid: f64,

    /// Use independent random walls with this density instead of carving
    #[arg(long)]
    pub scatter: Option<f64>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}
