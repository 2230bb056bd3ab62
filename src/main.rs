use anyhow::{Context, Result};
use chiton::{Grid, RiskMap, SearchError, Strategy};
use std::fs::File;
use std::io::{stdin, BufReader};
use std::path::PathBuf;
use std::time::Instant;
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, StructOpt)]
enum Mode {
    #[structopt(about = "Uniform cost search stopping on exit discovery (default)")]
    Relax,
    #[structopt(about = "Textbook Dijkstra stopping when exit is settled")]
    Settle,
    #[structopt(about = "Parallel flood of the whole cavern")]
    Flood,
}

impl From<Mode> for Strategy {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Relax => Strategy::Relax,
            Mode::Settle => Strategy::Settle,
            Mode::Flood => Strategy::Flood,
        }
    }
}

#[derive(Debug, StructOpt)]
#[structopt(name = "chiton", about = "Finds the least risky way through the cavern")]
struct Opt {
    /// Puzzle input, read from stdin if not given
    #[structopt(short, long, parse(from_os_str))]
    input: Option<PathBuf>,

    /// How many times cavern is repeated in part 2
    #[structopt(short, long, default_value = "5")]
    tiles: usize,

    #[structopt(subcommand)]
    mode: Option<Mode>,
}

/// Tracing goes to stderr, verbosity from `RUST_LOG`, `warn` if not set
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn read_grid(input: Option<&PathBuf>) -> Result<Grid> {
    match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            Grid::from_input(BufReader::new(file))
                .with_context(|| format!("Failed to read cavern from {}", path.display()))
        }
        None => Grid::from_input(stdin().lock()).context("Failed to read cavern from stdin"),
    }
}

/// Runs single part, printing its result together with time it took
fn solve_part(part: usize, solver: impl FnOnce() -> Result<usize, SearchError>) -> Result<()> {
    let start = Instant::now();
    let result = solver().with_context(|| format!("Failed to solve part {}", part))?;
    let duration = start.elapsed();

    println!(
        "Part {} result: {}    time: {} us",
        part,
        result,
        duration.as_micros()
    );

    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let opt = Opt::from_args();

    let grid = read_grid(opt.input.as_ref())?;
    let (w, h) = grid.size();
    info!(w, h, tiles = opt.tiles, "cavern read");

    #[cfg(feature = "text_visualize")]
    tracing::trace!("Cavern:\n\n{}", grid);

    let strategy = opt.mode.map_or(Strategy::Relax, Strategy::from);
    let tiled = grid.tiled(opt.tiles);

    println!("Day 15:");
    solve_part(1, || strategy.corner_to_corner(&grid))?;
    solve_part(2, || strategy.corner_to_corner(&tiled))?;

    Ok(())
}
