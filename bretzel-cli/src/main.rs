use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use bretzel_crossword::crossword::Crossword;
use bretzel_crossword::error::Error;
use bretzel_solver_backtrack::BacktrackSolver;
use clap::Parser;
use log::info;

/// 🥨 Welcome to Bretzel, a crossword filler with a twist.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to the grid file; each line is a row, cells may be separated
    /// by tabs or spaces, '#' is a block, '.' or a letter is an open cell.
    grid: PathBuf,
    /// The path to the word list, one word per line.
    #[arg(short, long)]
    wordlist: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let args = Args::parse();
    match run(&args) {
        Ok(Some(board)) => {
            println!("{board}");
            ExitCode::SUCCESS
        }
        Ok(None) => {
            println!("No solution found.");
            ExitCode::from(1)
        }
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::from(2)
        }
    }
}

/// Reads the input files, compiles the crossword and solves it. `Ok(None)`
/// means the instance is well-formed but unsolvable.
fn run(args: &Args) -> anyhow::Result<Option<String>> {
    let grid = fs::read_to_string(&args.grid)
        .with_context(|| format!("cannot read grid file {}", args.grid.display()))?;
    let words = read_words_at(&args.wordlist)?;

    let setup_start = Instant::now();
    let crossword = match Crossword::from(&grid, &words) {
        Ok(crossword) => crossword,
        Err(Error::NoCandidates { slot, length }) => {
            info!("slot #{slot} has no candidate word of length {length}");
            return Ok(None);
        }
        Err(error) => return Err(error.into()),
    };
    info!("setup took {:?}", setup_start.elapsed());

    let solve_start = Instant::now();
    let solution = crossword.solve_with(&BacktrackSolver::new());
    info!("solving took {:?}", solve_start.elapsed());
    Ok(solution)
}

/// Reads words from the file at the given path, one per line, verbatim apart
/// from trailing whitespace.
fn read_words_at(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read word list {}", path.display()))?;
    Ok(content
        .lines()
        .map(|line| line.trim_end().to_string())
        .filter(|word| !word.is_empty())
        .collect())
}
