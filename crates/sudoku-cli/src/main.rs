//! Command-line sudoku solver.
//!
//! Reads a board file, solves it with the selected search strategy, and
//! prints the solution together with the number of variable assignments the
//! search performed.

use std::{fs, path::PathBuf, process::ExitCode, time::Instant};

use argh::FromArgs;
use log::info;
use sudoku_core::Board;
use sudoku_solver::{Propagator, null_propagation, propagate_forced_moves, solve};

/// Solve a 9x9 sudoku board read from a file.
///
/// The board file holds 81 whitespace-separated cells in row-major order:
/// `1`-`9` for a filled cell, `_` for an empty one.
#[derive(Debug, FromArgs)]
struct Args {
    /// search by pure backtracking, without propagation
    #[argh(switch)]
    simple: bool,

    /// assign forced moves before every branching decision
    #[argh(switch)]
    smart: bool,

    /// print the parsed board and exit without solving
    #[argh(switch)]
    just_print: bool,

    /// path to the board file
    #[argh(positional)]
    board_file: PathBuf,
}

/// The search strategy selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    /// Pure chronological backtracking.
    Simple,
    /// Backtracking with forced-move propagation at every node.
    Smart,
}

impl Strategy {
    fn select(simple: bool, smart: bool) -> Result<Self, &'static str> {
        match (simple, smart) {
            (true, false) => Ok(Self::Simple),
            (false, true) => Ok(Self::Smart),
            (true, true) => Err("--simple and --smart are mutually exclusive"),
            (false, false) => Err("pick a search strategy: --simple or --smart"),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Smart => "smart",
        }
    }

    fn propagator(self) -> Propagator {
        match self {
            Self::Simple => null_propagation,
            Self::Smart => propagate_forced_moves,
        }
    }
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args: Args = argh::from_env();

    let input = match fs::read_to_string(&args.board_file) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("Error opening file {:?}: {err}", args.board_file);
            return ExitCode::FAILURE;
        }
    };

    let mut board: Board = match input.parse() {
        Ok(board) => board,
        Err(err) => {
            eprintln!("Bad board file {:?}: {err}", args.board_file);
            return ExitCode::FAILURE;
        }
    };

    println!("Beginning state:\n{board}");

    if args.just_print {
        return ExitCode::SUCCESS;
    }

    let strategy = match Strategy::select(args.simple, args.smart) {
        Ok(strategy) => strategy,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    info!("searching with the {} strategy", strategy.name());

    let start = Instant::now();
    let (assignments, solved) = solve(&mut board, strategy.propagator());
    let elapsed = start.elapsed();

    if solved {
        println!("Solution state:\n{board}");
        println!("Solution found with: {assignments} variable assignments");
    } else {
        println!("No solution exists.");
        println!("Search exhausted after: {assignments} variable assignments");
    }

    println!("Solution took: {}us", elapsed.as_micros());
    println!("Equal to: {}ms", elapsed.as_millis());
    println!("Equal to: {}s", elapsed.as_secs());

    ExitCode::SUCCESS
}
