//! Solitaire Chess Solver
//!
//! Usage:
//!   lonechess [PUZZLE] [--stats]
//!
//! PUZZLE is a `.json` puzzle file or a text board grid. Without one, the
//! built-in 4×4 reference puzzle is solved. Set `RUST_LOG=debug` for
//! per-generation progress.

use std::env;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

use lonechess_core::Puzzle;
use lonechess_solver::config::load_puzzle;
use lonechess_solver::render::{render_annotated, render_board};
use lonechess_solver::{Solution, Solver};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = env::args().skip(1).collect();
    let show_stats = args.iter().any(|a| a == "--stats");
    let puzzle = match args.iter().find(|a| !a.starts_with("--")) {
        Some(path) => load_puzzle(Path::new(path))?,
        None => Puzzle::reference(),
    };

    let initial = puzzle.initial_state().context("invalid puzzle")?;
    info!(
        "solving {} puzzle with {} pieces",
        initial.size(),
        initial.occupancy().len()
    );

    // Set up SIGINT handler; the solver stops at the next generation boundary
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .context("error setting Ctrl-C handler")?;

    let mut solver = Solver::with_interrupt(running);
    let solution = solver.solve(initial)?;

    match &solution {
        Solution::Unique(winner) => {
            println!("Solved in {} moves:\n", winner.depth());
            print!("{}", render_annotated(winner));
        }
        Solution::Ambiguous(winners) => {
            println!(
                "Ambiguous puzzle: {} winning sequences with different end positions:\n",
                winners.len()
            );
            for (i, winner) in winners.iter().enumerate() {
                println!("Solution {}:", i + 1);
                print!("{}", render_annotated(winner));
                println!();
            }
        }
        Solution::NoSolution => {
            println!("No solution:");
            print!("{}", render_board(&puzzle.occupancy()?, puzzle.size()));
        }
    }

    if show_stats {
        println!();
        solver.stats.print_summary();
    }

    Ok(())
}
