//! Count the full capture tree of a puzzle, level by level.
//!
//! Unlike the solver, this never stops early on ambiguity:
//! - Transpositions are NOT compressed (same position via different paths = distinct nodes)
//! - Each level reports nodes, distinct positions, winners and distinct end squares
//!
//! Usage:
//!   count_tree [PUZZLE]

use std::collections::HashSet;
use std::env;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use lonechess_core::{Puzzle, State};
use lonechess_solver::config::load_puzzle;
use lonechess_solver::stats::{distinct_positions, fingerprint};

/// Counts for one depth of the tree.
#[derive(Debug, Default)]
struct Level {
    nodes: usize,
    distinct: usize,
    winners: usize,
    distinct_winners: usize,
    dead_ends: usize,
}

fn count_level(frontier: &[State]) -> Result<(Level, Vec<State>)> {
    let mut level = Level {
        nodes: frontier.len(),
        distinct: distinct_positions(frontier),
        ..Default::default()
    };
    let mut end_positions = HashSet::new();
    let mut next = Vec::new();

    for state in frontier {
        if state.is_terminal() {
            level.winners += 1;
            end_positions.insert(fingerprint(state.occupancy()));
            continue;
        }
        let children = state.children().context("move application failed")?;
        if children.is_empty() {
            level.dead_ends += 1;
        }
        next.extend(children);
    }
    level.distinct_winners = end_positions.len();
    Ok((level, next))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let puzzle = match env::args().nth(1) {
        Some(path) => load_puzzle(Path::new(&path))?,
        None => Puzzle::reference(),
    };
    let mut frontier = vec![puzzle.initial_state().context("invalid puzzle")?];

    let start = Instant::now();
    let mut depth = 0;
    let mut total = 0;

    println!(
        "{:>5} {:>10} {:>10} {:>8} {:>8} {:>10}",
        "depth", "nodes", "distinct", "winners", "ends", "dead_ends"
    );
    while !frontier.is_empty() {
        let (level, next) = count_level(&frontier)?;
        println!(
            "{:>5} {:>10} {:>10} {:>8} {:>8} {:>10}",
            depth, level.nodes, level.distinct, level.winners, level.distinct_winners, level.dead_ends
        );
        total += level.nodes;
        frontier = next;
        depth += 1;
    }

    info!(
        "{} nodes in {:.3}s",
        total,
        start.elapsed().as_secs_f64()
    );
    Ok(())
}
