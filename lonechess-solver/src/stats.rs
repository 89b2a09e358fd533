//! Solver statistics tracking.

use std::collections::HashSet;
use std::time::Instant;

use log::{debug, info};
use xxhash_rust::xxh64::xxh64;

use lonechess_core::{Occupancy, Piece, State};

/// Fingerprint of a board position, independent of how it was reached.
///
/// Hashes `(row, col, piece)` for every occupied square in row-major order.
pub fn fingerprint(occupancy: &Occupancy) -> u64 {
    let mut bytes = Vec::with_capacity(occupancy.len() * 9);
    for (sq, piece) in occupancy.iter() {
        bytes.extend_from_slice(&sq.row.to_le_bytes());
        bytes.extend_from_slice(&sq.col.to_le_bytes());
        bytes.push(piece_code(piece));
    }
    xxh64(&bytes, 0)
}

fn piece_code(piece: Piece) -> u8 {
    match piece {
        Piece::Pawn => 0,
        Piece::King => 1,
        Piece::Bishop => 2,
        Piece::Rook => 3,
        Piece::Queen => 4,
        Piece::Knight => 5,
    }
}

/// Number of distinct positions among a set of states.
pub fn distinct_positions(states: &[State]) -> usize {
    states
        .iter()
        .map(|s| fingerprint(s.occupancy()))
        .collect::<HashSet<u64>>()
        .len()
}

/// Counts for one generation of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationStats {
    /// Moves played to reach this generation
    pub depth: usize,
    /// States in the frontier
    pub frontier: usize,
    /// Distinct positions in the frontier (transpositions collapsed)
    pub distinct: usize,
}

/// Statistics collected during solving.
#[derive(Debug, Default)]
pub struct SolverStats {
    /// Frontier summaries, one per generation started
    pub generations: Vec<GenerationStats>,

    /// States whose children were generated
    pub states_expanded: u64,

    /// Child states produced
    pub children_generated: u64,

    /// Children with a single piece left
    pub winners_found: u64,

    /// Largest frontier seen
    pub largest_frontier: usize,

    start_time: Option<Instant>,
}

impl SolverStats {
    pub fn new() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ..Default::default()
        }
    }

    /// Record the frontier about to be expanded.
    pub fn begin_generation(&mut self, depth: usize, frontier: &[State]) {
        let generation = GenerationStats {
            depth,
            frontier: frontier.len(),
            distinct: distinct_positions(frontier),
        };
        debug!(
            "depth={} frontier={} distinct={} winners={}",
            generation.depth, generation.frontier, generation.distinct, self.winners_found
        );
        self.largest_frontier = self.largest_frontier.max(frontier.len());
        self.generations.push(generation);
    }

    /// Record one expanded state.
    #[inline]
    pub fn record_expansion(&mut self, children: usize, winners: usize) {
        self.states_expanded += 1;
        self.children_generated += children as u64;
        self.winners_found += winners as u64;
    }

    /// Deepest generation started.
    pub fn max_depth(&self) -> usize {
        self.generations.last().map(|g| g.depth).unwrap_or(0)
    }

    /// Get states expanded per second
    pub fn states_per_sec(&self) -> f64 {
        if let Some(start) = self.start_time {
            let elapsed = start.elapsed().as_secs_f64();
            if elapsed > 0.0 {
                return self.states_expanded as f64 / elapsed;
            }
        }
        0.0
    }

    /// Log a one-line summary.
    pub fn log_summary(&self) {
        let elapsed = self
            .start_time
            .map(|s| s.elapsed().as_secs_f64())
            .unwrap_or(0.0);
        info!(
            "expanded={} children={} winners={} depth={} largest_frontier={} time={:.3}s rate={:.0}/s",
            self.states_expanded,
            self.children_generated,
            self.winners_found,
            self.max_depth(),
            self.largest_frontier,
            elapsed,
            self.states_per_sec(),
        );
    }

    /// Print final summary
    pub fn print_summary(&self) {
        println!("States expanded: {}", self.states_expanded);
        println!("Children generated: {}", self.children_generated);
        println!("Winners found: {}", self.winners_found);
        println!("Largest frontier: {}", self.largest_frontier);
        println!("Generations:");
        for g in &self.generations {
            println!(
                "  depth {:>2}: {:>8} states {:>8} distinct",
                g.depth, g.frontier, g.distinct
            );
        }
        if let Some(start) = self.start_time {
            println!("Time: {:.3}s", start.elapsed().as_secs_f64());
        }
    }
}
