//! Breadth-first solver with ambiguity detection.
//!
//! The frontier is expanded one generation at a time. Every child with a
//! single piece left is a winner. As soon as two winners end on different
//! positions the search stops and reports every winner found so far;
//! otherwise it runs until no state has a legal move.
//!
//! States are not deduplicated: the same position reached by different
//! move orders is expanded once per history. Each move removes a piece, so
//! the depth never exceeds the starting piece count minus one.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info, warn};
use thiserror::Error;

use lonechess_core::{MoveError, State};

use crate::stats::SolverStats;

/// Result of a completed search.
#[derive(Clone, Debug)]
pub enum Solution {
    /// The frontier ran out without a single winner.
    NoSolution,
    /// Every winner ends on the same position; holds the first one found.
    Unique(State),
    /// Winners ending on different positions; holds every winner found
    /// before the search stopped.
    Ambiguous(Vec<State>),
}

impl Solution {
    /// The winning states, as a sequence: empty, one, or several.
    pub fn winners(&self) -> &[State] {
        match self {
            Solution::NoSolution => &[],
            Solution::Unique(winner) => std::slice::from_ref(winner),
            Solution::Ambiguous(winners) => winners,
        }
    }

    /// The winner of an unambiguous puzzle.
    pub fn unique(&self) -> Option<&State> {
        match self {
            Solution::Unique(winner) => Some(winner),
            _ => None,
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        matches!(self, Solution::Ambiguous(_))
    }
}

/// A search that did not complete.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// The running flag was cleared; `depth` generations were fully expanded.
    #[error("search interrupted after {depth} generations")]
    Interrupted { depth: usize },
    /// Move application broke its own post-condition.
    #[error("search aborted: {0}")]
    Inconsistent(#[from] MoveError),
}

/// Check if the winners end on more than one position.
///
/// This is the only ambiguity rule; it runs after every expanded state and
/// once more when the search finishes.
fn is_conflicting(winners: &[State]) -> bool {
    match winners.split_first() {
        Some((first, rest)) => rest.iter().any(|w| w.occupancy() != first.occupancy()),
        None => false,
    }
}

/// Turn the collected winners into a [`Solution`].
pub fn classify(mut winners: Vec<State>) -> Solution {
    if winners.is_empty() {
        Solution::NoSolution
    } else if is_conflicting(&winners) {
        Solution::Ambiguous(winners)
    } else {
        Solution::Unique(winners.swap_remove(0))
    }
}

/// Level-order search over capture sequences.
pub struct Solver {
    /// Solver statistics
    pub stats: SolverStats,
    running: Option<Arc<AtomicBool>>,
}

impl Solver {
    pub fn new() -> Self {
        Self {
            stats: SolverStats::new(),
            running: None,
        }
    }

    /// A solver that stops when `running` is cleared.
    ///
    /// The flag is checked between generations only, so an interrupted
    /// search never reports a partially compared set of winners.
    pub fn with_interrupt(running: Arc<AtomicBool>) -> Self {
        Self {
            stats: SolverStats::new(),
            running: Some(running),
        }
    }

    fn interrupted(&self) -> bool {
        self.running
            .as_ref()
            .map(|r| !r.load(Ordering::SeqCst))
            .unwrap_or(false)
    }

    /// Solve from the given state.
    ///
    /// A state that already has a single piece is its own unique solution,
    /// with no moves played.
    pub fn solve(&mut self, initial: State) -> Result<Solution, SolveError> {
        if initial.is_terminal() {
            debug!("initial position already has a single piece");
            return Ok(Solution::Unique(initial));
        }

        let mut current = vec![initial];
        let mut next: Vec<State> = Vec::new();
        let mut winners: Vec<State> = Vec::new();
        let mut depth = 0;

        while !current.is_empty() {
            if self.interrupted() {
                warn!("interrupted at depth {}", depth);
                return Err(SolveError::Interrupted { depth });
            }
            self.stats.begin_generation(depth, &current);

            for state in &current {
                let children = state.children()?;
                let found = winners.len();
                winners.extend(children.iter().filter(|c| c.is_terminal()).cloned());
                self.stats
                    .record_expansion(children.len(), winners.len() - found);

                if is_conflicting(&winners) {
                    warn!(
                        "ambiguous puzzle: {} winners with different end positions at depth {}",
                        winners.len(),
                        depth + 1
                    );
                    self.stats.log_summary();
                    return Ok(Solution::Ambiguous(winners));
                }
                next.extend(children);
            }

            current = std::mem::take(&mut next);
            depth += 1;
        }

        self.stats.log_summary();
        let solution = classify(winners);
        match &solution {
            Solution::NoSolution => info!("no solution"),
            Solution::Unique(winner) => info!("solved in {} moves", winner.depth()),
            Solution::Ambiguous(winners) => warn!("ambiguous puzzle: {} winners", winners.len()),
        }
        Ok(solution)
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}
