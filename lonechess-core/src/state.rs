//! Board states, capture moves and move application.

use std::fmt;
use std::sync::Arc;

use log::trace;

use crate::error::MoveError;
use crate::occupancy::Occupancy;
use crate::puzzle::PuzzleError;
use crate::square::{BoardSize, Square};

/// A capture: the piece on `from` takes the piece on `to`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

#[derive(Debug)]
struct Link {
    snapshot: Arc<Occupancy>,
    prev: Option<Arc<Link>>,
}

/// Persistent list of the occupancies produced by each move, oldest first.
///
/// Children share their parent's list and add one link, so no snapshot is
/// ever copied or mutated after it is recorded.
#[derive(Clone, Debug, Default)]
pub struct History {
    head: Option<Arc<Link>>,
    len: usize,
}

impl History {
    fn push(&self, snapshot: Arc<Occupancy>) -> History {
        History {
            head: Some(Arc::new(Link {
                snapshot,
                prev: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Number of moves recorded.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The most recent snapshot.
    pub fn last(&self) -> Option<&Occupancy> {
        self.head.as_deref().map(|link| &*link.snapshot)
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> Vec<&Occupancy> {
        let mut out = Vec::with_capacity(self.len);
        let mut link = self.head.as_deref();
        while let Some(l) = link {
            out.push(&*l.snapshot);
            link = l.prev.as_deref();
        }
        out.reverse();
        out
    }
}

/// One node of the search: the current position plus how it was reached.
///
/// States are never modified; every move produces a new state.
#[derive(Clone, Debug)]
pub struct State {
    size: BoardSize,
    initial: Arc<Occupancy>,
    occupancy: Arc<Occupancy>,
    history: History,
}

impl State {
    /// Create a root state with an empty history.
    ///
    /// Fails if the board has no squares or a piece lies off the board.
    pub fn new(size: BoardSize, occupancy: Occupancy) -> Result<State, PuzzleError> {
        if size.is_empty() {
            return Err(PuzzleError::EmptyBoard);
        }
        if let Some(square) = occupancy.squares().find(|&sq| !size.contains(sq)) {
            return Err(PuzzleError::OutOfBounds { square, size });
        }
        Ok(State::root(size, occupancy))
    }

    /// Root state for an occupancy already known to fit the board.
    fn root(size: BoardSize, occupancy: Occupancy) -> State {
        let occupancy = Arc::new(occupancy);
        State {
            size,
            initial: occupancy.clone(),
            occupancy,
            history: History::default(),
        }
    }

    #[inline]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// The current position.
    #[inline]
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// The position this state's history started from.
    pub fn initial(&self) -> &Occupancy {
        &self.initial
    }

    /// Positions produced by each move so far, oldest first. Excludes the
    /// initial position.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Number of moves played to reach this state.
    #[inline]
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// The initial position followed by every position in the history.
    pub fn trace(&self) -> Vec<&Occupancy> {
        let mut out = Vec::with_capacity(self.history.len() + 1);
        out.push(&*self.initial);
        out.extend(self.history.snapshots());
        out
    }

    /// Check if exactly one piece is left.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.occupancy.len() == 1
    }

    /// All captures available in this position.
    ///
    /// Ordered by origin square (row-major), then by the piece's candidate
    /// order.
    pub fn legal_moves(&self) -> Vec<Move> {
        let occ = &*self.occupancy;
        let mut moves = Vec::new();
        for (from, piece) in occ.iter() {
            moves.extend(
                piece
                    .candidates(from, occ, self.size)
                    .filter(|&to| occ.is_occupied(to))
                    .map(|to| Move { from, to }),
            );
        }
        moves
    }

    /// Apply a move without checking that it is legal.
    ///
    /// Only the origin is validated. The resulting state must hold exactly
    /// one piece fewer, otherwise [`MoveError::PieceCount`] is returned.
    pub fn apply(&self, mov: Move) -> Result<State, MoveError> {
        let piece = self
            .occupancy
            .get(mov.from)
            .ok_or(MoveError::EmptyOrigin(mov.from))?;

        let mut next = (*self.occupancy).clone();
        next.remove(mov.from);
        next.insert(mov.to, piece);

        let before = self.occupancy.len();
        if next.len() + 1 != before {
            return Err(MoveError::PieceCount {
                before,
                after: next.len(),
            });
        }

        trace!("apply {} {}: {} -> {} pieces", piece, mov, before, next.len());

        let next = Arc::new(next);
        Ok(State {
            size: self.size,
            initial: self.initial.clone(),
            occupancy: next.clone(),
            history: self.history.push(next),
        })
    }

    /// Apply a move after checking it is a legal capture.
    pub fn play(&self, mov: Move) -> Result<State, MoveError> {
        let piece = self
            .occupancy
            .get(mov.from)
            .ok_or(MoveError::EmptyOrigin(mov.from))?;
        if !self.occupancy.is_occupied(mov.to) {
            return Err(MoveError::NotACapture {
                from: mov.from,
                to: mov.to,
            });
        }
        if !piece
            .candidates(mov.from, &self.occupancy, self.size)
            .any(|sq| sq == mov.to)
        {
            return Err(MoveError::Unreachable {
                piece,
                from: mov.from,
                to: mov.to,
            });
        }
        self.apply(mov)
    }

    /// Every state reachable with one move, in [`legal_moves`](Self::legal_moves) order.
    pub fn children(&self) -> Result<Vec<State>, MoveError> {
        self.legal_moves()
            .into_iter()
            .map(|mov| self.apply(mov))
            .collect()
    }

    /// Find the legal move that turns this position into `next`.
    pub fn find_move(&self, next: &Occupancy) -> Option<Move> {
        self.legal_moves().into_iter().find(|&mov| {
            self.apply(mov)
                .map(|child| child.occupancy() == next)
                .unwrap_or(false)
        })
    }

    /// Recover the moves along this state's trace.
    ///
    /// Returns `None` if some step of the history is not a legal capture.
    pub fn moves(&self) -> Option<Vec<Move>> {
        let trace = self.trace();
        trace
            .windows(2)
            .map(|pair| State::root(self.size, pair[0].clone()).find_move(pair[1]))
            .collect()
    }
}
