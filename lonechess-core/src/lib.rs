//! Solitaire chess rules.
//!
//! A solitaire chess puzzle places uncoloured chess pieces on a small board.
//! Every move must capture another piece, so each move removes exactly one
//! piece; the puzzle is solved when a single piece remains.
//!
//! # Coordinates
//!
//! ```text
//! Squares are (row, col), row 0 at the top:
//!   (0,0) (0,1) (0,2) (0,3)
//!   (1,0) (1,1) (1,2) (1,3)
//!   (2,0) (2,1) (2,2) (2,3)
//!   (3,0) (3,1) (3,2) (3,3)
//!
//! Pawns capture toward row 0: (r,c) -> (r-1,c+1), (r-1,c-1)
//! ```
//!
//! # Layers
//!
//! - [`Piece::candidates`]: per-variant move rules.
//! - [`State::legal_moves`]: candidates filtered to captures.
//! - [`State::apply`]: produce the child state for one capture.
//! - [`Puzzle`]: validated starting arrangements.

mod error;
mod occupancy;
mod piece;
mod puzzle;
mod square;
mod state;

pub use error::MoveError;
pub use occupancy::Occupancy;
pub use piece::{Candidates, Piece, UnknownPiece};
pub use puzzle::{Placement, Puzzle, PuzzleError};
pub use square::{BoardSize, Square};
pub use state::{History, Move, State};
