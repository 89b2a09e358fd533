//! Errors raised when applying moves.

use thiserror::Error;

use crate::piece::Piece;
use crate::square::Square;

/// A move could not be applied.
///
/// Everything except [`MoveError::PieceCount`] is a rejected request.
/// `PieceCount` means move application itself broke its post-condition
/// and the state it would have produced must not be used.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum MoveError {
    /// No piece stands on the origin square.
    #[error("no piece on {0}")]
    EmptyOrigin(Square),
    /// The destination is empty; every move must capture.
    #[error("move {from}->{to} does not capture")]
    NotACapture { from: Square, to: Square },
    /// The piece on the origin cannot reach the destination.
    #[error("{piece} on {from} cannot reach {to}")]
    Unreachable { piece: Piece, from: Square, to: Square },
    /// Applying the move did not remove exactly one piece.
    #[error("internal consistency error: piece count went from {before} to {after}")]
    PieceCount { before: usize, after: usize },
}
