//! Square-to-piece mapping for one board position.

use std::collections::BTreeMap;

use crate::piece::Piece;
use crate::square::Square;

/// The pieces on the board, keyed by square.
///
/// Iteration is in row-major square order, which makes move enumeration
/// deterministic.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct Occupancy {
    pieces: BTreeMap<Square, Piece>,
}

impl Occupancy {
    pub fn new() -> Occupancy {
        Occupancy::default()
    }

    /// Get the piece on a square.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.pieces.get(&sq).copied()
    }

    /// Check if a square holds a piece.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.pieces.contains_key(&sq)
    }

    /// Put a piece on a square, returning whatever was there.
    pub fn insert(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.pieces.insert(sq, piece)
    }

    /// Take the piece off a square.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.pieces.remove(&sq)
    }

    /// Number of pieces on the board.
    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// The only piece left, if exactly one remains.
    pub fn sole_piece(&self) -> Option<(Square, Piece)> {
        if self.pieces.len() == 1 {
            self.iter().next()
        } else {
            None
        }
    }

    /// Iterate over `(square, piece)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces.iter().map(|(&sq, &piece)| (sq, piece))
    }

    /// Iterate over occupied squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.pieces.keys().copied()
    }
}

impl FromIterator<(Square, Piece)> for Occupancy {
    fn from_iter<I: IntoIterator<Item = (Square, Piece)>>(iter: I) -> Self {
        Occupancy {
            pieces: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites() {
        let mut occ = Occupancy::new();
        assert_eq!(occ.insert(Square::new(1, 1), Piece::Rook), None);
        assert_eq!(occ.insert(Square::new(1, 1), Piece::King), Some(Piece::Rook));
        assert_eq!(occ.len(), 1);
        assert_eq!(occ.get(Square::new(1, 1)), Some(Piece::King));
    }

    #[test]
    fn test_sole_piece() {
        let mut occ = Occupancy::new();
        assert_eq!(occ.sole_piece(), None);
        occ.insert(Square::new(2, 0), Piece::Pawn);
        assert_eq!(occ.sole_piece(), Some((Square::new(2, 0), Piece::Pawn)));
        occ.insert(Square::new(0, 0), Piece::Pawn);
        assert_eq!(occ.sole_piece(), None);
    }

    #[test]
    fn test_iteration_order_ignores_insertion_order() {
        let occ: Occupancy = [
            (Square::new(2, 2), Piece::Bishop),
            (Square::new(0, 1), Piece::Rook),
            (Square::new(1, 0), Piece::Knight),
        ]
        .into_iter()
        .collect();
        let squares: Vec<Square> = occ.squares().collect();
        assert_eq!(
            squares,
            vec![Square::new(0, 1), Square::new(1, 0), Square::new(2, 2)]
        );
    }

    #[test]
    fn test_equality_is_structural() {
        let a: Occupancy = [(Square::new(0, 0), Piece::Queen)].into_iter().collect();
        let mut b = Occupancy::new();
        b.insert(Square::new(3, 3), Piece::Pawn);
        b.insert(Square::new(0, 0), Piece::Queen);
        b.remove(Square::new(3, 3));
        assert_eq!(a, b);
    }
}
