//! Board coordinates and board dimensions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A board coordinate.
///
/// Row 0 is the top of the board; pawns advance toward smaller rows.
/// Coordinates are signed so that move rules may produce off-board
/// candidates, which are discarded by the capture filter.
///
/// Layout of a 4×4 board:
/// ```text
///   (0,0) (0,1) (0,2) (0,3)
///   (1,0) (1,1) (1,2) (1,3)
///   (2,0) (2,1) (2,2) (2,3)
///   (3,0) (3,1) (3,2) (3,3)
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct Square {
    pub row: i32,
    pub col: i32,
}

impl Square {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Square {
        Square { row, col }
    }

    /// The square displaced by `(drow, dcol)`, or `None` if a coordinate
    /// overflows.
    #[inline]
    pub fn offset(self, drow: i32, dcol: i32) -> Option<Square> {
        Some(Square {
            row: self.row.checked_add(drow)?,
            col: self.col.checked_add(dcol)?,
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Square {
    fn from((row, col): (i32, i32)) -> Square {
        Square { row, col }
    }
}

/// Board dimensions. Valid squares are `0..rows` × `0..cols`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct BoardSize {
    pub rows: u16,
    pub cols: u16,
}

impl BoardSize {
    /// The 4×4 board used by the reference puzzle.
    pub const STANDARD: BoardSize = BoardSize { rows: 4, cols: 4 };

    pub const fn new(rows: u16, cols: u16) -> BoardSize {
        BoardSize { rows, cols }
    }

    /// Check if the square lies on the board.
    #[inline]
    pub fn contains(self, sq: Square) -> bool {
        sq.row >= 0 && sq.col >= 0 && sq.row < i32::from(self.rows) && sq.col < i32::from(self.cols)
    }

    /// A board with no squares cannot hold a puzzle.
    pub fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Iterate over all squares in row-major order.
    pub fn squares(self) -> impl Iterator<Item = Square> {
        let cols = i32::from(self.cols);
        (0..i32::from(self.rows)).flat_map(move |row| (0..cols).map(move |col| Square { row, col }))
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        BoardSize::STANDARD
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_exclusive() {
        let size = BoardSize::STANDARD;
        assert!(size.contains(Square::new(0, 0)));
        assert!(size.contains(Square::new(3, 3)));
        assert!(!size.contains(Square::new(4, 0)));
        assert!(!size.contains(Square::new(0, 4)));
        assert!(!size.contains(Square::new(-1, 2)));
    }

    #[test]
    fn test_rectangular_board() {
        let size = BoardSize::new(2, 5);
        assert!(size.contains(Square::new(1, 4)));
        assert!(!size.contains(Square::new(2, 0)));
        assert_eq!(size.squares().count(), 10);
    }

    #[test]
    fn test_squares_row_major() {
        let squares: Vec<Square> = BoardSize::new(2, 2).squares().collect();
        assert_eq!(
            squares,
            vec![
                Square::new(0, 0),
                Square::new(0, 1),
                Square::new(1, 0),
                Square::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_square_ordering_is_row_major() {
        assert!(Square::new(0, 3) < Square::new(1, 0));
        assert!(Square::new(1, 0) < Square::new(1, 1));
    }

    #[test]
    fn test_offset_overflow() {
        assert_eq!(Square::new(1, 1).offset(-1, 2), Some(Square::new(0, 3)));
        assert_eq!(Square::new(i32::MAX, 0).offset(1, 0), None);
        assert_eq!(Square::new(0, i32::MIN).offset(0, -2), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Square::new(1, 3).to_string(), "(1,3)");
        assert_eq!(BoardSize::STANDARD.to_string(), "4x4");
    }

    #[test]
    fn test_empty_board() {
        assert!(BoardSize::new(0, 4).is_empty());
        assert!(!BoardSize::STANDARD.is_empty());
    }
}
