//! Puzzle definitions: the board size and starting arrangement.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::occupancy::Occupancy;
use crate::piece::Piece;
use crate::square::{BoardSize, Square};
use crate::state::State;

/// One piece in a puzzle's starting arrangement.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Placement {
    pub row: i32,
    pub col: i32,
    #[serde(deserialize_with = "piece_from_str")]
    pub piece: Piece,
}

/// Accept any spelling [`Piece::from_str`] does: name, letter or glyph.
fn piece_from_str<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Piece, D::Error> {
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(serde::de::Error::custom)
}

impl Placement {
    pub fn square(&self) -> Square {
        Square::new(self.row, self.col)
    }
}

fn default_side() -> u16 {
    4
}

/// A solitaire chess puzzle.
///
/// Deserializes from JSON such as
/// `{"rows": 4, "cols": 4, "pieces": [{"row": 0, "col": 0, "piece": "knight"}]}`.
/// `rows` and `cols` default to 4.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Puzzle {
    #[serde(default = "default_side")]
    pub rows: u16,
    #[serde(default = "default_side")]
    pub cols: u16,
    pub pieces: Vec<Placement>,
}

/// A puzzle definition that cannot be played.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum PuzzleError {
    /// The board has no squares.
    #[error("board has no squares")]
    EmptyBoard,
    /// No pieces were placed.
    #[error("puzzle has no pieces")]
    NoPieces,
    /// A piece lies outside the board.
    #[error("square {square} is outside the {size} board")]
    OutOfBounds { square: Square, size: BoardSize },
    /// Two pieces share a square.
    #[error("square {0} holds more than one piece")]
    Duplicate(Square),
    /// A grid character is neither a piece nor `.`.
    #[error("line {line}: unknown piece {glyph:?}")]
    BadGlyph { line: usize, glyph: char },
    /// A grid line differs in width from the first line.
    #[error("line {line}: expected {expected} squares, found {found}")]
    RaggedGrid { line: usize, expected: usize, found: usize },
}

impl Puzzle {
    pub fn new(size: BoardSize, pieces: Vec<Placement>) -> Puzzle {
        Puzzle {
            rows: size.rows,
            cols: size.cols,
            pieces,
        }
    }

    /// The 6-piece 4×4 reference puzzle.
    pub fn reference() -> Puzzle {
        let place = |row, col, piece| Placement { row, col, piece };
        Puzzle::new(
            BoardSize::STANDARD,
            vec![
                place(0, 0, Piece::Knight),
                place(0, 1, Piece::Rook),
                place(1, 1, Piece::King),
                place(1, 3, Piece::Knight),
                place(2, 0, Piece::Pawn),
                place(2, 2, Piece::Bishop),
            ],
        )
    }

    /// Parse a board drawn one row per line, with `.` for empty squares and
    /// a glyph or letter for each piece. Blank lines and surrounding
    /// whitespace are ignored.
    ///
    /// ```
    /// use lonechess_core::Puzzle;
    ///
    /// let puzzle = Puzzle::from_grid("
    ///     N...
    ///     ..P.
    /// ").unwrap();
    /// assert_eq!((puzzle.rows, puzzle.cols), (2, 4));
    /// assert_eq!(puzzle.pieces.len(), 2);
    /// ```
    pub fn from_grid(text: &str) -> Result<Puzzle, PuzzleError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let cols = lines.first().map(|line| line.chars().count()).unwrap_or(0);
        let mut pieces = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(PuzzleError::RaggedGrid {
                    line: row + 1,
                    expected: cols,
                    found,
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                if glyph == '.' {
                    continue;
                }
                let piece =
                    Piece::from_char(glyph).ok_or(PuzzleError::BadGlyph { line: row + 1, glyph })?;
                pieces.push(Placement {
                    row: row as i32,
                    col: col as i32,
                    piece,
                });
            }
        }

        let puzzle = Puzzle {
            rows: u16::try_from(lines.len()).unwrap_or(u16::MAX),
            cols: u16::try_from(cols).unwrap_or(u16::MAX),
            pieces,
        };
        puzzle.validate()?;
        Ok(puzzle)
    }

    pub fn size(&self) -> BoardSize {
        BoardSize::new(self.rows, self.cols)
    }

    /// Check the board is non-empty and every piece sits alone on a square
    /// of the board.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        let size = self.size();
        if size.is_empty() {
            return Err(PuzzleError::EmptyBoard);
        }
        if self.pieces.is_empty() {
            return Err(PuzzleError::NoPieces);
        }
        let mut seen = HashSet::new();
        for placement in &self.pieces {
            let square = placement.square();
            if !size.contains(square) {
                return Err(PuzzleError::OutOfBounds { square, size });
            }
            if !seen.insert(square) {
                return Err(PuzzleError::Duplicate(square));
            }
        }
        Ok(())
    }

    /// The starting arrangement as an occupancy.
    pub fn occupancy(&self) -> Result<Occupancy, PuzzleError> {
        self.validate()?;
        Ok(self
            .pieces
            .iter()
            .map(|placement| (placement.square(), placement.piece))
            .collect())
    }

    /// The root search state: the starting arrangement with no history.
    pub fn initial_state(&self) -> Result<State, PuzzleError> {
        State::new(self.size(), self.occupancy()?)
    }
}
