//! Piece variants and their move rules.
//!
//! Every rule produces candidate destination squares lazily. Only the King
//! and the sliding pieces look at the occupancy; Pawn and Knight candidates
//! depend on the origin alone and may fall off the board. The capture
//! filter in [`State::legal_moves`](crate::State::legal_moves) discards
//! anything that is not an occupied square.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::occupancy::Occupancy;
use crate::square::{BoardSize, Square};

/// One of the six chess piece variants. Pieces have no colour.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Piece {
    Pawn,
    King,
    Bishop,
    Rook,
    Queen,
    Knight,
}

/// How a piece uses its offset table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Reach {
    /// Every offset is a candidate.
    Step,
    /// Offsets landing on an occupied square are candidates.
    StepOntoOccupied,
    /// Offsets are directions; the first occupied square along each is a candidate.
    Slide,
}

const PAWN_STEPS: [(i32, i32); 2] = [(-1, 1), (-1, -1)];

const KING_STEPS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const KNIGHT_STEPS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const BISHOP_DIRS: [(i32, i32); 4] = [(-1, -1), (1, 1), (-1, 1), (1, -1)];

const ROOK_DIRS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

// Bishop directions followed by rook directions.
const QUEEN_DIRS: [(i32, i32); 8] = [
    (-1, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (0, 1),
    (0, -1),
];

impl Piece {
    /// All variants, in declaration order.
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::King,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::Knight,
    ];

    /// Board glyph used when rendering.
    pub fn glyph(self) -> char {
        match self {
            Piece::Pawn => '♟',
            Piece::King => '♚',
            Piece::Bishop => '♝',
            Piece::Rook => '♜',
            Piece::Queen => '♛',
            Piece::Knight => '♞',
        }
    }

    /// ASCII letter (upper case).
    pub fn letter(self) -> char {
        match self {
            Piece::Pawn => 'P',
            Piece::King => 'K',
            Piece::Bishop => 'B',
            Piece::Rook => 'R',
            Piece::Queen => 'Q',
            Piece::Knight => 'N',
        }
    }

    /// Parse a glyph or an ASCII letter in either case.
    pub fn from_char(c: char) -> Option<Piece> {
        Piece::ALL
            .into_iter()
            .find(|p| p.glyph() == c || p.letter() == c.to_ascii_uppercase())
    }

    pub fn name(self) -> &'static str {
        match self {
            Piece::Pawn => "pawn",
            Piece::King => "king",
            Piece::Bishop => "bishop",
            Piece::Rook => "rook",
            Piece::Queen => "queen",
            Piece::Knight => "knight",
        }
    }

    /// Check if this piece slides until it hits another piece.
    #[inline]
    pub fn is_slider(self) -> bool {
        self.reach() == Reach::Slide
    }

    fn reach(self) -> Reach {
        match self {
            Piece::Pawn | Piece::Knight => Reach::Step,
            Piece::King => Reach::StepOntoOccupied,
            Piece::Bishop | Piece::Rook | Piece::Queen => Reach::Slide,
        }
    }

    fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Piece::Pawn => &PAWN_STEPS,
            Piece::King => &KING_STEPS,
            Piece::Knight => &KNIGHT_STEPS,
            Piece::Bishop => &BISHOP_DIRS,
            Piece::Rook => &ROOK_DIRS,
            Piece::Queen => &QUEEN_DIRS,
        }
    }

    /// Candidate destinations for this piece standing on `from`.
    ///
    /// The sequence is lazy and depends only on its arguments, so calling
    /// this again yields the same squares in the same order.
    pub fn candidates<'a>(
        self,
        from: Square,
        occupancy: &'a Occupancy,
        size: BoardSize,
    ) -> Candidates<'a> {
        Candidates {
            piece: self,
            from,
            occupancy,
            size,
            offsets: self.offsets(),
            idx: 0,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no piece.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
#[error("unknown piece: {0:?}")]
pub struct UnknownPiece(pub String);

impl FromStr for Piece {
    type Err = UnknownPiece;

    /// Accepts a lowercase or capitalised name, a single letter or a glyph.
    fn from_str(s: &str) -> Result<Piece, UnknownPiece> {
        let s = s.trim();
        if let Some(piece) = Piece::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
        {
            return Ok(piece);
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Piece::from_char(c).ok_or_else(|| UnknownPiece(s.to_string())),
            _ => Err(UnknownPiece(s.to_string())),
        }
    }
}

/// Lazy candidate-square iterator returned by [`Piece::candidates`].
#[derive(Clone, Debug)]
pub struct Candidates<'a> {
    piece: Piece,
    from: Square,
    occupancy: &'a Occupancy,
    size: BoardSize,
    offsets: &'static [(i32, i32)],
    idx: usize,
}

impl Candidates<'_> {
    /// Walk from the origin in one direction and return the first occupied
    /// square before leaving the board.
    fn first_hit(&self, drow: i32, dcol: i32) -> Option<Square> {
        let mut sq = self.from.offset(drow, dcol)?;
        while self.size.contains(sq) {
            if self.occupancy.is_occupied(sq) {
                return Some(sq);
            }
            sq = sq.offset(drow, dcol)?;
        }
        None
    }
}

impl Iterator for Candidates<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        while let Some(&(drow, dcol)) = self.offsets.get(self.idx) {
            self.idx += 1;
            match self.piece.reach() {
                Reach::Step => {
                    if let Some(sq) = self.from.offset(drow, dcol) {
                        return Some(sq);
                    }
                }
                Reach::StepOntoOccupied => {
                    if let Some(sq) = self.from.offset(drow, dcol) {
                        if self.occupancy.is_occupied(sq) {
                            return Some(sq);
                        }
                    }
                }
                Reach::Slide => {
                    if let Some(sq) = self.first_hit(drow, dcol) {
                        return Some(sq);
                    }
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.offsets.len() - self.idx))
    }
}
