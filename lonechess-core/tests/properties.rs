//! Randomised checks of the move rules and state transitions.

use rand::prelude::*;

use lonechess_core::{BoardSize, Occupancy, Piece, PuzzleError, Square, State};

const ITERATIONS: usize = 500;

/// A random arrangement of `1..=max` pieces on distinct squares.
fn random_occupancy(rng: &mut impl Rng, size: BoardSize, max: usize) -> Occupancy {
    let mut squares: Vec<Square> = size.squares().collect();
    squares.shuffle(rng);
    let count = rng.random_range(1..=max.min(squares.len()));
    squares
        .into_iter()
        .take(count)
        .map(|sq| (sq, Piece::ALL[rng.random_range(0..Piece::ALL.len())]))
        .collect()
}

#[test]
fn test_every_legal_move_removes_one_piece() {
    let mut rng = rand::rng();
    for _ in 0..ITERATIONS {
        let state = State::new(BoardSize::STANDARD, random_occupancy(&mut rng, BoardSize::STANDARD, 10)).unwrap();
        let before = state.occupancy().len();
        for mov in state.legal_moves() {
            let child = state.apply(mov).expect("legal move must apply");
            assert_eq!(child.occupancy().len(), before - 1);
            assert_eq!(child.depth(), state.depth() + 1);

            // The validating path agrees with the enumerator.
            let played = state.play(mov).expect("legal move must pass validation");
            assert_eq!(played.occupancy(), child.occupancy());
        }
    }
}

#[test]
fn test_moves_always_capture() {
    let mut rng = rand::rng();
    for _ in 0..ITERATIONS {
        let state = State::new(BoardSize::STANDARD, random_occupancy(&mut rng, BoardSize::STANDARD, 10)).unwrap();
        for mov in state.legal_moves() {
            assert!(state.occupancy().is_occupied(mov.from));
            assert!(state.occupancy().is_occupied(mov.to));
            assert_ne!(mov.from, mov.to);
        }
    }
}

#[test]
fn test_single_piece_is_terminal() {
    let size = BoardSize::STANDARD;
    for sq in size.squares() {
        for piece in Piece::ALL {
            let state = State::new(size, [(sq, piece)].into_iter().collect()).unwrap();
            assert!(state.is_terminal());
            assert!(state.legal_moves().is_empty(), "{} on {} has a move", piece, sq);
        }
    }
}

#[test]
fn test_pawn_and_knight_ignore_occupancy() {
    let mut rng = rand::rng();
    let empty = Occupancy::new();
    for _ in 0..ITERATIONS {
        let occ = random_occupancy(&mut rng, BoardSize::STANDARD, 12);
        for (from, piece) in occ.iter() {
            if !matches!(piece, Piece::Pawn | Piece::Knight) {
                continue;
            }
            let with: Vec<Square> = piece.candidates(from, &occ, BoardSize::STANDARD).collect();
            let without: Vec<Square> = piece.candidates(from, &empty, BoardSize::STANDARD).collect();
            assert_eq!(with, without);
        }
    }
}

#[test]
fn test_sliders_stop_at_first_piece() {
    let mut rng = rand::rng();
    let size = BoardSize::new(5, 6);
    for _ in 0..ITERATIONS {
        let occ = random_occupancy(&mut rng, size, 14);
        for (from, piece) in occ.iter() {
            if !piece.is_slider() {
                continue;
            }
            for to in piece.candidates(from, &occ, size) {
                assert!(occ.is_occupied(to), "{} yielded empty square {}", piece, to);
                let drow = (to.row - from.row).signum();
                let dcol = (to.col - from.col).signum();
                let steps = (to.row - from.row).abs().max((to.col - from.col).abs());
                assert!(
                    (to.row - from.row).abs() == steps * drow.abs()
                        && (to.col - from.col).abs() == steps * dcol.abs(),
                    "{} to {} is not a straight line",
                    from,
                    to
                );
                for k in 1..steps {
                    let between = from.offset(drow * k, dcol * k).unwrap();
                    assert!(!occ.is_occupied(between), "{} jumped over {}", piece, between);
                }
            }
        }
    }
}

#[test]
fn test_random_playouts_keep_history_consistent() {
    let mut rng = rand::rng();
    for _ in 0..ITERATIONS {
        let mut state = State::new(BoardSize::STANDARD, random_occupancy(&mut rng, BoardSize::STANDARD, 8)).unwrap();
        let start = state.occupancy().len();
        let mut played = Vec::new();
        loop {
            let moves = state.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mov = moves[rng.random_range(0..moves.len())];
            played.push(mov);
            state = state.apply(mov).unwrap();
        }

        assert_eq!(state.depth(), played.len());
        assert_eq!(state.occupancy().len(), start - played.len());

        let trace = state.trace();
        for pair in trace.windows(2) {
            assert_eq!(pair[1].len() + 1, pair[0].len());
        }

        // Replaying the recovered moves reproduces each snapshot.
        let recovered = state.moves().expect("every step is a legal capture");
        let mut replay = State::new(state.size(), state.initial().clone()).unwrap();
        for (mov, expected) in recovered.iter().zip(state.history().snapshots()) {
            replay = replay.play(*mov).unwrap();
            assert_eq!(replay.occupancy(), expected);
        }
    }
}

#[test]
fn test_off_board_arrangements_are_rejected() {
    let mut rng = rand::rng();
    let extremes = [i32::MIN, -1, 0, 3, 4, i32::MAX];
    for _ in 0..ITERATIONS {
        let mut occ = random_occupancy(&mut rng, BoardSize::STANDARD, 4);
        let stray = Square::new(
            extremes[rng.random_range(0..extremes.len())],
            extremes[rng.random_range(0..extremes.len())],
        );
        occ.insert(stray, Piece::ALL[rng.random_range(0..Piece::ALL.len())]);

        // Candidate generation from any square must not overflow.
        for (from, piece) in occ.iter() {
            let _ = piece.candidates(from, &occ, BoardSize::STANDARD).count();
        }

        let result = State::new(BoardSize::STANDARD, occ);
        if BoardSize::STANDARD.contains(stray) {
            assert!(result.is_ok());
        } else {
            assert!(
                matches!(result, Err(PuzzleError::OutOfBounds { .. })),
                "{} accepted on a 4x4 board",
                stray
            );
        }
    }
}

#[test]
fn test_zero_sized_boards_are_rejected() {
    let occ: Occupancy = [(Square::new(0, 0), Piece::Rook)].into_iter().collect();
    for size in [BoardSize::new(0, 0), BoardSize::new(0, 4), BoardSize::new(4, 0)] {
        assert_eq!(State::new(size, occ.clone()).unwrap_err(), PuzzleError::EmptyBoard);
    }
}
