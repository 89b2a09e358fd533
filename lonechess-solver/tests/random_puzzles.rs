//! Solver results checked against exhaustive enumeration on random boards.

use std::collections::HashSet;

use rand::prelude::*;

use lonechess_core::{BoardSize, Occupancy, Piece, Square, State};
use lonechess_solver::{Solution, Solver};

const ITERATIONS: usize = 200;

fn random_state(rng: &mut impl Rng) -> State {
    let size = BoardSize::STANDARD;
    let mut squares: Vec<Square> = size.squares().collect();
    squares.shuffle(rng);
    let count = rng.random_range(1..=6);
    let occ: Occupancy = squares
        .into_iter()
        .take(count)
        .map(|sq| (sq, Piece::ALL[rng.random_range(0..Piece::ALL.len())]))
        .collect();
    State::new(size, occ).unwrap()
}

/// Every distinct single-piece position reachable from `root`.
fn all_end_positions(root: &State) -> HashSet<Occupancy> {
    let mut ends = HashSet::new();
    if root.is_terminal() {
        ends.insert(root.occupancy().clone());
    }
    let mut frontier = vec![root.clone()];
    while let Some(state) = frontier.pop() {
        for child in state.children().unwrap() {
            if child.is_terminal() {
                ends.insert(child.occupancy().clone());
            } else {
                frontier.push(child);
            }
        }
    }
    ends
}

#[test]
fn test_solver_agrees_with_enumeration() {
    let mut rng = rand::rng();
    for _ in 0..ITERATIONS {
        let root = random_state(&mut rng);
        let ends = all_end_positions(&root);
        let solution = Solver::new().solve(root.clone()).unwrap();

        match ends.len() {
            0 => assert!(matches!(solution, Solution::NoSolution)),
            1 => {
                let winner = solution.unique().expect("single end position");
                assert!(ends.contains(winner.occupancy()));
            }
            _ => {
                assert!(solution.is_ambiguous());
                let seen: HashSet<&Occupancy> =
                    solution.winners().iter().map(|w| w.occupancy()).collect();
                assert!(seen.len() > 1);
                assert!(seen.iter().all(|occ| ends.contains(*occ)));
            }
        }
    }
}

#[test]
fn test_winners_replay_from_root() {
    let mut rng = rand::rng();
    for _ in 0..ITERATIONS {
        let root = random_state(&mut rng);
        let pieces = root.occupancy().len();
        let solution = Solver::new().solve(root.clone()).unwrap();

        for winner in solution.winners() {
            assert!(winner.is_terminal());
            assert_eq!(winner.depth(), pieces - 1);
            assert_eq!(winner.initial(), root.occupancy());

            let moves = winner.moves().expect("history is made of legal captures");
            let mut replay = root.clone();
            for (mov, expected) in moves.into_iter().zip(winner.history().snapshots()) {
                replay = replay.play(mov).unwrap();
                assert_eq!(replay.occupancy(), expected);
            }
            assert_eq!(replay.occupancy(), winner.occupancy());
        }
    }
}
