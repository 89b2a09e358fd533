//! Text rendering of boards and solution traces.
//!
//! Each board is a separator line of `-`, one character per column, followed
//! by one line per row: the piece glyph or `.` for an empty square.

use lonechess_core::{BoardSize, Occupancy, State};

const EMPTY: char = '.';
const SEPARATOR: char = '-';

/// Render one position.
pub fn render_board(occupancy: &Occupancy, size: BoardSize) -> String {
    let mut out = String::new();
    for _ in 0..size.cols {
        out.push(SEPARATOR);
    }
    out.push('\n');
    for row in 0..i32::from(size.rows) {
        for col in 0..i32::from(size.cols) {
            let glyph = occupancy
                .get((row, col).into())
                .map(|p| p.glyph())
                .unwrap_or(EMPTY);
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

/// Render the initial position followed by every position in the state's
/// history.
pub fn render_trace(state: &State) -> String {
    state
        .trace()
        .into_iter()
        .map(|occ| render_board(occ, state.size()))
        .collect()
}

/// Like [`render_trace`], with the capture played before each board.
pub fn render_annotated(state: &State) -> String {
    let moves = state.moves().unwrap_or_default();
    let mut out = String::new();
    for (i, occ) in state.trace().into_iter().enumerate() {
        if i == 0 {
            out.push_str("start\n");
        } else if let Some(mov) = moves.get(i - 1) {
            // The mover now stands on the captured square.
            match occ.get(mov.to) {
                Some(piece) => out.push_str(&format!("{}. {} {}\n", i, piece, mov)),
                None => out.push_str(&format!("{}. {}\n", i, mov)),
            }
        }
        out.push_str(&render_board(occ, state.size()));
    }
    out
}
