//! Loading puzzles from disk.
//!
//! Files ending in `.json` are parsed as a [`Puzzle`] document; anything
//! else is read as a board grid (see [`Puzzle::from_grid`]).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use lonechess_core::Puzzle;

/// Load and validate a puzzle file.
pub fn load_puzzle(path: &Path) -> Result<Puzzle> {
    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let puzzle = if is_json {
        let file = File::open(path)
            .with_context(|| format!("cannot open puzzle file {}", path.display()))?;
        let puzzle: Puzzle = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("cannot parse puzzle file {}", path.display()))?;
        puzzle
            .validate()
            .with_context(|| format!("invalid puzzle in {}", path.display()))?;
        puzzle
    } else {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read puzzle file {}", path.display()))?;
        Puzzle::from_grid(&text)
            .with_context(|| format!("invalid board in {}", path.display()))?
    };

    debug!(
        "loaded {}x{} puzzle with {} pieces from {}",
        puzzle.rows,
        puzzle.cols,
        puzzle.pieces.len(),
        path.display()
    );
    Ok(puzzle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_json() {
        let path = std::env::temp_dir().join("lonechess_test_load.json");
        std::fs::write(
            &path,
            r#"{"rows": 3, "cols": 3, "pieces": [
                {"row": 0, "col": 0, "piece": "rook"},
                {"row": 0, "col": 2, "piece": "bishop"}
            ]}"#,
        )
        .unwrap();

        let puzzle = load_puzzle(&path).unwrap();
        assert_eq!((puzzle.rows, puzzle.cols), (3, 3));
        assert_eq!(puzzle.pieces.len(), 2);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_grid() {
        let path = std::env::temp_dir().join("lonechess_test_load.txt");
        std::fs::write(&path, "NR..\n.K.N\nP.B.\n....\n").unwrap();

        let puzzle = load_puzzle(&path).unwrap();
        assert_eq!(
            puzzle.occupancy().unwrap(),
            Puzzle::reference().occupancy().unwrap()
        );

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_rejects_out_of_bounds() {
        let path = std::env::temp_dir().join("lonechess_test_bounds.json");
        std::fs::write(&path, r#"{"pieces": [{"row": 4, "col": 0, "piece": "pawn"}]}"#).unwrap();

        let err = load_puzzle(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("outside the 4x4 board"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("lonechess_does_not_exist.json");
        assert!(load_puzzle(&path).is_err());
    }
}
