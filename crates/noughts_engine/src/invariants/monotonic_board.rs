//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{Board, GameEngine, Square};

/// Invariant: replaying the round's history onto an empty board
/// reproduces the current board, and no move landed on a filled cell.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut reconstructed = Board::new();

        for mov in engine.history() {
            if reconstructed.get(mov.position) != Square::Empty {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed.squares() == engine.board().squares()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
