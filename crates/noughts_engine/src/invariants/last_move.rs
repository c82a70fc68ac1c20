//! Last-move flag invariant.

use super::Invariant;
use crate::GameEngine;

/// Invariant: at most one cell carries the last-move flag, and it is the
/// cell of the most recent move in the history.
pub struct SingleLastMoveInvariant;

impl Invariant<GameEngine> for SingleLastMoveInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let flagged = engine
            .board()
            .cells()
            .iter()
            .filter(|cell| cell.was_last_move())
            .count();

        flagged <= 1
            && engine.board().last_move() == engine.history().last().map(|m| m.position)
    }

    fn description() -> &'static str {
        "Exactly the latest move carries the last-move flag"
    }
}
