//! Read-only snapshot of engine state for presentation layers.

use crate::action::Move;
use crate::engine::GameEngine;
use crate::position::Position;
use crate::score::Scoreboard;
use crate::types::{Cell, Player, RoundOutcome};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a renderer needs, detached from the engine.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Cells in row-major order (cell 1 first).
    cells: [Cell; 9],
    /// Player to move, if the round has started.
    current_player: Option<Player>,
    /// Player moving after the current one.
    next_player: Option<Player>,
    /// Outcome of the round.
    outcome: RoundOutcome,
    /// Triple that won the round, if any.
    winning_line: Option<[Position; 3]>,
    /// Cumulative scores.
    scores: Scoreboard,
    /// Moves of the current round.
    history: Vec<Move>,
}

impl EngineSnapshot {
    /// Cell at a position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// True if `pos` belongs to the winning triple.
    pub fn is_winning_cell(&self, pos: Position) -> bool {
        self.winning_line
            .map(|line| line.contains(&pos))
            .unwrap_or(false)
    }
}

impl From<&GameEngine> for EngineSnapshot {
    fn from(engine: &GameEngine) -> Self {
        Self {
            cells: *engine.board().cells(),
            current_player: engine.current_player(),
            next_player: engine.next_player(),
            outcome: engine.outcome(),
            winning_line: engine.winning_line(),
            scores: *engine.scores(),
            history: engine.history().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_reflects_last_move() {
        let mut engine = GameEngine::new();
        engine.choose_first_player(Player::PlayerOne).unwrap();
        engine.apply_move(Player::PlayerOne, 7).unwrap();

        let snapshot = engine.snapshot();
        assert!(snapshot.cell(Position::BottomLeft).was_last_move());
        assert_eq!(*snapshot.current_player(), Some(Player::PlayerTwo));
        assert_eq!(snapshot.history().len(), 1);
        assert!(!snapshot.is_winning_cell(Position::BottomLeft));
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let engine = GameEngine::new();
        let json = serde_json::to_value(engine.snapshot()).unwrap();
        assert_eq!(json["outcome"], "InProgress");
        assert_eq!(json["scores"]["draws"], 0);
        assert_eq!(json["cells"].as_array().map(|c| c.len()), Some(9));
    }
}
