//! The computer opponent's move policy.
//!
//! Preference order, each tier evaluated against the current board:
//! take a win, block the opponent's win, center, lowest corner, lowest
//! remaining cell. Ties inside a tier go to the lowest cell number.

use crate::board::Board;
use crate::error::EngineError;
use crate::position::Position;
use crate::rules::LINES;
use crate::types::{Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which tier of the policy produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveReason {
    /// Completes three in a row for the mover.
    Win,
    /// Stops the opponent completing three in a row.
    Block,
    /// Takes the center.
    Center,
    /// Takes a corner.
    Corner,
    /// Takes whatever is left.
    Edge,
}

/// A chosen cell and the reason it was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Cell to play.
    pub position: Position,
    /// Tier that selected it.
    pub reason: MoveReason,
}

/// Returns the lowest-numbered empty cell that would give `player` three in a row.
#[instrument(skip(board))]
pub fn completing_move(board: &Board, player: Player) -> Option<Position> {
    let mine = Square::Occupied(player);
    Position::iter_all().find(|&pos| {
        board.is_empty(pos)
            && LINES.iter().any(|line| {
                line.contains(&pos)
                    && line
                        .iter()
                        .filter(|&&other| other != pos)
                        .all(|&other| board.get(other) == mine)
            })
    })
}

/// Picks the computer's next move for `player`.
///
/// # Errors
///
/// Returns [`EngineError::NoLegalMove`] if the board is full.
#[instrument(skip(board))]
pub fn choose_move(board: &Board, player: Player) -> Result<Decision, EngineError> {
    let decision = if let Some(position) = completing_move(board, player) {
        Decision {
            position,
            reason: MoveReason::Win,
        }
    } else if let Some(position) = completing_move(board, player.opponent()) {
        Decision {
            position,
            reason: MoveReason::Block,
        }
    } else if board.is_empty(Position::Center) {
        Decision {
            position: Position::Center,
            reason: MoveReason::Center,
        }
    } else if let Some(position) = Position::CORNERS
        .iter()
        .copied()
        .find(|&pos| board.is_empty(pos))
    {
        Decision {
            position,
            reason: MoveReason::Corner,
        }
    } else if let Some(position) = board.empty_positions().first().copied() {
        Decision {
            position,
            reason: MoveReason::Edge,
        }
    } else {
        return Err(EngineError::NoLegalMove);
    };

    debug!(
        position = decision.position.number(),
        reason = ?decision.reason,
        "Computer chose move"
    );
    Ok(decision)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: Square = Square::Occupied(Player::PlayerOne);
    const TWO: Square = Square::Occupied(Player::PlayerTwo);
    const E: Square = Square::Empty;

    #[test]
    fn test_empty_board_takes_center() {
        let decision = choose_move(&Board::new(), Player::PlayerTwo).unwrap();
        assert_eq!(decision.position, Position::Center);
        assert_eq!(decision.reason, MoveReason::Center);
    }

    #[test]
    fn test_takes_win_over_block() {
        // Both players threaten; the computer must take its own win.
        // 2 2 .
        // 1 1 .
        // . . .
        let board = Board::from_squares([TWO, TWO, E, ONE, ONE, E, E, E, E]);
        let decision = choose_move(&board, Player::PlayerTwo).unwrap();
        assert_eq!(decision.position, Position::TopRight);
        assert_eq!(decision.reason, MoveReason::Win);
    }

    #[test]
    fn test_diagonal_win_from_one_and_five() {
        // Computer at 1 and 5, human at 2.
        let board = Board::from_squares([TWO, ONE, E, E, TWO, E, E, E, E]);
        let decision = choose_move(&board, Player::PlayerTwo).unwrap();
        assert_eq!(decision.position, Position::BottomRight);
        assert_eq!(decision.reason, MoveReason::Win);
    }

    #[test]
    fn test_blocks_opponent_threat() {
        // Human threatens the left column at 7.
        let board = Board::from_squares([ONE, E, E, ONE, TWO, E, E, E, E]);
        let decision = choose_move(&board, Player::PlayerTwo).unwrap();
        assert_eq!(decision.position, Position::BottomLeft);
        assert_eq!(decision.reason, MoveReason::Block);
    }

    #[test]
    fn test_lowest_block_when_double_threat() {
        // Human threatens 3 (top row) and 7 (left column); lowest wins.
        let board = Board::from_squares([ONE, ONE, E, ONE, TWO, E, E, E, TWO]);
        let decision = choose_move(&board, Player::PlayerTwo).unwrap();
        assert_eq!(decision.position, Position::TopRight);
        assert_eq!(decision.reason, MoveReason::Block);
    }

    #[test]
    fn test_prefers_lowest_corner_when_center_taken() {
        let board = Board::from_squares([E, E, E, E, ONE, E, E, E, E]);
        let decision = choose_move(&board, Player::PlayerTwo).unwrap();
        assert_eq!(decision.position, Position::TopLeft);
        assert_eq!(decision.reason, MoveReason::Corner);
    }

    #[test]
    fn test_falls_back_to_lowest_edge() {
        // 1 2 1
        // . 2 1
        // 2 1 2
        // No threats remain for either side; corners and center are gone.
        let board = Board::from_squares([ONE, TWO, ONE, E, TWO, ONE, TWO, ONE, TWO]);
        let decision = choose_move(&board, Player::PlayerTwo).unwrap();
        assert_eq!(decision.position, Position::MiddleLeft);
        assert_eq!(decision.reason, MoveReason::Edge);
    }

    #[test]
    fn test_full_board_has_no_legal_move() {
        let board = Board::from_squares([ONE, TWO, ONE, ONE, TWO, TWO, TWO, ONE, ONE]);
        assert_eq!(
            choose_move(&board, Player::PlayerTwo),
            Err(EngineError::NoLegalMove)
        );
    }

    #[test]
    fn test_completing_move_ignores_mixed_lines() {
        let board = Board::from_squares([ONE, TWO, E, E, E, E, E, E, E]);
        assert_eq!(completing_move(&board, Player::PlayerOne), None);
        assert_eq!(completing_move(&board, Player::PlayerTwo), None);
    }
}
