//! First-class move types.
//!
//! A [`MoveRequest`] is a player's unvalidated intent, as typed at the
//! keyboard. A [`Move`] is what the engine records once the request passes
//! every precondition.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A validated move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.number())
    }
}

/// A requested move with a raw, unchecked cell number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    /// Who claims to be moving.
    pub player: Player,
    /// Cell number as entered (valid range 1-9).
    pub cell: usize,
}

impl MoveRequest {
    /// Creates a new request.
    pub fn new(player: Player, cell: usize) -> Self {
        Self { player, cell }
    }
}
