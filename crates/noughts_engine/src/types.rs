//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The human player ("You").
    PlayerOne,
    /// The computer opponent.
    PlayerTwo,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    /// Returns a short display label.
    pub fn label(self) -> &'static str {
        match self {
            Player::PlayerOne => "You",
            Player::PlayerTwo => "Computer",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The marker occupying a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

/// One cell of the board: a marker plus the last-move highlight flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    square: Square,
    was_last_move: bool,
}

impl Cell {
    /// Creates a cell.
    pub fn new(square: Square, was_last_move: bool) -> Self {
        Self {
            square,
            was_last_move,
        }
    }

    /// Returns the marker in this cell.
    pub fn square(&self) -> Square {
        self.square
    }

    /// Returns true if this cell holds the most recent move of the round.
    pub fn was_last_move(&self) -> bool {
        self.was_last_move
    }

    pub(crate) fn occupy(&mut self, player: Player) {
        self.square = Square::Occupied(player);
        self.was_last_move = true;
    }

    pub(crate) fn clear_last_move(&mut self) {
        self.was_last_move = false;
    }
}

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Round is ongoing (or waiting for a first mover).
    #[default]
    InProgress,
    /// Round ended in a win.
    Won(Player),
    /// Round ended with a full board and no winner.
    Draw,
}

impl RoundOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            RoundOutcome::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns true once the round has concluded.
    pub fn is_over(&self) -> bool {
        !matches!(self, RoundOutcome::InProgress)
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::InProgress => write!(f, "In progress"),
            RoundOutcome::Won(Player::PlayerOne) => write!(f, "You win"),
            RoundOutcome::Won(Player::PlayerTwo) => write!(f, "Computer wins"),
            RoundOutcome::Draw => write!(f, "Draw"),
        }
    }
}
