//! Engine error kinds.

use crate::position::Position;
use crate::types::Player;

/// Error returned by a [`GameEngine`](crate::GameEngine) operation.
///
/// Every variant is recoverable: a failed call leaves the engine exactly as
/// it was, so the caller can report the problem and ask again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The operation does not fit the current round phase.
    #[display("Invalid state: {}", _0)]
    InvalidState(&'static str),

    /// Move index outside 1-9.
    #[display("Cell {} is out of range (1-9)", _0)]
    OutOfRange(usize),

    /// Target cell already holds a marker.
    #[display("Cell {} is already occupied", _0)]
    OccupiedCell(Position),

    /// The round has already concluded.
    #[display("The round is already over")]
    RoundOver,

    /// Round end acknowledged while the round is still being played.
    #[display("The round is not over yet")]
    RoundNotOver,

    /// The computer was asked to move on a full board.
    #[display("No legal move available")]
    NoLegalMove,

    /// It is not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// A postcondition failed after a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for EngineError {}
