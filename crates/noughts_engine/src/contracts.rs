//! Preconditions and postconditions for applying a move.
//!
//! Preconditions run in a fixed order and the first failure is reported:
//! range, occupancy, round phase, first mover, turn. Postconditions run in
//! debug builds only.

use crate::action::MoveRequest;
use crate::engine::GameEngine;
use crate::error::EngineError;
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::position::Position;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// What a passing precondition hands back to the transition.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, EngineError>;

    /// Checks postconditions on the state after applying the action.
    fn post(after: &S) -> Result<(), EngineError>;
}

/// Precondition: the cell number is between 1 and 9.
pub struct CellInRange;

impl CellInRange {
    /// Resolves the requested cell number.
    #[instrument]
    pub fn check(req: &MoveRequest) -> Result<Position, EngineError> {
        Position::from_number(req.cell).ok_or(EngineError::OutOfRange(req.cell))
    }
}

/// Precondition: the target cell is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with `OccupiedCell` if somebody already played `pos`.
    #[instrument(skip(engine))]
    pub fn check(pos: Position, engine: &GameEngine) -> Result<(), EngineError> {
        if engine.board().is_empty(pos) {
            Ok(())
        } else {
            Err(EngineError::OccupiedCell(pos))
        }
    }
}

/// Precondition: the round has not concluded.
pub struct RoundInProgress;

impl RoundInProgress {
    /// Fails with `RoundOver` once a win or draw is recorded on the board.
    #[instrument(skip(engine))]
    pub fn check(engine: &GameEngine) -> Result<(), EngineError> {
        if engine.outcome().is_over() {
            Err(EngineError::RoundOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: it is the requesting player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with `InvalidState` before a first mover is chosen, and with
    /// `WrongPlayer` when the other player is on turn.
    #[instrument(skip(engine))]
    pub fn check(req: &MoveRequest, engine: &GameEngine) -> Result<(), EngineError> {
        match engine.current_player() {
            None => Err(EngineError::InvalidState(
                "no first player has been chosen for this round",
            )),
            Some(current) if current != req.player => Err(EngineError::WrongPlayer(req.player)),
            Some(_) => Ok(()),
        }
    }
}

/// Composite precondition for a legal move.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, in order.
    #[instrument(skip(engine))]
    pub fn check(req: &MoveRequest, engine: &GameEngine) -> Result<Position, EngineError> {
        let pos = CellInRange::check(req)?;
        SquareIsEmpty::check(pos, engine)?;
        RoundInProgress::check(engine)?;
        PlayersTurn::check(req, engine)?;
        Ok(pos)
    }
}

/// Contract for move application.
///
/// Postconditions:
/// - Board is monotonic (history replays to the board)
/// - At most one cell carries the last-move flag
/// - Players alternate in the history
pub struct MoveContract;

impl Contract<GameEngine, MoveRequest> for MoveContract {
    type Checked = Position;

    fn pre(engine: &GameEngine, action: &MoveRequest) -> Result<Position, EngineError> {
        LegalMove::check(action, engine)
    }

    fn post(after: &GameEngine) -> Result<(), EngineError> {
        EngineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Move postcondition failed");
            EngineError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
