//! The game-state engine.
//!
//! One [`GameEngine`] lives for the whole match. Rounds come and go inside
//! it: [`choose_first_player`](GameEngine::choose_first_player) opens a
//! round, [`apply_move`](GameEngine::apply_move) plays it out, and
//! [`acknowledge_round_end`](GameEngine::acknowledge_round_end) scores it and
//! clears the board for the next one. Scores survive every round.

use crate::action::{Move, MoveRequest};
use crate::board::Board;
use crate::contracts::{Contract, MoveContract};
use crate::error::EngineError;
use crate::position::Position;
use crate::rules;
use crate::score::Scoreboard;
use crate::snapshot::EngineSnapshot;
use crate::strategy::{self, Decision};
use crate::types::{Player, RoundOutcome};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe match engine.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    board: Board,
    current_player: Option<Player>,
    next_player: Option<Player>,
    outcome: RoundOutcome,
    scores: Scoreboard,
    history: Vec<Move>,
}

impl GameEngine {
    /// Creates an engine with an empty board and zeroed scores.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move, once a first mover has been chosen.
    pub fn current_player(&self) -> Option<Player> {
        self.current_player
    }

    /// Player moving after the current one.
    pub fn next_player(&self) -> Option<Player> {
        self.next_player
    }

    /// Outcome of the current round.
    pub fn outcome(&self) -> RoundOutcome {
        self.outcome
    }

    /// Cumulative match scores.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Moves played so far this round.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True once a first mover has been chosen for this round.
    pub fn round_started(&self) -> bool {
        self.current_player.is_some()
    }

    /// The completed triple, if the round was won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        rules::winning_line(&self.board).map(|(_, line)| line)
    }

    /// Owned read-only view of the whole engine state.
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot::from(self)
    }

    /// Chooses who moves first in the current round.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidState`] if a first mover was already chosen.
    #[instrument(skip(self))]
    pub fn choose_first_player(&mut self, player: Player) -> Result<(), EngineError> {
        if self.round_started() {
            warn!(?player, "First player already chosen");
            return Err(EngineError::InvalidState(
                "a first player has already been chosen for this round",
            ));
        }

        self.current_player = Some(player);
        self.next_player = Some(player.opponent());
        info!(first = %player, "Round started");
        Ok(())
    }

    /// Places `player`'s marker on cell `cell_index` (1-9).
    ///
    /// Returns the round outcome after the move. A failed move leaves the
    /// engine untouched.
    ///
    /// # Errors
    ///
    /// In order of precedence: [`EngineError::OutOfRange`],
    /// [`EngineError::OccupiedCell`], [`EngineError::RoundOver`],
    /// [`EngineError::InvalidState`] (no first mover), and
    /// [`EngineError::WrongPlayer`].
    #[instrument(skip(self), fields(outcome = ?self.outcome))]
    pub fn apply_move(
        &mut self,
        player: Player,
        cell_index: usize,
    ) -> Result<RoundOutcome, EngineError> {
        let request = MoveRequest::new(player, cell_index);
        let position = match MoveContract::pre(self, &request) {
            Ok(position) => position,
            Err(e) => {
                debug!(error = %e, "Move rejected");
                return Err(e);
            }
        };

        self.board.place(position, player);
        self.history.push(Move::new(player, position));
        self.outcome = rules::evaluate(&self.board);

        if !self.outcome.is_over() {
            std::mem::swap(&mut self.current_player, &mut self.next_player);
        }

        #[cfg(debug_assertions)]
        MoveContract::post(self)?;

        debug!(
            position = position.number(),
            outcome = ?self.outcome,
            "Move applied"
        );
        if self.outcome.is_over() {
            info!(outcome = %self.outcome, "Round concluded");
        }
        Ok(self.outcome)
    }

    /// Scores the concluded round and resets round state for the next one.
    ///
    /// Returns the outcome that was scored.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RoundNotOver`] while the round is in progress.
    #[instrument(skip(self))]
    pub fn acknowledge_round_end(&mut self) -> Result<RoundOutcome, EngineError> {
        let outcome = self.outcome;
        if !self.scores.record(outcome) {
            return Err(EngineError::RoundNotOver);
        }

        self.board.clear();
        self.history.clear();
        self.current_player = None;
        self.next_player = None;
        self.outcome = RoundOutcome::InProgress;

        info!(
            %outcome,
            rounds = self.scores.rounds(),
            "Round acknowledged"
        );
        Ok(outcome)
    }

    /// Computes the computer's next move for `player` without applying it.
    ///
    /// The caller commits it with [`apply_move`](Self::apply_move).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NoLegalMove`] if the board is full.
    #[instrument(skip(self))]
    pub fn compute_next_move(&self, player: Player) -> Result<Position, EngineError> {
        self.decide_next_move(player).map(|d| d.position)
    }

    /// Like [`compute_next_move`](Self::compute_next_move), also reporting
    /// which preference tier picked the cell.
    #[instrument(skip(self))]
    pub fn decide_next_move(&self, player: Player) -> Result<Decision, EngineError> {
        strategy::choose_move(&self.board, player)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
