//! Cumulative match scores.

use crate::types::{Player, RoundOutcome};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Per-match tallies. Lives as long as the engine; never decrements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Rounds won by the human.
    player_one: u32,
    /// Rounds won by the computer.
    player_two: u32,
    /// Rounds that ended with a full board and no winner.
    draws: u32,
}

impl Scoreboard {
    /// Creates a zeroed scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::PlayerOne => self.player_one,
            Player::PlayerTwo => self.player_two,
        }
    }

    /// Total concluded rounds.
    pub fn rounds(&self) -> u32 {
        self.player_one + self.player_two + self.draws
    }

    /// Records a concluded round. Returns false for `InProgress`, which is not scored.
    #[instrument(skip(self))]
    pub(crate) fn record(&mut self, outcome: RoundOutcome) -> bool {
        let counter = match outcome {
            RoundOutcome::InProgress => return false,
            RoundOutcome::Won(Player::PlayerOne) => &mut self.player_one,
            RoundOutcome::Won(Player::PlayerTwo) => &mut self.player_two,
            RoundOutcome::Draw => &mut self.draws,
        };
        *counter = counter.saturating_add(1);
        debug!(
            player_one = self.player_one,
            player_two = self.player_two,
            draws = self.draws,
            "Score recorded"
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_increments_matching_counter() {
        let mut scores = Scoreboard::new();
        assert!(scores.record(RoundOutcome::Won(Player::PlayerTwo)));
        assert!(scores.record(RoundOutcome::Draw));
        assert!(scores.record(RoundOutcome::Draw));
        assert_eq!(*scores.player_one(), 0);
        assert_eq!(*scores.player_two(), 1);
        assert_eq!(*scores.draws(), 2);
        assert_eq!(scores.rounds(), 3);
    }

    #[test]
    fn test_wins_reads_the_players_counter() {
        let mut scores = Scoreboard::new();
        scores.record(RoundOutcome::Won(Player::PlayerOne));
        scores.record(RoundOutcome::Draw);
        assert_eq!(scores.wins(Player::PlayerOne), 1);
        assert_eq!(scores.wins(Player::PlayerTwo), 0);
    }

    #[test]
    fn test_in_progress_is_not_scored() {
        let mut scores = Scoreboard::new();
        assert!(!scores.record(RoundOutcome::InProgress));
        assert_eq!(scores, Scoreboard::new());
    }
}
