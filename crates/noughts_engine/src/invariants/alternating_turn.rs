//! Alternating turn invariant: no player moves twice in a row.

use super::Invariant;
use crate::GameEngine;

/// Invariant: consecutive moves in the history belong to different players,
/// and while the round is live the player on turn is the opponent of the
/// last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();
        let alternates = history.windows(2).all(|w| w[0].player != w[1].player);

        let turn_follows = match (history.last(), engine.current_player()) {
            (Some(last), Some(current)) if !engine.outcome().is_over() => {
                current == last.player.opponent()
            }
            _ => true,
        };

        alternates && turn_follows
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}
