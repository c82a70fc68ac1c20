//! Noughts engine - tic-tac-toe game state
//!
//! A pure, synchronous engine for a human-versus-computer tic-tac-toe match.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of cells, numbered 1-9 in row-major order
//! - **Rules**: win and draw evaluation over the eight triples
//! - **Engine**: round lifecycle, turn order, validation and scoring
//! - **Strategy**: the computer's deterministic move policy
//!
//! # Example
//!
//! ```
//! use noughts_engine::{GameEngine, Player, RoundOutcome};
//!
//! # fn example() -> Result<(), noughts_engine::EngineError> {
//! let mut engine = GameEngine::new();
//! engine.choose_first_player(Player::PlayerOne)?;
//! engine.apply_move(Player::PlayerOne, 5)?;
//!
//! let reply = engine.compute_next_move(Player::PlayerTwo)?;
//! let outcome = engine.apply_move(Player::PlayerTwo, reply.number())?;
//! assert_eq!(outcome, RoundOutcome::InProgress);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod engine;
mod error;
mod position;
mod score;
mod snapshot;
mod types;

pub mod invariants;
pub mod rules;
pub mod strategy;

// Crate-level exports - Engine
pub use engine::GameEngine;
pub use error::EngineError;
pub use snapshot::EngineSnapshot;

// Crate-level exports - Domain types
pub use action::{Move, MoveRequest};
pub use board::Board;
pub use position::Position;
pub use score::Scoreboard;
pub use types::{Cell, Player, RoundOutcome, Square};

// Crate-level exports - Validation
pub use contracts::{
    CellInRange, Contract, LegalMove, MoveContract, PlayersTurn, RoundInProgress, SquareIsEmpty,
};

// Crate-level exports - Computer policy
pub use strategy::{Decision, MoveReason};
