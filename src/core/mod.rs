//! Core types: positions, players, workers, phases, actions, configuration
//! and the crate error.
//!
//! Everything here is plain data. Rules live in `board`, `cards` and `rules`.

pub mod action;
pub mod config;
pub mod error;
pub mod phase;
pub mod player;
pub mod position;
pub mod worker;

pub use action::{Action, ActionRecord};
pub use config::{GameConfig, UnknownCardPolicy};
pub use error::{EngineError, Result};
pub use phase::{Phase, PlayerAction};
pub use player::{Player, PlayerId, PlayerMap, PLAYER_COUNT};
pub use position::{Neighbors, Position, BOARD_SIZE};
pub use worker::{Worker, WorkerId};
