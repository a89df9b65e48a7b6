//! # rust-santorini
//!
//! Rules engine for a two-player tower-building game on a 5×5 board, with
//! optional per-player power cards that bend the rules.
//!
//! ## Design Principles
//!
//! 1. **One Code Path**: Every player holds a card. Players without one hold
//!    `NoCard`, whose hooks are the base rules, so the engine never branches
//!    on "has a card".
//!
//! 2. **Cards Return Decisions**: Card hooks see the board, never the
//!    engine. Turn flow comes back as a `TurnControl` value.
//!
//! 3. **Unchanged on Rejection**: A rejected action leaves the game exactly
//!    as it was. If a card already changed the board before the move was
//!    refused, the board is restored. Card fields are not rolled back, so a
//!    card should only record state once its side effect has succeeded.
//!
//! ## Modules
//!
//! - `core`: Positions, players, workers, phases, actions, configuration,
//!   errors
//! - `board`: Towers, squares and the grid with the base move/build rules
//! - `cards`: The `PowerCard` hooks, the built-in cards and the registry
//! - `rules`: The `GameEngine` state machine and the `GameView` read model
//!
//! ## Logging
//!
//! The engine emits `tracing` events and spans but installs no subscriber.

pub mod board;
pub mod cards;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, EngineError, GameConfig, Phase, Player, PlayerAction, PlayerId,
    PlayerMap, Position, Result, UnknownCardPolicy, Worker, WorkerId,
};

pub use crate::board::{Board, BuildKind, Square, Tower};

pub use crate::cards::{
    Apollo, CardRegistry, Demeter, Hephaestus, Minotaur, NoCard, Pan, PowerCard, TurnControl,
};

pub use crate::rules::{GameEngine, GameResult, GameView, SquareView};
