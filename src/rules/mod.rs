//! Game flow: the engine state machine and its read model.
//!
//! ## Key Types
//!
//! - `GameEngine`: one game, driven one action per call
//! - `GameResult`: win or tie
//! - `GameView`: serializable snapshot for clients

pub mod engine;
pub mod view;

pub use engine::{GameEngine, GameResult};
pub use view::{GameView, PlayerView, SquareView, WorkerView};
