//! Engine error type.
//!
//! Structural misuse (wrong phase, wrong turn, wrong worker) is an error.
//! Rule violations on a move or build target are also errors at the board
//! level, but the engine reports those to its caller as `Ok(false)`.

use thiserror::Error;

use super::phase::Phase;
use super::player::PlayerId;
use super::position::Position;
use super::worker::WorkerId;

/// Errors raised by the board and the game engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Action attempted outside the phase that accepts it.
    #[error("{action} is not allowed during the {phase} phase")]
    IllegalPhase {
        /// The rejected action.
        action: &'static str,
        /// Phase at the time of the call.
        phase: Phase,
    },

    /// A player acted while it was the other player's turn.
    #[error("it is not player {player}'s turn (current player: {current})")]
    NotYourTurn {
        /// Player who attempted the action.
        player: PlayerId,
        /// Player whose turn it is.
        current: PlayerId,
    },

    /// The worker does not belong to the acting player, or is out of order.
    #[error("worker {worker} cannot be used by player {player} now")]
    WrongWorker {
        /// Worker named in the request.
        worker: WorkerId,
        /// Player making the request.
        player: PlayerId,
    },

    /// Move or build attempted before a worker was selected.
    #[error("no worker has been selected")]
    NoWorkerSelected,

    /// The worker is not on the board.
    #[error("worker {0} has not been placed")]
    WorkerNotPlaced(WorkerId),

    /// Move target breaks adjacency, height, occupancy or dome rules.
    #[error("worker {worker} cannot move to {to}")]
    InvalidMove {
        /// Worker being moved.
        worker: WorkerId,
        /// Rejected destination.
        to: Position,
    },

    /// Build target breaks adjacency, occupancy or dome rules.
    #[error("worker {worker} cannot build at {at}")]
    InvalidBuild {
        /// Worker building.
        worker: WorkerId,
        /// Rejected build site.
        at: Position,
    },

    /// Worker identifier could not be parsed.
    #[error("unknown worker {0:?}")]
    UnknownWorker(String),

    /// Player identifier could not be parsed.
    #[error("unknown player {0:?}")]
    UnknownPlayer(String),

    /// Card name is not registered.
    #[error("unknown card {0:?}")]
    UnknownCard(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// True for ordinary rule violations the caller can retry within the turn.
    #[must_use]
    pub const fn is_rule_violation(&self) -> bool {
        matches!(self, EngineError::InvalidMove { .. } | EngineError::InvalidBuild { .. })
    }
}
