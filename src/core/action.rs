//! Action representation and history records.
//!
//! Every accepted engine call is described by an `Action`. The engine keeps
//! an `ActionRecord` per accepted action so a session can be replayed or
//! inspected after the fact.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::position::Position;
use super::worker::WorkerId;

/// One accepted engine action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Card choice during Initialize. `None` means no card.
    SelectCard(Option<String>),
    /// Initial placement of a worker.
    Place(WorkerId, Position),
    /// Worker chosen for this turn.
    SelectWorker(WorkerId),
    /// Move of the selected worker.
    Move(Position),
    /// Build by the selected worker.
    Build(Position),
    /// Optional extra action declined.
    Skip,
}

impl Action {
    /// Short verb for logs.
    #[must_use]
    pub fn verb(&self) -> &'static str {
        match self {
            Action::SelectCard(_) => "select_card",
            Action::Place(..) => "place_worker",
            Action::SelectWorker(_) => "select_worker",
            Action::Move(_) => "move",
            Action::Build(_) => "build",
            Action::Skip => "skip",
        }
    }

    /// Target cell, for actions that have one.
    #[must_use]
    pub fn target(&self) -> Option<Position> {
        match self {
            Action::Place(_, pos) | Action::Move(pos) | Action::Build(pos) => Some(*pos),
            _ => None,
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when the action was taken (setup actions use turn 0).
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
