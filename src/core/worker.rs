//! Worker identification.
//!
//! A worker is named by its owner's label and a 1-based number, e.g. `A1`.
//! The owner is a plain `PlayerId`, never a reference to the player, and the
//! worker's location lives in the board's index rather than on the worker.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::EngineError;
use super::player::PlayerId;
use super::position::Position;

/// Worker identifier: owning player plus number (1 or 2).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorkerId {
    owner: PlayerId,
    number: u8,
}

impl WorkerId {
    /// Create a worker ID.
    #[must_use]
    pub const fn new(owner: PlayerId, number: u8) -> Self {
        Self { owner, number }
    }

    /// The owning player.
    #[must_use]
    pub const fn owner(self) -> PlayerId {
        self.owner
    }

    /// The worker's number within its player (1 or 2).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.number
    }

    /// All four workers in placement order: A1, A2, B1, B2.
    pub fn placement_order() -> impl Iterator<Item = WorkerId> {
        PlayerId::all().flat_map(|p| [WorkerId::new(p, 1), WorkerId::new(p, 2)])
    }
}

impl std::fmt::Display for WorkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.owner, self.number)
    }
}

impl FromStr for WorkerId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let unknown = || EngineError::UnknownWorker(s.to_string());

        let mut chars = s.chars();
        let (Some(label), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(unknown());
        };
        let owner: PlayerId = label.to_string().parse().map_err(|_| unknown())?;
        match digit {
            '1' => Ok(WorkerId::new(owner, 1)),
            '2' => Ok(WorkerId::new(owner, 2)),
            _ => Err(unknown()),
        }
    }
}

/// A worker together with its current location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    /// Worker identity.
    pub id: WorkerId,
    /// Current cell, `None` while unplaced.
    pub position: Option<Position>,
}

impl Worker {
    /// The owning player.
    #[must_use]
    pub const fn owner(&self) -> PlayerId {
        self.id.owner()
    }

    /// True once the worker is on the board.
    #[must_use]
    pub const fn is_placed(&self) -> bool {
        self.position.is_some()
    }
}
