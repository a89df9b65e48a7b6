//! Square: one cell of the grid.

use serde::{Deserialize, Serialize};

use super::tower::Tower;
use crate::core::WorkerId;

/// A cell: its tower and the worker standing on it, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    /// Building on the cell.
    pub tower: Tower,
    /// Worker standing here.
    pub occupant: Option<WorkerId>,
}

impl Square {
    /// True if a worker stands here.
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Tower level.
    #[must_use]
    pub const fn level(&self) -> u8 {
        self.tower.level()
    }

    /// Tower dome flag.
    #[must_use]
    pub const fn is_domed(&self) -> bool {
        self.tower.is_domed()
    }
}
