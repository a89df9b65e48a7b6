//! Tower: the building stacked on one cell.

use serde::{Deserialize, Serialize};

/// Highest block level; the next build on a level-3 tower is a dome.
pub const MAX_LEVEL: u8 = 3;

/// What a single build added to a tower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildKind {
    /// One more block level.
    Block,
    /// The dome on a level-3 tower.
    Dome,
}

/// Building level (0–3) plus dome flag.
///
/// Invariant: `domed` implies `level == 3`. Levels only go up, one at a
/// time, and a dome is final.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tower {
    level: u8,
    domed: bool,
}

impl Tower {
    /// An empty cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            level: 0,
            domed: false,
        }
    }

    /// Current block level.
    #[must_use]
    pub const fn level(&self) -> u8 {
        self.level
    }

    /// True once capped.
    #[must_use]
    pub const fn is_domed(&self) -> bool {
        self.domed
    }

    /// A block can still be added.
    #[must_use]
    pub const fn can_add_level(&self) -> bool {
        self.level < MAX_LEVEL && !self.domed
    }

    /// A dome can be placed now.
    #[must_use]
    pub const fn can_place_dome(&self) -> bool {
        self.level == MAX_LEVEL && !self.domed
    }

    /// Add a block. Returns false if the tower is full or domed.
    pub fn add_level(&mut self) -> bool {
        if self.can_add_level() {
            self.level += 1;
            true
        } else {
            false
        }
    }

    /// Place the dome. Returns false unless the tower is at level 3 and open.
    pub fn place_dome(&mut self) -> bool {
        if self.can_place_dome() {
            self.domed = true;
            true
        } else {
            false
        }
    }

    /// Add whatever comes next: a block below level 3, a dome at level 3.
    ///
    /// Returns `None` if the tower is already domed.
    pub fn build(&mut self) -> Option<BuildKind> {
        if self.add_level() {
            Some(BuildKind::Block)
        } else if self.place_dome() {
            Some(BuildKind::Dome)
        } else {
            None
        }
    }
}
