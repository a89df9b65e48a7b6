//! Hephaestus: a second block on the same cell.

use super::card::{PowerCard, TurnControl};
use crate::board::{Board, MAX_LEVEL};
use crate::core::{Neighbors, Position, WorkerId};

/// Extra-block card.
///
/// After the first build the holder may add one more block on the same
/// cell. The second build can never be a dome, so it is only offered when
/// the first build left the tower below level 3.
#[derive(Clone, Debug, Default)]
pub struct Hephaestus {
    first_build: Option<Position>,
}

impl Hephaestus {
    /// Create the card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell of this turn's first build, if a second is pending.
    #[must_use]
    pub fn first_build(&self) -> Option<Position> {
        self.first_build
    }
}

impl PowerCard for Hephaestus {
    fn name(&self) -> &'static str {
        "Hephaestus"
    }

    fn activate(&mut self) {
        self.first_build = None;
    }

    fn deactivate(&mut self) {
        self.first_build = None;
    }

    fn validate_build(&self, board: &Board, _worker: WorkerId, from: Position, at: Position) -> bool {
        match self.first_build {
            None => board.is_build_legal(from, at),
            Some(first) => first == at && board.level(at) < MAX_LEVEL,
        }
    }

    fn modify_legal_builds(
        &self,
        board: &Board,
        _worker: WorkerId,
        _from: Position,
        mut builds: Neighbors,
    ) -> Neighbors {
        if let Some(first) = self.first_build {
            builds.retain(|p| *p == first && board.level(*p) < MAX_LEVEL);
        }
        builds
    }

    fn post_build(&mut self, board: &Board, _worker: WorkerId, at: Position) -> TurnControl {
        if self.first_build.is_none() && board.level(at) < MAX_LEVEL {
            self.first_build = Some(at);
            TurnControl::SecondBuild
        } else {
            self.first_build = None;
            TurnControl::EndTurn
        }
    }

    fn skip_action(&mut self) -> TurnControl {
        if self.first_build.take().is_some() {
            TurnControl::EndTurn
        } else {
            TurnControl::SecondBuild
        }
    }
}
