//! Demeter: a second build, on a different cell.

use super::card::{PowerCard, TurnControl};
use crate::board::Board;
use crate::core::{Neighbors, Position, WorkerId};

/// Extra-build card.
///
/// After the first build the holder may build once more on any other legal
/// cell, or skip.
#[derive(Clone, Debug, Default)]
pub struct Demeter {
    first_build: Option<Position>,
}

impl Demeter {
    /// Create the card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell of this turn's first build, if any.
    #[must_use]
    pub fn first_build(&self) -> Option<Position> {
        self.first_build
    }
}

impl PowerCard for Demeter {
    fn name(&self) -> &'static str {
        "Demeter"
    }

    fn activate(&mut self) {
        self.first_build = None;
    }

    fn deactivate(&mut self) {
        self.first_build = None;
    }

    fn validate_build(&self, board: &Board, _worker: WorkerId, from: Position, at: Position) -> bool {
        self.first_build != Some(at) && board.is_build_legal(from, at)
    }

    fn modify_legal_builds(
        &self,
        _board: &Board,
        _worker: WorkerId,
        _from: Position,
        mut builds: Neighbors,
    ) -> Neighbors {
        if let Some(first) = self.first_build {
            builds.retain(|p| *p != first);
        }
        builds
    }

    fn post_build(&mut self, _board: &Board, _worker: WorkerId, at: Position) -> TurnControl {
        if self.first_build.is_none() {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn pos(x: i32, y: i32) -> Position {
        Position::new(x, y).unwrap()
    }

    const A1: WorkerId = WorkerId::new(PlayerId::A, 1);

    #[test]
    fn test_second_build_elsewhere() {
        let mut board = Board::new();
        board.place_worker(A1, pos(2, 2));
        let mut card = Demeter::new();
        card.activate();

        board.build(A1, pos(1, 1)).unwrap();
        assert_eq!(card.post_build(&board, A1, pos(1, 1)), TurnControl::SecondBuild);
        assert_eq!(card.first_build(), Some(pos(1, 1)));

        assert!(!card.validate_build(&board, A1, pos(2, 2), pos(1, 1)));
        assert!(card.validate_build(&board, A1, pos(2, 2), pos(1, 2)));

        board.build(A1, pos(1, 2)).unwrap();
        assert_eq!(card.post_build(&board, A1, pos(1, 2)), TurnControl::EndTurn);
        assert_eq!(card.first_build(), None);
    }

    #[test]
    fn test_legal_builds_drop_first_cell() {
        let mut board = Board::new();
        board.place_worker(A1, pos(0, 0));
        let mut card = Demeter::new();
        card.post_build(&board, A1, pos(1, 0));

        let base: Neighbors = pos(0, 0).neighbors();
        let builds = card.modify_legal_builds(&board, A1, pos(0, 0), base);
        assert_eq!(builds.as_slice(), &[pos(0, 1), pos(1, 1)]);
    }

    #[test]
    fn test_skip() {
        let board = Board::new();
        let mut card = Demeter::new();
        assert_eq!(card.skip_action(), TurnControl::SecondBuild, "nothing to skip yet");

        card.post_build(&board, A1, pos(1, 1));
        assert_eq!(card.skip_action(), TurnControl::EndTurn);
        assert_eq!(card.first_build(), None);
    }

    #[test]
    fn test_deactivate_clears_state() {
        let board = Board::new();
        let mut card = Demeter::new();
        card.post_build(&board, A1, pos(1, 1));
        card.deactivate();
        assert_eq!(card.first_build(), None);
    }
}
