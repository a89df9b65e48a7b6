//! Minotaur: push an opponent one cell straight back.

use tracing::trace;

use super::card::{can_enter_opponent_cell, opponent_cells, PowerCard};
use crate::board::Board;
use crate::core::{Neighbors, Position, WorkerId};

/// Push card.
///
/// A worker may step into an adjacent opponent-held cell if the cell
/// directly beyond it, on the line from the mover, is on the board, empty
/// and not domed. The opponent is forced there whatever its height. Being
/// pushed never wins the game.
#[derive(Clone, Copy, Debug, Default)]
pub struct Minotaur;

impl Minotaur {
    /// Create the card.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn push_target(board: &Board, worker: WorkerId, from: Position, to: Position) -> Option<Position> {
        if !can_enter_opponent_cell(board, worker, from, to) {
            return None;
        }
        let behind = to.beyond(from)?;
        let open = !board.is_occupied(behind) && !board.tower(behind).is_domed();
        open.then_some(behind)
    }
}

impl PowerCard for Minotaur {
    fn name(&self) -> &'static str {
        "Minotaur"
    }

    fn validate_move(&self, board: &Board, worker: WorkerId, from: Position, to: Position) -> bool {
        board.is_move_legal(from, to) || Self::push_target(board, worker, from, to).is_some()
    }

    fn modify_legal_moves(
        &self,
        board: &Board,
        worker: WorkerId,
        from: Position,
        mut moves: Neighbors,
    ) -> Neighbors {
        moves.extend(
            opponent_cells(board, worker, from)
                .into_iter()
                .filter(|&to| Self::push_target(board, worker, from, to).is_some()),
        );
        moves
    }

    fn pre_move(&mut self, board: &mut Board, worker: WorkerId, from: Position, to: Position) -> bool {
        let (Some(behind), Some(opponent)) =
            (Self::push_target(board, worker, from, to), board.occupant(to))
        else {
            return false;
        };
        trace!(%opponent, %to, %behind, "pushing");
        board.push_worker(opponent, behind)
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
    const B1: WorkerId = WorkerId::new(PlayerId::B, 1);
    const B2: WorkerId = WorkerId::new(PlayerId::B, 2);

    fn setup() -> Board {
        let mut board = Board::new();
        board.place_worker(A1, pos(1, 1));
        board.place_worker(B1, pos(1, 2));
        board
    }

    #[test]
    fn test_push_into_empty_cell() {
        let mut board = setup();
        let mut card = Minotaur::new();

        assert!(card.validate_move(&board, A1, pos(1, 1), pos(1, 2)));
        assert!(card.pre_move(&mut board, A1, pos(1, 1), pos(1, 2)));
        assert_eq!(board.position_of(B1), Some(pos(1, 3)));

        board.move_worker(A1, pos(1, 2)).unwrap();
        assert_eq!(board.position_of(A1), Some(pos(1, 2)));
        assert!(board.is_consistent());
    }

    #[test]
    fn test_push_blocked() {
        let mut board = setup();
        board.place_worker(B2, pos(1, 3));
        let card = Minotaur::new();
        assert!(!card.validate_move(&board, A1, pos(1, 1), pos(1, 2)), "behind occupied");

        let mut board = setup();
        board.set_tower(pos(1, 3), 3, true);
        assert!(!card.validate_move(&board, A1, pos(1, 1), pos(1, 2)), "behind domed");
    }

    #[test]
    fn test_push_off_board_rejected() {
        let mut board = Board::new();
        board.place_worker(A1, pos(0, 1));
        board.place_worker(B1, pos(0, 0));
        let mut card = Minotaur::new();

        assert!(!card.validate_move(&board, A1, pos(0, 1), pos(0, 0)));
        assert!(!card.pre_move(&mut board, A1, pos(0, 1), pos(0, 0)));
        assert_eq!(board.position_of(B1), Some(pos(0, 0)));
    }

    #[test]
    fn test_push_onto_any_height() {
        let mut board = setup();
        board.set_tower(pos(1, 3), 3, false);
        let mut card = Minotaur::new();

        assert!(card.pre_move(&mut board, A1, pos(1, 1), pos(1, 2)));
        assert_eq!(board.level(board.position_of(B1).unwrap()), 3);
        assert!(!card.check_win(&board, A1, pos(1, 1), pos(1, 2)));
    }

    #[test]
    fn test_hints_match_validation() {
        let mut board = setup();
        board.place_worker(B2, pos(2, 2));
        board.set_tower(pos(3, 3), 3, true);
        let card = Minotaur::new();

        let moves = card.modify_legal_moves(&board, A1, pos(1, 1), Neighbors::new());
        assert_eq!(moves.as_slice(), &[pos(1, 2)]);
        for to in moves {
            assert!(card.validate_move(&board, A1, pos(1, 1), to));
        }
    }
}
