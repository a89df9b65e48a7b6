//! Apollo: move into an opponent's cell and swap places.

use tracing::{trace, warn};

use super::card::{can_enter_opponent_cell, opponent_cells, reached_top, PowerCard};
use crate::board::Board;
use crate::core::{Neighbors, Position, WorkerId};

/// Swap card.
///
/// A worker may also step into an adjacent opponent-held cell (same climb
/// limit as a normal move). The opponent is lifted off before the move and
/// set down on the mover's old cell afterwards.
#[derive(Clone, Debug, Default)]
pub struct Apollo {
    displaced: Option<WorkerId>,
}

impl Apollo {
    /// Create the card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PowerCard for Apollo {
    fn name(&self) -> &'static str {
        "Apollo"
    }

    fn activate(&mut self) {
        self.displaced = None;
    }

    fn deactivate(&mut self) {
        self.displaced = None;
    }

    fn validate_move(&self, board: &Board, worker: WorkerId, from: Position, to: Position) -> bool {
        board.is_move_legal(from, to) || can_enter_opponent_cell(board, worker, from, to)
    }

    fn modify_legal_moves(
        &self,
        board: &Board,
        worker: WorkerId,
        from: Position,
        mut moves: Neighbors,
    ) -> Neighbors {
        moves.extend(opponent_cells(board, worker, from));
        moves
    }

    fn pre_move(&mut self, board: &mut Board, worker: WorkerId, from: Position, to: Position) -> bool {
        self.displaced = None;
        if !can_enter_opponent_cell(board, worker, from, to) {
            return false;
        }
        let Some(opponent) = board.occupant(to) else {
            return false;
        };
        if board.lift_worker(opponent).is_none() {
            return false;
        }
        self.displaced = Some(opponent);
        true
    }

    fn post_move(&mut self, board: &mut Board, _worker: WorkerId, from: Position, _to: Position) {
        if let Some(opponent) = self.displaced.take() {
            if board.place_worker(opponent, from) {
                trace!(%opponent, %from, "swapped");
            } else {
                warn!(%opponent, %from, "swap target was not free");
            }
        }
    }

    fn check_win(&self, board: &Board, _worker: WorkerId, from: Position, to: Position) -> bool {
        reached_top(board, from, to)
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
    const A2: WorkerId = WorkerId::new(PlayerId::A, 2);
    const B1: WorkerId = WorkerId::new(PlayerId::B, 1);

    fn setup() -> Board {
        let mut board = Board::new();
        board.place_worker(A1, pos(1, 1));
        board.place_worker(A2, pos(2, 1));
        board.place_worker(B1, pos(1, 2));
        board
    }

    #[test]
    fn test_validate_swap() {
        let mut board = setup();
        let card = Apollo::new();

        assert!(card.validate_move(&board, A1, pos(1, 1), pos(1, 2)));
        assert!(!card.validate_move(&board, A1, pos(1, 1), pos(2, 1)), "own worker");

        board.set_tower(pos(1, 2), 2, false);
        assert!(!card.validate_move(&board, A1, pos(1, 1), pos(1, 2)), "too high");
    }

    #[test]
    fn test_swap_sequence() {
        let mut board = setup();
        let mut card = Apollo::new();
        card.activate();

        assert!(card.pre_move(&mut board, A1, pos(1, 1), pos(1, 2)));
        assert_eq!(board.position_of(B1), None);
        board.move_worker(A1, pos(1, 2)).unwrap();
        card.post_move(&mut board, A1, pos(1, 1), pos(1, 2));

        assert_eq!(board.position_of(A1), Some(pos(1, 2)));
        assert_eq!(board.position_of(B1), Some(pos(1, 1)));
        assert!(board.is_consistent());
    }

    #[test]
    fn test_refused_swap_forgets_target() {
        let mut board = setup();
        let mut card = Apollo::new();
        card.activate();

        assert!(card.pre_move(&mut board, A1, pos(1, 1), pos(1, 2)));
        assert!(!card.pre_move(&mut board, A1, pos(1, 1), pos(2, 1)), "own worker");
        assert_eq!(card.displaced, None);

        // A plain move afterwards must not drop anyone on the old cell.
        board.move_worker(A1, pos(0, 0)).unwrap();
        card.post_move(&mut board, A1, pos(1, 1), pos(0, 0));
        assert!(!board.is_occupied(pos(1, 1)));
    }

    #[test]
    fn test_legal_moves_include_opponent() {
        let board = setup();
        let card = Apollo::new();
        let base: Neighbors = pos(1, 1)
            .neighbors()
            .into_iter()
            .filter(|&to| board.is_move_legal(pos(1, 1), to))
            .collect();
        let moves = card.modify_legal_moves(&board, A1, pos(1, 1), base.clone());

        assert_eq!(moves.len(), base.len() + 1);
        assert!(moves.contains(&pos(1, 2)));
        assert!(!moves.contains(&pos(2, 1)));
    }

    #[test]
    fn test_win_on_reaching_top() {
        let mut board = Board::new();
        board.set_tower(pos(0, 0), 2, false);
        board.set_tower(pos(1, 0), 3, false);
        let card = Apollo::new();

        assert!(card.check_win(&board, A1, pos(0, 0), pos(1, 0)));
        assert!(!card.check_win(&board, A1, pos(1, 0), pos(0, 0)));
    }
}
