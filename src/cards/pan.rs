//! Pan: win by dropping two or more levels.

use super::card::PowerCard;
use crate::board::Board;
use crate::core::{Position, WorkerId};

/// Levels a single move must descend for the drop win.
pub const DROP_TO_WIN: u8 = 2;

/// Descent-win card. Movement and building follow the base rules.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pan;

impl Pan {
    /// Create the card.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl PowerCard for Pan {
    fn name(&self) -> &'static str {
        "Pan"
    }

    fn check_win(&self, board: &Board, _worker: WorkerId, from: Position, to: Position) -> bool {
        board.level(from).saturating_sub(board.level(to)) >= DROP_TO_WIN
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
    fn test_drop_win() {
        let mut board = Board::new();
        board.set_tower(pos(0, 0), 3, false);
        board.set_tower(pos(1, 0), 1, false);
        board.set_tower(pos(0, 1), 2, false);
        let card = Pan::new();

        assert!(card.check_win(&board, A1, pos(0, 0), pos(1, 0)));
        assert!(card.check_win(&board, A1, pos(0, 1), pos(1, 1)));
        assert!(!card.check_win(&board, A1, pos(0, 0), pos(0, 1)), "one level");
        assert!(!card.check_win(&board, A1, pos(1, 1), pos(1, 0)), "climb");
    }
}
