//! The 5×5 board: towers plus the worker location index.
//!
//! The board knows nothing about cards or turns. It owns the mechanical
//! state and the base legality rules that cards build on.

use rustc_hash::FxHashMap;
use tracing::trace;

use super::square::Square;
use super::tower::{BuildKind, Tower, MAX_LEVEL};
use crate::core::{EngineError, Position, Result, Worker, WorkerId, BOARD_SIZE};

const CELL_COUNT: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// Board state.
///
/// The square occupants and the worker → position index always agree:
/// every occupied square names exactly one worker, and that worker's
/// indexed position is that square.
///
/// ```
/// use rust_santorini::board::Board;
/// use rust_santorini::core::{PlayerId, Position, WorkerId};
///
/// let mut board = Board::new();
/// let a1 = WorkerId::new(PlayerId::A, 1);
/// let start = Position::new(2, 2).unwrap();
///
/// assert!(board.place_worker(a1, start));
/// assert_eq!(board.occupant(start), Some(a1));
/// assert_eq!(board.position_of(a1), Some(start));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Square; CELL_COUNT],
    workers: FxHashMap<WorkerId, Position>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board: no buildings, no workers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            squares: [Square::default(); CELL_COUNT],
            workers: FxHashMap::default(),
        }
    }

    // === Inspection ===

    /// The square at a position.
    #[must_use]
    pub fn square(&self, pos: Position) -> &Square {
        &self.squares[pos.index()]
    }

    /// The tower at a position.
    #[must_use]
    pub fn tower(&self, pos: Position) -> &Tower {
        &self.squares[pos.index()].tower
    }

    /// Tower level at a position.
    #[must_use]
    pub fn level(&self, pos: Position) -> u8 {
        self.tower(pos).level()
    }

    /// True if a worker stands at the position.
    #[must_use]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.square(pos).is_occupied()
    }

    /// The worker standing at a position.
    #[must_use]
    pub fn occupant(&self, pos: Position) -> Option<WorkerId> {
        self.square(pos).occupant
    }

    /// Where a worker stands, or `None` if it is not on the board.
    #[must_use]
    pub fn position_of(&self, worker: WorkerId) -> Option<Position> {
        self.workers.get(&worker).copied()
    }

    /// A worker together with its location.
    #[must_use]
    pub fn worker(&self, id: WorkerId) -> Worker {
        Worker {
            id,
            position: self.position_of(id),
        }
    }

    /// Placed workers, in no particular order.
    pub fn placed_workers(&self) -> impl Iterator<Item = (WorkerId, Position)> + '_ {
        self.workers.iter().map(|(&w, &p)| (w, p))
    }

    /// All squares with their positions, row-major.
    pub fn squares(&self) -> impl Iterator<Item = (Position, &Square)> {
        Position::all().map(move |pos| (pos, self.square(pos)))
    }

    // === Mutation ===

    /// Put an unplaced worker on an empty cell.
    ///
    /// Returns false if the cell is occupied or the worker is already on the
    /// board.
    pub fn place_worker(&mut self, worker: WorkerId, pos: Position) -> bool {
        if self.is_occupied(pos) || self.workers.contains_key(&worker) {
            trace!(%worker, %pos, "placement rejected");
            return false;
        }
        self.bind(worker, pos);
        true
    }

    /// Move a worker to an adjacent cell under the base rule.
    ///
    /// # Errors
    ///
    /// `WorkerNotPlaced` if the worker is off the board, `InvalidMove` if the
    /// destination fails `is_move_legal`.
    pub fn move_worker(&mut self, worker: WorkerId, to: Position) -> Result<()> {
        let from = self
            .position_of(worker)
            .ok_or(EngineError::WorkerNotPlaced(worker))?;
        if !self.is_move_legal(from, to) {
            return Err(EngineError::InvalidMove { worker, to });
        }
        self.relocate(worker, from, to);
        trace!(%worker, %from, %to, "worker moved");
        Ok(())
    }

    /// Build next to a worker: a block below level 3, otherwise a dome.
    ///
    /// # Errors
    ///
    /// `WorkerNotPlaced` if the worker is off the board, `InvalidBuild` if the
    /// site fails `is_build_legal`.
    pub fn build(&mut self, worker: WorkerId, at: Position) -> Result<BuildKind> {
        let from = self
            .position_of(worker)
            .ok_or(EngineError::WorkerNotPlaced(worker))?;
        if !self.is_build_legal(from, at) {
            return Err(EngineError::InvalidBuild { worker, at });
        }
        let kind = self.squares[at.index()]
            .tower
            .build()
            .ok_or(EngineError::InvalidBuild { worker, at })?;
        trace!(%worker, %at, ?kind, level = self.level(at), "built");
        Ok(kind)
    }

    /// Relocate a worker without the adjacency or height rules.
    ///
    /// Used for forced displacement. Returns false if the worker is not on
    /// the board or the destination is occupied or domed. The destination's
    /// height does not matter.
    pub fn push_worker(&mut self, target: WorkerId, to: Position) -> bool {
        let Some(from) = self.position_of(target) else {
            return false;
        };
        if self.is_occupied(to) || self.tower(to).is_domed() {
            return false;
        }
        self.relocate(target, from, to);
        trace!(worker = %target, %from, %to, "worker pushed");
        true
    }

    /// Take a worker off the board, returning where it stood.
    ///
    /// The worker becomes unplaced until `place_worker` puts it back.
    pub fn lift_worker(&mut self, worker: WorkerId) -> Option<Position> {
        let pos = self.workers.remove(&worker)?;
        self.squares[pos.index()].occupant = None;
        Some(pos)
    }

    fn bind(&mut self, worker: WorkerId, pos: Position) {
        self.workers.insert(worker, pos);
        self.squares[pos.index()].occupant = Some(worker);
    }

    fn relocate(&mut self, worker: WorkerId, from: Position, to: Position) {
        self.squares[from.index()].occupant = None;
        self.bind(worker, to);
    }

    // === Base rules ===

    /// Base move rule: adjacent, empty, not domed, at most one level up.
    #[must_use]
    pub fn is_move_legal(&self, from: Position, to: Position) -> bool {
        let target = self.square(to);
        from.is_adjacent(to)
            && !target.is_occupied()
            && !target.is_domed()
            && target.level() <= self.level(from) + 1
    }

    /// Base build rule: adjacent, empty, not domed.
    ///
    /// Any open tower accepts either a block (below level 3) or a dome (at
    /// level 3).
    #[must_use]
    pub fn is_build_legal(&self, from: Position, to: Position) -> bool {
        let target = self.square(to);
        from.is_adjacent(to)
            && !target.is_occupied()
            && (target.tower.can_add_level() || target.tower.can_place_dome())
    }

    /// True for a self-propelled climb from level 2 onto level 3.
    #[must_use]
    pub fn climbed_to_third_alone(&self, from: Position, to: Position) -> bool {
        self.level(from) == MAX_LEVEL - 1 && self.level(to) == MAX_LEVEL
    }

    /// Check that the occupancy grid and the worker index agree.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let indexed = self
            .workers
            .iter()
            .all(|(&w, &p)| self.occupant(p) == Some(w));
        let occupied = self.squares.iter().filter(|s| s.is_occupied()).count();
        indexed && occupied == self.workers.len()
    }

    /// Set a tower directly. For scenario setup in tests and tools.
    pub fn set_tower(&mut self, pos: Position, level: u8, domed: bool) {
        let mut tower = Tower::new();
        for _ in 0..level.min(MAX_LEVEL) {
            tower.add_level();
        }
        if domed {
            tower.place_dome();
        }
        self.squares[pos.index()].tower = tower;
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

    #[test]
    fn test_place_worker() {
        let mut board = Board::new();
        assert!(board.place_worker(A1, pos(0, 0)));
        assert!(!board.place_worker(B1, pos(0, 0)));
        assert!(!board.place_worker(A1, pos(1, 1)));
        assert!(board.is_consistent());
    }

    #[test]
    fn test_move_clears_old_cell() {
        let mut board = Board::new();
        board.place_worker(A1, pos(2, 2));
        board.move_worker(A1, pos(3, 2)).unwrap();

        assert!(!board.is_occupied(pos(2, 2)));
        assert_eq!(board.occupant(pos(3, 2)), Some(A1));
        assert!(board.is_consistent());
    }

    #[test]
    fn test_move_rules() {
        let mut board = Board::new();
        board.place_worker(A1, pos(2, 2));
        board.place_worker(B1, pos(1, 1));
        board.set_tower(pos(3, 3), 2, false);
        board.set_tower(pos(2, 3), 3, true);

        assert!(!board.is_move_legal(pos(2, 2), pos(1, 1)), "occupied");
        assert!(!board.is_move_legal(pos(2, 2), pos(3, 3)), "two levels up");
        assert!(!board.is_move_legal(pos(2, 2), pos(2, 3)), "domed");
        assert!(!board.is_move_legal(pos(2, 2), pos(4, 2)), "not adjacent");
        assert!(board.is_move_legal(pos(2, 2), pos(3, 2)));

        let err = board.move_worker(A1, pos(3, 3)).unwrap_err();
        assert_eq!(err, EngineError::InvalidMove { worker: A1, to: pos(3, 3) });
        assert_eq!(board.position_of(A1), Some(pos(2, 2)));
    }

    #[test]
    fn test_move_down_any_height() {
        let mut board = Board::new();
        board.set_tower(pos(2, 2), 3, false);
        board.place_worker(A1, pos(2, 2));
        assert!(board.is_move_legal(pos(2, 2), pos(2, 1)));
    }

    #[test]
    fn test_build_block_then_dome() {
        let mut board = Board::new();
        board.place_worker(A1, pos(2, 2));
        for expected in 1..=3 {
            assert_eq!(board.build(A1, pos(3, 1)).unwrap(), BuildKind::Block);
            assert_eq!(board.level(pos(3, 1)), expected);
        }
        assert_eq!(board.build(A1, pos(3, 1)).unwrap(), BuildKind::Dome);
        assert!(board.tower(pos(3, 1)).is_domed());

        let err = board.build(A1, pos(3, 1)).unwrap_err();
        assert!(err.is_rule_violation());
    }

    #[test]
    fn test_build_rules() {
        let mut board = Board::new();
        board.place_worker(A1, pos(2, 2));
        board.place_worker(B1, pos(2, 1));

        assert!(!board.is_build_legal(pos(2, 2), pos(2, 1)), "occupied");
        assert!(!board.is_build_legal(pos(2, 2), pos(2, 2)), "own cell");
        assert!(!board.is_build_legal(pos(2, 2), pos(0, 0)), "not adjacent");
        assert!(board.is_build_legal(pos(2, 2), pos(1, 1)));
    }

    #[test]
    fn test_unplaced_worker_errors() {
        let mut board = Board::new();
        assert_eq!(
            board.move_worker(A1, pos(0, 0)),
            Err(EngineError::WorkerNotPlaced(A1))
        );
        assert_eq!(
            board.build(A1, pos(0, 0)),
            Err(EngineError::WorkerNotPlaced(A1))
        );
    }

    #[test]
    fn test_push_ignores_height() {
        let mut board = Board::new();
        board.place_worker(B1, pos(1, 2));
        board.set_tower(pos(1, 3), 3, false);

        assert!(board.push_worker(B1, pos(1, 3)));
        assert_eq!(board.position_of(B1), Some(pos(1, 3)));
        assert!(board.is_consistent());
    }

    #[test]
    fn test_push_rejects_occupied_or_domed() {
        let mut board = Board::new();
        board.place_worker(B1, pos(1, 2));
        board.place_worker(A1, pos(1, 3));
        board.set_tower(pos(2, 3), 3, true);

        assert!(!board.push_worker(B1, pos(1, 3)));
        assert!(!board.push_worker(B1, pos(2, 3)));
        assert_eq!(board.position_of(B1), Some(pos(1, 2)));
    }

    #[test]
    fn test_lift_worker() {
        let mut board = Board::new();
        board.place_worker(B1, pos(4, 4));
        assert_eq!(board.lift_worker(B1), Some(pos(4, 4)));
        assert!(!board.is_occupied(pos(4, 4)));
        assert_eq!(board.position_of(B1), None);
        assert_eq!(board.lift_worker(B1), None);
        assert!(board.is_consistent());
    }

    #[test]
    fn test_climbed_to_third_alone() {
        let mut board = Board::new();
        board.set_tower(pos(0, 0), 2, false);
        board.set_tower(pos(1, 0), 3, false);
        board.set_tower(pos(0, 1), 1, false);

        assert!(board.climbed_to_third_alone(pos(0, 0), pos(1, 0)));
        assert!(!board.climbed_to_third_alone(pos(0, 1), pos(0, 0)));
        assert!(!board.climbed_to_third_alone(pos(1, 0), pos(1, 0)));
    }
}
