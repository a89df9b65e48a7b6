//! Read model for clients.
//!
//! `GameView` is a plain serializable snapshot of everything a client needs
//! to draw the game and hint legal targets. It holds no references into the
//! engine.

use serde::{Deserialize, Serialize};

use super::engine::{GameEngine, GameResult};
use crate::core::{Phase, PlayerAction, PlayerId, Position, BOARD_SIZE};

/// One cell as a client sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareView {
    /// Column.
    pub x: u8,
    /// Row.
    pub y: u8,
    /// Tower level, 0–3.
    pub level: u8,
    /// Capped with a dome.
    pub dome: bool,
    /// Worker standing here, e.g. `"B1"`.
    pub occupant: Option<String>,
}

/// A worker and where it stands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerView {
    /// Worker name, e.g. `"A2"`.
    pub id: String,
    /// Position, or `None` before placement.
    pub position: Option<Position>,
}

/// A player's card and workers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    /// `"A"` or `"B"`.
    pub id: String,
    /// Card name, `"None"` for no card.
    pub card: String,
    /// Both workers in placement order.
    pub workers: Vec<WorkerView>,
}

/// Snapshot of a game.
///
/// `legal_moves` is filled only in the Move phase and `legal_builds` only
/// in a build phase, in both cases once a worker is selected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Current phase.
    pub phase: Phase,
    /// Action expected within the turn.
    pub action: Option<PlayerAction>,
    /// Player to act.
    pub current_player: PlayerId,
    /// Selected worker name.
    pub current_worker: Option<String>,
    /// Winner, once decided.
    pub winner: Option<PlayerId>,
    /// Final result, once the game is over.
    pub result: Option<GameResult>,
    /// Turn number.
    pub turn: u32,
    /// Both players in turn order.
    pub players: Vec<PlayerView>,
    /// Rows of cells, `grid[y][x]`.
    pub grid: Vec<Vec<SquareView>>,
    /// Legal move targets of the selected worker.
    pub legal_moves: Vec<Position>,
    /// Legal build targets of the selected worker.
    pub legal_builds: Vec<Position>,
}

impl GameView {
    /// Capture the engine's current state.
    #[must_use]
    pub fn from_engine(engine: &GameEngine) -> Self {
        let board = engine.board();

        let grid = (0..BOARD_SIZE)
            .map(|y| {
                (0..BOARD_SIZE)
                    .filter_map(|x| Position::new(i32::from(x), i32::from(y)))
                    .map(|pos| {
                        let square = board.square(pos);
                        SquareView {
                            x: pos.x(),
                            y: pos.y(),
                            level: square.level(),
                            dome: square.is_domed(),
                            occupant: square.occupant.map(|w| w.to_string()),
                        }
                    })
                    .collect()
            })
            .collect();

        let players = PlayerId::all()
            .map(|id| PlayerView {
                id: id.to_string(),
                card: engine.card_name(id).to_string(),
                workers: engine
                    .player(id)
                    .workers()
                    .iter()
                    .map(|&w| WorkerView {
                        id: w.to_string(),
                        position: board.position_of(w),
                    })
                    .collect(),
            })
            .collect();

        let phase = engine.phase();
        let legal_moves = if phase == Phase::Move {
            engine.legal_moves().to_vec()
        } else {
            Vec::new()
        };
        let legal_builds = if phase.is_build() {
            engine.legal_builds().to_vec()
        } else {
            Vec::new()
        };

        Self {
            phase: engine.phase(),
            action: engine.action(),
            current_player: engine.current_player(),
            current_worker: engine.current_worker().map(|w| w.to_string()),
            winner: engine.winner(),
            result: engine.result(),
            turn: engine.turn_number(),
            players,
            grid,
            legal_moves,
            legal_builds,
        }
    }

    /// The cell at `(x, y)`, if on the board.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<&SquareView> {
        self.grid.get(y).and_then(|row| row.get(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WorkerId;

    #[test]
    fn test_view_of_new_game() {
        let view = GameEngine::new().view();
        assert_eq!(view.phase, Phase::Initialize);
        assert_eq!(view.grid.len(), 5);
        assert!(view.grid.iter().all(|row| row.len() == 5));
        assert_eq!(view.players[1].id, "B");
        assert_eq!(view.players[1].workers[0].id, "B1");
        assert!(view.legal_moves.is_empty());
    }

    #[test]
    fn test_view_tracks_board() {
        let mut game = GameEngine::new();
        game.select_card(PlayerId::A, Some("Hephaestus")).unwrap();
        game.select_card(PlayerId::B, None).unwrap();
        game.place_worker(WorkerId::new(PlayerId::A, 1), 1, 1).unwrap();

        let view = game.view();
        let cell = view.cell(1, 1).unwrap();
        assert_eq!((cell.x, cell.y), (1, 1));
        assert_eq!(cell.occupant.as_deref(), Some("A1"));
        assert_eq!(view.players[0].card, "Hephaestus");
        assert_eq!(view.players[0].workers[0].position, Position::new(1, 1));
        assert!(view.cell(5, 0).is_none());
    }

    #[test]
    fn test_view_hints_follow_phase() {
        let mut game = GameEngine::new();
        game.select_card(PlayerId::A, None).unwrap();
        game.select_card(PlayerId::B, None).unwrap();
        for (worker, (x, y)) in WorkerId::placement_order().zip([(2, 2), (0, 0), (4, 4), (4, 0)]) {
            game.place_worker(worker, x, y).unwrap();
        }
        game.select_worker(WorkerId::new(PlayerId::A, 1), PlayerId::A).unwrap();

        let view = game.view();
        assert_eq!(view.legal_moves.len(), 8);
        assert!(view.legal_builds.is_empty());

        game.move_worker(2, 1).unwrap();
        let view = game.view();
        assert!(view.legal_moves.is_empty());
        assert_eq!(view.legal_builds.len(), 8);
    }
}
