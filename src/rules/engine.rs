//! The game engine: phase/turn state machine over a `Board` and two cards.
//!
//! Every public action checks the state machine precondition first, then
//! asks the acting player's card, then lets the board do the mechanical
//! work, then advances the phase.
//!
//! ## Error Policy
//!
//! - Wrong phase, wrong player, wrong worker, no worker selected: `Err`.
//! - A target that breaks the rules (or lies off the board): `Ok(false)`,
//!   with the game unchanged so the caller can re-prompt.
//!
//! ## Turn Start
//!
//! When a turn begins and the mover has no legal move and no legal build
//! for either worker, the turn passes to the opponent. If the opponent is
//! stuck as well the game ends in a tie.

use im::Vector;
use tracing::{debug, instrument, trace, warn};

use super::view::GameView;
use crate::board::Board;
use crate::cards::{CardRegistry, NoCard, PowerCard, TurnControl};
use crate::core::{
    Action, ActionRecord, EngineError, GameConfig, Neighbors, Phase, Player, PlayerAction,
    PlayerId, PlayerMap, Position, Result, UnknownCardPolicy, WorkerId,
};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Neither player can act.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, if any.
    #[must_use]
    pub const fn winner(&self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// One game in progress.
///
/// ## Example
///
/// ```
/// use rust_santorini::rules::GameEngine;
/// use rust_santorini::core::{Phase, PlayerId, WorkerId};
///
/// let mut game = GameEngine::new();
/// game.select_card(PlayerId::A, None).unwrap();
/// game.select_card(PlayerId::B, Some("Pan")).unwrap();
/// assert_eq!(game.phase(), Phase::PlaceWorker);
///
/// assert!(game.place_worker_by_id("A1", 0, 0).unwrap());
/// assert!(game.place_worker_by_id("A2", 4, 4).unwrap());
/// assert!(game.place_worker_by_id("B1", 0, 4).unwrap());
/// assert!(game.place_worker_by_id("B2", 4, 0).unwrap());
/// assert_eq!(game.phase(), Phase::Move);
///
/// game.select_worker(WorkerId::new(PlayerId::A, 1), PlayerId::A).unwrap();
/// assert!(game.move_worker(1, 1).unwrap());
/// assert!(game.build(1, 2).unwrap());
/// assert_eq!(game.current_player(), PlayerId::B);
/// ```
#[derive(Debug)]
pub struct GameEngine {
    config: GameConfig,
    registry: CardRegistry,
    players: PlayerMap<Player>,
    board: Board,
    cards: PlayerMap<Box<dyn PowerCard>>,
    card_chosen: PlayerMap<bool>,
    phase: Phase,
    action: Option<PlayerAction>,
    current_player: PlayerId,
    current_worker: Option<WorkerId>,
    result: Option<GameResult>,
    turn: u32,
    sequence: u32,
    history: Vector<ActionRecord>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// A fresh game with the default configuration and the built-in cards.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// A fresh game with an explicit configuration.
    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self::with_registry(config, CardRegistry::standard())
    }

    /// A fresh game drawing cards from a custom registry.
    #[must_use]
    pub fn with_registry(config: GameConfig, registry: CardRegistry) -> Self {
        Self {
            config,
            registry,
            players: PlayerMap::new(Player::new),
            board: Board::new(),
            cards: PlayerMap::new(|_| Box::new(NoCard) as Box<dyn PowerCard>),
            card_chosen: PlayerMap::with_value(false),
            phase: Phase::Initialize,
            action: None,
            current_player: PlayerId::A,
            current_worker: None,
            result: None,
            turn: 0,
            sequence: 0,
            history: Vector::new(),
        }
    }

    // === Inspection ===

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Card registry used by `select_card`.
    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Action expected within the current turn.
    #[must_use]
    pub fn action(&self) -> Option<PlayerAction> {
        self.action
    }

    /// Player to act.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Worker selected for this turn.
    #[must_use]
    pub fn current_worker(&self) -> Option<WorkerId> {
        self.current_worker
    }

    /// Final result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// The winner, if the game ended in a win.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.result.and_then(|r| r.winner())
    }

    /// True once the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for building test positions and puzzles.
    ///
    /// This bypasses every rule and the action history. Games played
    /// through the engine never need it.
    #[doc(hidden)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// A player and their workers.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Name of the card a player holds (`"None"` for no card).
    #[must_use]
    pub fn card_name(&self, player: PlayerId) -> &'static str {
        self.cards[player].name()
    }

    /// Turn number: 0 during setup, 1 for the first move turn, then one more
    /// per turn switch.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn
    }

    /// Accepted actions, oldest first. Empty if history is disabled.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Serializable snapshot for a client.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView::from_engine(self)
    }

    // === Legal targets ===

    /// Legal moves for the selected worker, or empty outside a turn.
    #[must_use]
    pub fn legal_moves(&self) -> Neighbors {
        match self.current_worker {
            Some(worker) if self.phase.is_turn() => self.legal_moves_for(worker),
            _ => Neighbors::new(),
        }
    }

    /// Legal builds for the selected worker, or empty outside a turn.
    #[must_use]
    pub fn legal_builds(&self) -> Neighbors {
        match self.current_worker {
            Some(worker) if self.phase.is_turn() => self.legal_builds_for(worker),
            _ => Neighbors::new(),
        }
    }

    /// Legal moves for any placed worker, adjusted by its owner's card.
    #[must_use]
    pub fn legal_moves_for(&self, worker: WorkerId) -> Neighbors {
        let Some(from) = self.board.position_of(worker) else {
            return Neighbors::new();
        };
        let base = from
            .neighbors()
            .into_iter()
            .filter(|&to| self.board.is_move_legal(from, to))
            .collect();
        self.cards[worker.owner()].modify_legal_moves(&self.board, worker, from, base)
    }

    /// Legal builds for any placed worker, adjusted by its owner's card.
    #[must_use]
    pub fn legal_builds_for(&self, worker: WorkerId) -> Neighbors {
        let Some(from) = self.board.position_of(worker) else {
            return Neighbors::new();
        };
        let base = from
            .neighbors()
            .into_iter()
            .filter(|&to| self.board.is_build_legal(from, to))
            .collect();
        self.cards[worker.owner()].modify_legal_builds(&self.board, worker, from, base)
    }

    /// True if one of the player's workers can still move or build.
    #[must_use]
    pub fn can_act(&self, player: PlayerId) -> bool {
        self.players[player].workers().iter().any(|&w| {
            !self.legal_moves_for(w).is_empty() || !self.legal_builds_for(w).is_empty()
        })
    }

    // === Actions ===

    /// Assign a card to a player. `None`, `""` and `"None"` mean no card.
    ///
    /// Once both players have chosen, placement begins.
    ///
    /// # Errors
    ///
    /// `IllegalPhase` outside Initialize; `UnknownCard` for an unregistered
    /// name when the config rejects unknown cards.
    #[instrument(skip(self))]
    pub fn select_card(&mut self, player: PlayerId, name: Option<&str>) -> Result<()> {
        self.require("select_card", &[Phase::Initialize])?;

        let card: Box<dyn PowerCard> = match self.registry.create(name) {
            Ok(card) => card,
            Err(err) if self.config.unknown_card == UnknownCardPolicy::NoCard => {
                warn!(%player, %err, "unknown card, playing without one");
                Box::new(NoCard)
            }
            Err(err) => return Err(err),
        };
        debug!(%player, card = card.name(), "card selected");

        self.cards[player] = card;
        self.card_chosen[player] = true;
        self.record(player, Action::SelectCard(name.map(str::to_string)));

        if self.card_chosen.all(|&chosen| chosen) {
            self.begin_placement();
        }
        Ok(())
    }

    /// Place the next worker at `(x, y)`.
    ///
    /// Workers go down in the order A1, A2, B1, B2. A successful placement
    /// while cards are still being chosen gives every undecided player no
    /// card. Returns false if the cell is off the board or occupied.
    ///
    /// # Errors
    ///
    /// `IllegalPhase` once play has started; `WrongWorker` if `worker` is
    /// not the next one to place.
    #[instrument(skip(self))]
    pub fn place_worker(&mut self, worker: WorkerId, x: i32, y: i32) -> Result<bool> {
        self.require("place_worker", &[Phase::Initialize, Phase::PlaceWorker])?;

        if self.next_to_place() != Some(worker) {
            return Err(EngineError::WrongWorker {
                worker,
                player: worker.owner(),
            });
        }
        let Some(pos) = Position::new(x, y) else {
            debug!("placement off the board");
            return Ok(false);
        };
        if self.board.is_occupied(pos) {
            debug!(%pos, "placement on an occupied cell");
            return Ok(false);
        }

        // Card selection only closes once the placement is certain to land.
        if self.phase == Phase::Initialize {
            self.begin_placement();
        }
        let placed = self.board.place_worker(worker, pos);
        debug_assert!(placed, "checked free cell and unplaced worker");
        self.record(worker.owner(), Action::Place(worker, pos));

        match self.next_to_place() {
            Some(next) => self.current_player = next.owner(),
            None => self.begin_play(),
        }
        Ok(true)
    }

    /// `place_worker` with the worker named as a string, e.g. `"B2"`.
    ///
    /// # Errors
    ///
    /// `UnknownWorker` if the name does not parse, otherwise as
    /// `place_worker`.
    pub fn place_worker_by_id(&mut self, worker: &str, x: i32, y: i32) -> Result<bool> {
        self.place_worker(worker.parse()?, x, y)
    }

    /// Choose the worker to move this turn.
    ///
    /// The choice can be changed until the worker has moved.
    ///
    /// # Errors
    ///
    /// `IllegalPhase` outside Move, `NotYourTurn` for the waiting player,
    /// `WrongWorker` for an opponent's worker.
    #[instrument(skip(self))]
    pub fn select_worker(&mut self, worker: WorkerId, player: PlayerId) -> Result<()> {
        self.require("select_worker", &[Phase::Move])?;
        if player != self.current_player {
            return Err(EngineError::NotYourTurn {
                player,
                current: self.current_player,
            });
        }
        if !self.players[player].owns(worker) {
            return Err(EngineError::WrongWorker { worker, player });
        }
        if self.board.position_of(worker).is_none() {
            return Err(EngineError::WorkerNotPlaced(worker));
        }

        self.current_worker = Some(worker);
        self.record(player, Action::SelectWorker(worker));
        Ok(())
    }

    /// `select_worker` with string identifiers, e.g. `("A2", "A")`.
    ///
    /// # Errors
    ///
    /// `UnknownWorker`/`UnknownPlayer` if a name does not parse, otherwise
    /// as `select_worker`.
    pub fn select_worker_by_id(&mut self, worker: &str, player: &str) -> Result<()> {
        self.select_worker(worker.parse()?, player.parse()?)
    }

    /// Move the selected worker to `(x, y)`.
    ///
    /// On a win the game ends at once; otherwise the turn moves on to the
    /// build. Returns false, leaving the game unchanged, if the move is not
    /// allowed.
    ///
    /// # Errors
    ///
    /// `IllegalPhase` outside Move, `NoWorkerSelected` before
    /// `select_worker`.
    #[instrument(skip(self))]
    pub fn move_worker(&mut self, x: i32, y: i32) -> Result<bool> {
        self.require("move", &[Phase::Move])?;
        let worker = self.current_worker.ok_or(EngineError::NoWorkerSelected)?;
        let from = self
            .board
            .position_of(worker)
            .ok_or(EngineError::WorkerNotPlaced(worker))?;
        let Some(to) = Position::new(x, y) else {
            debug!("move off the board");
            return Ok(false);
        };

        let player = self.current_player;
        let card = &mut self.cards[player];
        if !card.validate_move(&self.board, worker, from, to) {
            debug!(%worker, %from, %to, "move rejected");
            return Ok(false);
        }

        let snapshot = self.board.is_occupied(to).then(|| self.board.clone());
        if snapshot.is_some() && !card.pre_move(&mut self.board, worker, from, to) {
            debug!(%worker, %to, "move aborted by card");
            if let Some(saved) = snapshot {
                self.board = saved;
            }
            return Ok(false);
        }
        if let Err(err) = self.board.move_worker(worker, to) {
            if let Some(saved) = snapshot {
                self.board = saved;
            }
            if err.is_rule_violation() {
                debug!(%err, "move did not land");
                return Ok(false);
            }
            return Err(err);
        }
        card.post_move(&mut self.board, worker, from, to);

        let won = card.check_win(&self.board, worker, from, to)
            || self.board.climbed_to_third_alone(from, to);
        self.record(player, Action::Move(to));
        debug!(%worker, %from, %to, "moved");

        if won {
            self.finish(GameResult::Winner(player));
        } else if self.legal_builds_for(worker).is_empty() {
            debug!(%worker, "no legal build after moving, turn passes");
            self.switch_turn();
        } else {
            self.phase = Phase::Build;
            self.action = Some(PlayerAction::Build);
        }
        Ok(true)
    }

    /// Build with the selected worker at `(x, y)`.
    ///
    /// The acting player's card decides whether a second build follows or
    /// the turn ends. Returns false, leaving the game unchanged, if the
    /// build is not allowed.
    ///
    /// # Errors
    ///
    /// `IllegalPhase` outside Build and SecondBuild.
    #[instrument(skip(self))]
    pub fn build(&mut self, x: i32, y: i32) -> Result<bool> {
        self.require("build", &[Phase::Build, Phase::SecondBuild])?;
        let worker = self.current_worker.ok_or(EngineError::NoWorkerSelected)?;
        let from = self
            .board
            .position_of(worker)
            .ok_or(EngineError::WorkerNotPlaced(worker))?;
        let Some(at) = Position::new(x, y) else {
            debug!("build off the board");
            return Ok(false);
        };

        let player = self.current_player;
        let card = &mut self.cards[player];
        if !card.validate_build(&self.board, worker, from, at) {
            debug!(%worker, %at, "build rejected");
            return Ok(false);
        }
        let kind = match self.board.build(worker, at) {
            Ok(kind) => kind,
            Err(err) if err.is_rule_violation() => {
                debug!(%err, "build did not happen");
                return Ok(false);
            }
            Err(err) => return Err(err),
        };
        let control = card.post_build(&self.board, worker, at);
        self.record(player, Action::Build(at));
        debug!(%worker, %at, ?kind, ?control, "built");

        match control {
            TurnControl::SecondBuild => self.phase = Phase::SecondBuild,
            TurnControl::EndTurn => self.switch_turn(),
        }
        Ok(true)
    }

    /// Decline the optional second build and end the turn.
    ///
    /// Returns false if the card refuses the skip.
    ///
    /// # Errors
    ///
    /// `IllegalPhase` outside SecondBuild.
    #[instrument(skip(self))]
    pub fn skip_second_build(&mut self) -> Result<bool> {
        self.require("skip_second_build", &[Phase::SecondBuild])?;
        let player = self.current_player;
        match self.cards[player].skip_action() {
            TurnControl::EndTurn => {
                self.record(player, Action::Skip);
                self.switch_turn();
                Ok(true)
            }
            TurnControl::SecondBuild => Ok(false),
        }
    }

    // === State machine ===

    fn require(&self, action: &'static str, allowed: &[Phase]) -> Result<()> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(EngineError::IllegalPhase {
                action,
                phase: self.phase,
            })
        }
    }

    fn next_to_place(&self) -> Option<WorkerId> {
        WorkerId::placement_order().find(|&w| self.board.position_of(w).is_none())
    }

    fn begin_placement(&mut self) {
        for (player, chosen) in self.card_chosen.iter_mut() {
            if !*chosen {
                debug!(%player, "no card chosen");
                *chosen = true;
            }
        }
        self.phase = Phase::PlaceWorker;
        self.current_player = PlayerId::A;
        debug!("placement begins");
    }

    fn begin_play(&mut self) {
        self.phase = Phase::Move;
        self.action = Some(PlayerAction::Move);
        self.current_player = PlayerId::A;
        self.current_worker = None;
        self.turn = 1;
        self.sequence = 0;
        self.cards[PlayerId::A].activate();
        debug!("play begins");
        self.check_stuck();
    }

    fn switch_turn(&mut self) {
        self.hand_over();
        self.check_stuck();
    }

    fn hand_over(&mut self) {
        self.cards[self.current_player].deactivate();
        self.current_player = self.current_player.opponent();
        self.current_worker = None;
        self.phase = Phase::Move;
        self.action = Some(PlayerAction::Move);
        self.turn += 1;
        self.sequence = 0;
        self.cards[self.current_player].activate();
        debug!(player = %self.current_player, turn = self.turn, "turn begins");
    }

    fn check_stuck(&mut self) {
        if self.can_act(self.current_player) {
            return;
        }
        if self.can_act(self.current_player.opponent()) {
            debug!(player = %self.current_player, "no legal action, turn passes");
            self.hand_over();
        } else {
            self.finish(GameResult::Draw);
        }
    }

    fn finish(&mut self, result: GameResult) {
        self.cards[self.current_player].deactivate();
        self.phase = Phase::GameOver;
        self.action = None;
        self.result = Some(result);
        debug!(?result, "game over");
    }

    fn record(&mut self, player: PlayerId, action: Action) {
        trace!(%player, action = action.verb(), target = ?action.target(), turn = self.turn, "accepted");
        if !self.config.record_history {
            return;
        }
        self.sequence += 1;
        self.history
            .push_back(ActionRecord::new(player, action, self.turn, self.sequence));
    }
}
