//! The power-card hook set.
//!
//! A card bends specific rule decisions for the player holding it. The
//! engine never asks which card a player holds; it calls the same hooks at
//! the same decision points for every player, and players without a card
//! get [`NoCard`], whose hooks are the base rules.
//!
//! ## Decision Points
//!
//! | Hook | When |
//! |---|---|
//! | `activate` / `deactivate` | start and end of the holder's turn |
//! | `validate_move` / `validate_build` | before a move or build executes |
//! | `modify_legal_moves` / `modify_legal_builds` | hint and stalemate enumeration |
//! | `pre_move` | before the board moves a worker into an occupied cell |
//! | `post_move` | after the move lands |
//! | `check_win` | after every move, before the base win rule |
//! | `post_build` | after every build; decides whether the turn ends |
//! | `skip_action` | when the holder declines an optional second build |
//!
//! Hooks see the board, never the engine. Turn flow is returned as a
//! [`TurnControl`] value and the engine applies it.

use std::fmt::Debug;

use crate::board::{Board, MAX_LEVEL};
use crate::core::{Neighbors, Position, WorkerId};

/// What the engine should do after a build or a skip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnControl {
    /// The holder's turn is over.
    EndTurn,
    /// The holder may (or still may) build once more.
    SecondBuild,
}

/// Rule overrides attached to one player for the whole game.
///
/// Every method has a default that applies the base rule, so a card only
/// overrides what it changes. Per-turn state lives in the card and must be
/// reset in [`activate`](PowerCard::activate) and cleared in
/// [`deactivate`](PowerCard::deactivate).
pub trait PowerCard: Debug + Send {
    /// Display name, as accepted by the registry.
    fn name(&self) -> &'static str;

    /// Start of the holder's turn.
    fn activate(&mut self) {}

    /// End of the holder's turn.
    fn deactivate(&mut self) {}

    /// Whether `worker` may move from `from` to `to`.
    fn validate_move(&self, board: &Board, _worker: WorkerId, from: Position, to: Position) -> bool {
        board.is_move_legal(from, to)
    }

    /// Whether the worker standing on `from` may build at `at`.
    fn validate_build(&self, board: &Board, _worker: WorkerId, from: Position, at: Position) -> bool {
        board.is_build_legal(from, at)
    }

    /// Adjust the base legal-move set for a worker on `from`.
    fn modify_legal_moves(
        &self,
        _board: &Board,
        _worker: WorkerId,
        _from: Position,
        moves: Neighbors,
    ) -> Neighbors {
        moves
    }

    /// Adjust the base legal-build set for a worker on `from`.
    fn modify_legal_builds(
        &self,
        _board: &Board,
        _worker: WorkerId,
        _from: Position,
        builds: Neighbors,
    ) -> Neighbors {
        builds
    }

    /// Runs before a validated move into an occupied cell.
    ///
    /// Returning false aborts the move. The engine restores the board if the
    /// move does not land, so a hook may mutate the board freely before
    /// failing. The card's own fields are not restored.
    fn pre_move(&mut self, _board: &mut Board, _worker: WorkerId, _from: Position, _to: Position) -> bool {
        true
    }

    /// Runs after the mover has landed on `to`.
    fn post_move(&mut self, _board: &mut Board, _worker: WorkerId, _from: Position, _to: Position) {}

    /// Extra win condition checked after every move of the holder.
    fn check_win(&self, _board: &Board, _worker: WorkerId, _from: Position, _to: Position) -> bool {
        false
    }

    /// Runs after every build; the default ends the turn.
    fn post_build(&mut self, _board: &Board, _worker: WorkerId, _at: Position) -> TurnControl {
        TurnControl::EndTurn
    }

    /// The holder declined an optional extra build.
    ///
    /// Returning `SecondBuild` refuses the skip.
    fn skip_action(&mut self) -> TurnControl {
        TurnControl::EndTurn
    }
}

/// The base rules with no modification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoCard;

/// Name reported for players without a card.
pub const NO_CARD_NAME: &str = "None";

impl PowerCard for NoCard {
    fn name(&self) -> &'static str {
        NO_CARD_NAME
    }
}

/// True if `worker` on `from` could step into the opponent-held cell `to`
/// under the ordinary climb limit.
///
/// Shared by the cards that move into occupied cells.
pub(crate) fn can_enter_opponent_cell(
    board: &Board,
    worker: WorkerId,
    from: Position,
    to: Position,
) -> bool {
    let Some(occupant) = board.occupant(to) else {
        return false;
    };
    occupant.owner() != worker.owner()
        && from.is_adjacent(to)
        && !board.tower(to).is_domed()
        && board.level(to) <= board.level(from) + 1
}

/// Cells around `from` held by the opponent and enterable under the climb
/// limit, in neighbor order.
pub(crate) fn opponent_cells(board: &Board, worker: WorkerId, from: Position) -> Neighbors {
    from.neighbors()
        .into_iter()
        .filter(|&to| can_enter_opponent_cell(board, worker, from, to))
        .collect()
}

/// True if the climb from `from` to `to` ends on top of a tower.
pub(crate) fn reached_top(board: &Board, from: Position, to: Position) -> bool {
    board.level(to) == MAX_LEVEL && board.level(from) < MAX_LEVEL
}
