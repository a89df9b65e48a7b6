//! Turn structure: engine-wide phase and the action expected within a turn.

use serde::{Deserialize, Serialize};

/// Engine-wide stage of the game.
///
/// `Initialize → PlaceWorker → Move → Build → (SecondBuild) → Move → …`,
/// ending in `GameOver` on a win or a tie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Players choose their power cards.
    Initialize,
    /// Workers are placed one at a time: A1, A2, B1, B2.
    PlaceWorker,
    /// The current player selects a worker and moves it.
    Move,
    /// The moved worker builds once.
    Build,
    /// A card offered an optional extra build.
    SecondBuild,
    /// Terminal.
    GameOver,
}

impl Phase {
    /// True during the move/build part of a turn.
    #[must_use]
    pub const fn is_turn(self) -> bool {
        matches!(self, Phase::Move | Phase::Build | Phase::SecondBuild)
    }

    /// True in either build phase.
    #[must_use]
    pub const fn is_build(self) -> bool {
        matches!(self, Phase::Build | Phase::SecondBuild)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Initialize => "Initialize",
            Phase::PlaceWorker => "PlaceWorker",
            Phase::Move => "Move",
            Phase::Build => "Build",
            Phase::SecondBuild => "SecondBuild",
            Phase::GameOver => "GameOver",
        };
        f.write_str(name)
    }
}

/// Which action the current turn is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Waiting for a move.
    Move,
    /// Waiting for a build.
    Build,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_predicates() {
        assert!(Phase::Move.is_turn());
        assert!(Phase::SecondBuild.is_turn());
        assert!(!Phase::PlaceWorker.is_turn());
        assert!(!Phase::GameOver.is_turn());

        assert!(Phase::Build.is_build());
        assert!(Phase::SecondBuild.is_build());
        assert!(!Phase::Move.is_build());
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::SecondBuild.to_string(), "SecondBuild");
    }
}
