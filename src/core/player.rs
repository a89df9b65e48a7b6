//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! The game always has exactly two players, `A` (index 0, moves first) and
//! `B` (index 1).
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::error::EngineError;
use super::worker::WorkerId;

/// Number of players in a game.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Player A, who places and moves first.
    pub const A: PlayerId = PlayerId(0);
    /// Player B.
    pub const B: PlayerId = PlayerId(1);

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        PlayerId(1 - self.0)
    }

    /// Single-letter label used in identifiers ("A" or "B").
    #[must_use]
    pub const fn label(self) -> char {
        match self.0 {
            0 => 'A',
            _ => 'B',
        }
    }

    /// Both players in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [PlayerId::A, PlayerId::B].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PlayerId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(PlayerId::A),
            "B" | "b" => Ok(PlayerId::B),
            other => Err(EngineError::UnknownPlayer(other.to_string())),
        }
    }
}

/// Per-player data storage.
///
/// ```
/// use rust_santorini::core::{PlayerId, PlayerMap};
///
/// let mut score: PlayerMap<u32> = PlayerMap::with_value(0);
/// score[PlayerId::B] += 1;
/// assert_eq!(score[PlayerId::A], 0);
/// assert_eq!(score[PlayerId::B], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::A), factory(PlayerId::B)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::all().zip(self.data.iter_mut())
    }

    /// True if every entry satisfies the predicate.
    pub fn all(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.data.iter().all(predicate)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A player and the two workers created with them.
///
/// The worker set is fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    workers: [WorkerId; 2],
}

impl Player {
    /// Create a player with workers `<label>1` and `<label>2`.
    #[must_use]
    pub const fn new(id: PlayerId) -> Self {
        Self {
            id,
            workers: [WorkerId::new(id, 1), WorkerId::new(id, 2)],
        }
    }

    /// The player's identifier.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// The player's workers in placement order.
    #[must_use]
    pub const fn workers(&self) -> &[WorkerId; 2] {
        &self.workers
    }

    /// True if the worker belongs to this player.
    #[must_use]
    pub fn owns(&self, worker: WorkerId) -> bool {
        worker.owner() == self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::A.index(), 0);
        assert_eq!(PlayerId::B.index(), 1);
        assert_eq!(PlayerId::A.opponent(), PlayerId::B);
        assert_eq!(PlayerId::B.opponent(), PlayerId::A);
        assert_eq!(format!("{}", PlayerId::B), "B");
    }

    #[test]
    fn test_player_id_parse() {
        assert_eq!("A".parse::<PlayerId>().unwrap(), PlayerId::A);
        assert_eq!(" b ".parse::<PlayerId>().unwrap(), PlayerId::B);
        assert!(matches!(
            "C".parse::<PlayerId>(),
            Err(EngineError::UnknownPlayer(s)) if s == "C"
        ));
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index() * 10);
        assert_eq!(map[PlayerId::A], 0);
        assert_eq!(map[PlayerId::B], 10);
    }

    #[test]
    fn test_player_map_mutation() {
        let mut map: PlayerMap<Option<u8>> = PlayerMap::with_value(None);
        assert!(map.all(Option::is_none));

        map[PlayerId::A] = Some(3);
        assert!(!map.all(Option::is_none));
        assert_eq!(map[PlayerId::A], Some(3));
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::new(|p| p.index() as i32);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::A, &0), (PlayerId::B, &1)]);
    }

    #[test]
    fn test_player_workers() {
        let player = Player::new(PlayerId::B);
        let [first, second] = *player.workers();
        assert_eq!(first.to_string(), "B1");
        assert_eq!(second.to_string(), "B2");
        assert!(player.owns(first));
        assert!(!player.owns(WorkerId::new(PlayerId::A, 1)));
    }
}
