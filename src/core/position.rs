//! Board coordinates.
//!
//! A `Position` is always on the 5×5 board. Raw coordinates coming from a
//! caller go through `Position::new`, which returns `None` when they fall
//! outside the grid, so board code never has to re-check bounds.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Width and height of the board.
pub const BOARD_SIZE: u8 = 5;

/// Neighbor offsets in enumeration order: row-major over dy, then dx.
const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Up to eight neighboring cells, stored inline.
pub type Neighbors = SmallVec<[Position; 8]>;

/// An in-bounds grid coordinate.
///
/// `x` is the column and `y` the row, both in `0..5`.
///
/// ```
/// use rust_santorini::core::Position;
///
/// let a = Position::new(2, 2).unwrap();
/// let b = Position::new(3, 3).unwrap();
/// assert!(a.is_adjacent(b));
/// assert!(!a.is_adjacent(a));
/// assert!(Position::new(5, 0).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    x: u8,
    y: u8,
}

/// Unchecked coordinates, validated on deserialization.
#[derive(Deserialize)]
struct RawPosition {
    x: i32,
    y: i32,
}

impl TryFrom<RawPosition> for Position {
    type Error = String;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.x, raw.y).ok_or_else(|| format!("({}, {}) is off the board", raw.x, raw.y))
    }
}

impl Position {
    /// Create a position, or `None` if the coordinates are off the board.
    #[must_use]
    pub fn new(x: i32, y: i32) -> Option<Self> {
        let size = i32::from(BOARD_SIZE);
        if (0..size).contains(&x) && (0..size).contains(&y) {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Column.
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Row.
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Row-major index into a flat 25-cell array.
    #[must_use]
    pub const fn index(self) -> usize {
        self.y as usize * BOARD_SIZE as usize + self.x as usize
    }

    /// Shift by a delta, or `None` if the result leaves the board.
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Self::new(i32::from(self.x) + dx, i32::from(self.y) + dy)
    }

    /// True for the 8-neighborhood, excluding the cell itself.
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        let dx = (i32::from(self.x) - i32::from(other.x)).abs();
        let dy = (i32::from(self.y) - i32::from(other.y)).abs();
        dx <= 1 && dy <= 1 && self != other
    }

    /// The cell one step past `self` when coming from `from`.
    ///
    /// For a worker at `from` stepping onto `self`, this is where a piece
    /// standing on `self` would be pushed. `None` if it is off the board.
    #[must_use]
    pub fn beyond(self, from: Position) -> Option<Self> {
        let dx = i32::from(self.x) - i32::from(from.x);
        let dy = i32::from(self.y) - i32::from(from.y);
        self.offset(dx, dy)
    }

    /// In-bounds neighbors, in row-major order over dy then dx.
    #[must_use]
    pub fn neighbors(self) -> Neighbors {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| self.offset(i32::from(dx), i32::from(dy)))
            .collect()
    }

    /// Every cell on the board in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Position { x, y }))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}
