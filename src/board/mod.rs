//! Board model: towers, squares and the 5×5 grid.
//!
//! ## Key Types
//!
//! - `Tower`: level 0–3 plus a one-time dome
//! - `Square`: a tower and the worker standing on it
//! - `Board`: the grid, the worker location index, and the base rules for
//!   moving and building

pub mod grid;
pub mod square;
pub mod tower;

pub use grid::Board;
pub use square::Square;
pub use tower::{BuildKind, Tower, MAX_LEVEL};
