//! Power cards: the hook protocol, the built-in cards, and the registry.
//!
//! ## Key Types
//!
//! - `PowerCard`: the hook set the engine calls at each decision point
//! - `NoCard`: base rules, held by players without a card
//! - `TurnControl`: a card's answer to "does the turn end here?"
//! - `CardRegistry`: name → constructor lookup
//!
//! ## Built-in Cards
//!
//! | Card | Effect |
//! |---|---|
//! | `Apollo` | swap places with an adjacent opponent |
//! | `Demeter` | optional second build on a different cell |
//! | `Hephaestus` | optional second block on the same cell |
//! | `Minotaur` | push an adjacent opponent one cell back |
//! | `Pan` | also win by dropping two or more levels |

pub mod apollo;
pub mod card;
pub mod demeter;
pub mod hephaestus;
pub mod minotaur;
pub mod pan;
pub mod registry;

pub use apollo::Apollo;
pub use card::{NoCard, PowerCard, TurnControl, NO_CARD_NAME};
pub use demeter::Demeter;
pub use hephaestus::Hephaestus;
pub use minotaur::Minotaur;
pub use pan::Pan;
pub use registry::{CardFactory, CardRegistry};
