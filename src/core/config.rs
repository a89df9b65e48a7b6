//! Game configuration.
//!
//! The board size, player count and turn structure are fixed by the rules.
//! What a host can tune is how lenient card selection is and whether the
//! engine keeps an action log.

use serde::{Deserialize, Serialize};

/// What `select_card` does with a name the registry does not know.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnknownCardPolicy {
    /// Treat the name as "no card".
    #[default]
    NoCard,
    /// Fail with `EngineError::UnknownCard`.
    Reject,
}

/// Engine configuration.
///
/// ```
/// use rust_santorini::core::{GameConfig, UnknownCardPolicy};
///
/// let config = GameConfig::new().strict_cards().without_history();
/// assert_eq!(config.unknown_card, UnknownCardPolicy::Reject);
/// assert!(!config.record_history);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Handling of unrecognised card names.
    pub unknown_card: UnknownCardPolicy,

    /// Keep an `ActionRecord` for every accepted action.
    pub record_history: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            unknown_card: UnknownCardPolicy::NoCard,
            record_history: true,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject unknown card names instead of ignoring them.
    #[must_use]
    pub fn strict_cards(mut self) -> Self {
        self.unknown_card = UnknownCardPolicy::Reject;
        self
    }

    /// Do not keep an action log.
    #[must_use]
    pub fn without_history(mut self) -> Self {
        self.record_history = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.unknown_card, UnknownCardPolicy::NoCard);
        assert!(config.record_history);
    }

    #[test]
    fn test_partial_deserialization() {
        let config: GameConfig = serde_json::from_str(r#"{"unknown_card":"Reject"}"#).unwrap();
        assert_eq!(config.unknown_card, UnknownCardPolicy::Reject);
        assert!(config.record_history);
    }
}
