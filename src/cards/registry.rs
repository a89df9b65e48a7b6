//! Card registry for lookup by name.
//!
//! The `CardRegistry` maps card names to constructors. Lookup is
//! case-insensitive, and the "no card" names (`None`, empty, `"None"`)
//! resolve to [`NoCard`].

use rustc_hash::FxHashMap;

use super::apollo::Apollo;
use super::card::{NoCard, PowerCard, NO_CARD_NAME};
use super::demeter::Demeter;
use super::hephaestus::Hephaestus;
use super::minotaur::Minotaur;
use super::pan::Pan;
use crate::core::{EngineError, Result};

/// Builds a fresh card instance.
pub type CardFactory = fn() -> Box<dyn PowerCard>;

#[derive(Clone, Copy, Debug)]
struct Entry {
    name: &'static str,
    factory: CardFactory,
}

/// Registry of the cards a game can hand out.
///
/// ## Example
///
/// ```
/// use rust_santorini::cards::CardRegistry;
///
/// let registry = CardRegistry::standard();
///
/// let card = registry.create(Some("minotaur")).unwrap();
/// assert_eq!(card.name(), "Minotaur");
///
/// let none = registry.create(None).unwrap();
/// assert_eq!(none.name(), "None");
///
/// assert!(registry.create(Some("Zeus")).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<String, Entry>,
}

impl CardRegistry {
    /// Create a new empty registry.
    ///
    /// An empty registry still resolves the no-card names.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the five built-in cards.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register("Apollo", || Box::new(Apollo::new()));
        registry.register("Demeter", || Box::new(Demeter::new()));
        registry.register("Hephaestus", || Box::new(Hephaestus::new()));
        registry.register("Minotaur", || Box::new(Minotaur::new()));
        registry.register("Pan", || Box::new(Pan::new()));
        registry
    }

    /// Register a card constructor under a name.
    ///
    /// Returns the constructor previously registered under the same name
    /// (compared case-insensitively), if any.
    pub fn register(&mut self, name: &'static str, factory: CardFactory) -> Option<CardFactory> {
        self.cards
            .insert(name.to_ascii_lowercase(), Entry { name, factory })
            .map(|old| old.factory)
    }

    /// True if `name` selects no card.
    #[must_use]
    pub fn is_no_card(name: Option<&str>) -> bool {
        match name {
            None => true,
            Some(name) => {
                let name = name.trim();
                name.is_empty() || name.eq_ignore_ascii_case(NO_CARD_NAME)
            }
        }
    }

    /// True if `name` is a registered card.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cards.contains_key(&name.trim().to_ascii_lowercase())
    }

    /// Build a fresh instance of the named card.
    ///
    /// # Errors
    ///
    /// `UnknownCard` if the name is neither registered nor a no-card name.
    pub fn create(&self, name: Option<&str>) -> Result<Box<dyn PowerCard>> {
        let Some(raw) = name.filter(|n| !Self::is_no_card(Some(*n))) else {
            return Ok(Box::new(NoCard));
        };
        self.cards
            .get(&raw.trim().to_ascii_lowercase())
            .map(|entry| (entry.factory)())
            .ok_or_else(|| EngineError::UnknownCard(raw.to_string()))
    }

    /// Registered card names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.cards.values().map(|e| e.name).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_names() {
        let registry = CardRegistry::standard();
        assert_eq!(registry.len(), 5);
        assert_eq!(
            registry.names(),
            vec!["Apollo", "Demeter", "Hephaestus", "Minotaur", "Pan"]
        );
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let registry = CardRegistry::standard();
        assert_eq!(registry.create(Some("APOLLO")).unwrap().name(), "Apollo");
        assert_eq!(registry.create(Some(" pan ")).unwrap().name(), "Pan");
        assert!(registry.contains("hephaestus"));
    }

    #[test]
    fn test_no_card_names() {
        let registry = CardRegistry::new();
        assert!(registry.is_empty());
        for name in [None, Some(""), Some("None"), Some("none")] {
            assert_eq!(registry.create(name).unwrap().name(), NO_CARD_NAME);
        }
    }

    #[test]
    fn test_unknown_card() {
        let registry = CardRegistry::standard();
        assert_eq!(
            registry.create(Some("Atlas")).unwrap_err(),
            EngineError::UnknownCard("Atlas".to_string())
        );
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = CardRegistry::new();
        assert!(registry.register("Pan", || Box::new(Pan::new())).is_none());
        assert!(registry.register("PAN", || Box::new(Pan::new())).is_some());
        assert_eq!(registry.len(), 1);
    }
}
