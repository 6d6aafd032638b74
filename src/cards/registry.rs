//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores every card a match may draw from. It is
//! loaded once and only read afterwards; matches copy the cards they need
//! into their hands.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::ability::AbilityKind;
use super::definition::{Card, CardId, Element, Stats};
use crate::core::error::RegistryError;

/// On-disk shape of a card.
///
/// Element and ability are free-form tags so unknown values degrade to
/// "none" instead of failing the whole load.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: u32,
    pub name: String,
    pub level: u8,
    #[serde(default)]
    pub cost: Option<u32>,
    pub stats: [u8; 4],
    #[serde(default)]
    pub element: Option<String>,
    #[serde(default)]
    pub ability: Option<String>,
}

impl CardRecord {
    fn into_card(self) -> Card {
        let ability = self.ability.as_deref().and_then(|id| {
            let kind = AbilityKind::from_id(id);
            if kind.is_none() {
                log::warn!(
                    "card {} ({}) has unknown ability {:?}; loading without it",
                    self.id,
                    self.name,
                    id
                );
            }
            kind
        });

        let mut card =
            Card::new(CardId::new(self.id), self.name, Stats(self.stats)).with_level(self.level);
        if let Some(cost) = self.cost {
            card = card.with_cost(cost);
        }
        card.element = self.element.as_deref().and_then(Element::from_tag);
        card.ability = ability;
        card
    }
}

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use rust_triad::cards::{Card, CardId, CardRegistry, Stats};
///
/// let mut registry = CardRegistry::new();
/// registry.register(Card::new(CardId::new(1), "Geezard", Stats::new(1, 4, 1, 5))).unwrap();
///
/// let found = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Geezard");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Arc<Card>>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a registry from a JSON array of card records.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let records: Vec<CardRecord> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for record in records {
            registry.register(record.into_card())?;
        }
        log::debug!("loaded {} cards", registry.len());
        Ok(registry)
    }

    /// Register a card definition.
    ///
    /// Fails on a duplicate id or a stat outside 1..=10.
    pub fn register(&mut self, card: Card) -> Result<(), RegistryError> {
        if self.cards.contains_key(&card.id) {
            return Err(RegistryError::DuplicateId(card.id));
        }
        if let Some(&value) = card.stats.0.iter().find(|&&v| !(1..=10).contains(&v)) {
            return Err(RegistryError::StatOutOfRange { card: card.id, value });
        }
        self.cards.insert(card.id, Arc::new(card));
        Ok(())
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Arc<Card>> {
        self.cards.get(&id)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All cards ordered by id.
    #[must_use]
    pub fn sorted(&self) -> Vec<Arc<Card>> {
        let mut cards: Vec<_> = self.cards.values().cloned().collect();
        cards.sort_by_key(|card| card.id);
        cards
    }

    /// Find cards of a given level.
    pub fn find_by_level(&self, level: u8) -> impl Iterator<Item = &Arc<Card>> {
        self.cards.values().filter(move |c| c.level == level)
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &Arc<Card>>
    where
        F: Fn(&Card) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}
