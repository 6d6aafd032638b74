//! Card definitions - immutable card values.
//!
//! A `Card` holds everything the engine needs to know about a card: its
//! four directional stats, element and optional ability. Cards never
//! change once created; effects that "modify" a card (Curse) or conjure
//! one (Infestation) produce a new value instead.

use serde::{Deserialize, Serialize};

use super::ability::AbilityKind;
use crate::core::board::Direction;

/// Lowest legal stat value.
pub const MIN_STAT: u8 = 1;

/// Highest legal stat value (shown as "A" on cards).
pub const MAX_STAT: u8 = 10;

/// Id given to every Infestation token.
pub const TOKEN_CARD_ID: CardId = CardId::new(0);

/// Unique identifier for a card definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Elemental affinity of a card or a board tile.
///
/// "No element" is expressed as `Option::None` at the use site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Ice,
    Thunder,
    Earth,
    Poison,
    Wind,
    Water,
    Holy,
}

impl Element {
    pub const ALL: [Element; 8] = [
        Element::Fire,
        Element::Ice,
        Element::Thunder,
        Element::Earth,
        Element::Poison,
        Element::Wind,
        Element::Water,
        Element::Holy,
    ];

    /// Parse a lowercase element tag. `"none"` and unknown tags yield `None`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|element| element.tag() == tag)
    }

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Ice => "ice",
            Element::Thunder => "thunder",
            Element::Earth => "earth",
            Element::Poison => "poison",
            Element::Wind => "wind",
            Element::Water => "water",
            Element::Holy => "holy",
        }
    }
}

/// The four directional stats, in top/right/bottom/left order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats(pub [u8; 4]);

impl Stats {
    #[must_use]
    pub const fn new(top: u8, right: u8, bottom: u8, left: u8) -> Self {
        Self([top, right, bottom, left])
    }

    /// Same value on every side.
    #[must_use]
    pub const fn uniform(value: u8) -> Self {
        Self([value; 4])
    }

    /// The stat facing `dir`.
    #[must_use]
    pub const fn get(&self, dir: Direction) -> u8 {
        self.0[dir.index()]
    }

    /// Every side reduced by one, never below `MIN_STAT`.
    #[must_use]
    pub fn weakened(&self) -> Self {
        Self(self.0.map(|v| v.saturating_sub(1).max(MIN_STAT)))
    }

    /// True when every side is within `MIN_STAT..=MAX_STAT`.
    #[must_use]
    pub fn in_range(&self) -> bool {
        self.0.iter().all(|v| (MIN_STAT..=MAX_STAT).contains(v))
    }
}

/// An immutable card value.
///
/// ## Example
///
/// ```
/// use rust_triad::cards::{AbilityKind, Card, CardId, Element, Stats};
///
/// let bomb = Card::new(CardId::new(32), "Bomb", Stats::new(2, 7, 6, 3))
///     .with_level(4)
///     .with_element(Element::Fire)
///     .with_ability(AbilityKind::Explode);
///
/// assert_eq!(bomb.cost, 4);
/// assert_eq!(bomb.ability, Some(AbilityKind::Explode));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub level: u8,
    pub cost: u32,
    pub stats: Stats,
    pub element: Option<Element>,
    pub ability: Option<AbilityKind>,
}

impl Card {
    /// Create a level-1 card with no element or ability.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, stats: Stats) -> Self {
        Self {
            id,
            name: name.into(),
            level: 1,
            cost: 1,
            stats,
            element: None,
            ability: None,
        }
    }

    /// The 1/1/1/1 token conjured by Infestation.
    #[must_use]
    pub fn token() -> Self {
        Self {
            id: TOKEN_CARD_ID,
            name: "Token".to_string(),
            level: 0,
            cost: 0,
            stats: Stats::uniform(MIN_STAT),
            element: None,
            ability: None,
        }
    }

    /// Set the level; cost follows level unless overridden afterwards.
    #[must_use]
    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self.cost = u32::from(level);
        self
    }

    #[must_use]
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    #[must_use]
    pub fn with_ability(mut self, ability: AbilityKind) -> Self {
        self.ability = Some(ability);
        self
    }

    /// Check for a specific ability.
    #[must_use]
    pub fn has(&self, ability: AbilityKind) -> bool {
        self.ability == Some(ability)
    }

    /// Derived copy left behind by Curse: every stat one lower (floor 1).
    #[must_use]
    pub fn cursed(&self) -> Self {
        Self {
            stats: self.stats.weakened(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_stats_by_direction() {
        let stats = Stats::new(1, 2, 3, 4);
        assert_eq!(stats.get(Direction::Top), 1);
        assert_eq!(stats.get(Direction::Right), 2);
        assert_eq!(stats.get(Direction::Bottom), 3);
        assert_eq!(stats.get(Direction::Left), 4);
    }

    #[test]
    fn test_weakened_floors_at_one() {
        assert_eq!(Stats::new(1, 5, 10, 2).weakened(), Stats::new(1, 4, 9, 1));
    }

    #[test]
    fn test_cursed_is_a_new_value() {
        let card = Card::new(CardId::new(3), "Bite Bug", Stats::new(1, 3, 3, 5));
        let cursed = card.cursed();

        assert_eq!(card.stats, Stats::new(1, 3, 3, 5));
        assert_eq!(cursed.stats, Stats::new(1, 2, 2, 4));
        assert_eq!(cursed.id, card.id);
    }

    #[test]
    fn test_token() {
        let token = Card::token();
        assert_eq!(token.id, TOKEN_CARD_ID);
        assert_eq!(token.stats, Stats::uniform(1));
        assert!(token.element.is_none());
        assert!(token.ability.is_none());
    }

    #[test]
    fn test_builder_cost_follows_level() {
        let card = Card::new(CardId::new(1), "X", Stats::uniform(5)).with_level(6);
        assert_eq!(card.cost, 6);

        let card = card.with_cost(2);
        assert_eq!(card.level, 6);
        assert_eq!(card.cost, 2);
    }

    #[test]
    fn test_element_tags() {
        assert_eq!(Element::from_tag("thunder"), Some(Element::Thunder));
        assert_eq!(Element::from_tag("none"), None);
        for element in Element::ALL {
            assert_eq!(Element::from_tag(element.tag()), Some(element));
        }
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(CardId::new(1), "Test", Stats::new(1, 4, 1, 5))
            .with_element(Element::Ice)
            .with_ability(AbilityKind::Hover);

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
