//! Card system: definitions, abilities, registry, and decks.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `Card`: Immutable card data (stats, element, ability)
//! - `AbilityKind`: Closed set of ability identifiers
//! - `CardRegistry`: Card definition lookup
//!
//! Cards are shared as `Arc<Card>` between registry, hands and board.
//! Nothing mutates a card after creation; Curse installs a new one.

pub mod ability;
pub mod catalog;
pub mod deck;
pub mod definition;
pub mod registry;

pub use ability::{AbilityCategory, AbilityInfo, AbilityKind, TriggerTiming};
pub use catalog::{standard_cards, STANDARD_CARDS};
pub use deck::{random_deck, validate_deck};
pub use definition::{Card, CardId, Element, Stats, MAX_STAT, MIN_STAT, TOKEN_CARD_ID};
pub use registry::{CardRecord, CardRegistry};
