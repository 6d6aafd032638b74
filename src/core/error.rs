//! Error types.
//!
//! The engine itself has exactly one failure mode, `InvalidMove`: every
//! ability and rule interaction is total over valid states. The other
//! errors belong to the loading surfaces (registry JSON, deck validation,
//! configuration) that sit in front of the engine.

use thiserror::Error;

use crate::cards::CardId;

/// A rejected `place_card` call. The input snapshot is never modified.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("position {position} is off the board")]
    OutOfRange { position: usize },

    #[error("position {position} is already occupied")]
    CellOccupied { position: usize },

    #[error("hand index {index} is invalid for a hand of {hand_len} cards")]
    InvalidHandIndex { index: usize, hand_len: usize },

    #[error("the match is already over")]
    MatchOver,
}

/// Failure while loading card data.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("malformed card data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{0} is registered twice")]
    DuplicateId(CardId),

    #[error("{card} has stat {value} outside 1..=10")]
    StatOutOfRange { card: CardId, value: u8 },
}

/// A deck that cannot start a match.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("deck has {actual} cards, expected {expected}")]
    WrongSize { expected: usize, actual: usize },

    #[error("deck costs {total}, limit is {limit}")]
    OverCostLimit { total: u32, limit: u32 },

    #[error("{0} appears more than once")]
    DuplicateCard(CardId),

    #[error("not enough affordable cards to build a deck of {0}")]
    NotEnoughCards(usize),
}

/// Invalid match configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("elemental tile chance {0} is outside 0.0..=1.0")]
    TileChance(f64),

    #[error("deck size must be between 1 and 9, got {0}")]
    DeckSize(usize),
}
