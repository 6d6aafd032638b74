//! Core match types: owners, board, state, RNG, configuration, errors.
//!
//! Nothing in here knows about capture rules or abilities; those live in
//! `rules` and `triggers` and operate on these types.

pub mod owner;
pub mod board;
pub mod elemental;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use owner::{Owner, OwnerMap};
pub use board::{Board, Direction, Slot, BOARD_SIZE, CENTER};
pub use elemental::ElementalGrid;
pub use rng::{GameRng, GameRngState, RandomSource};
pub use config::{MatchConfig, Rule, RuleSet};
pub use error::{ConfigError, DeckError, InvalidMove, RegistryError};
pub use state::{CardStatus, GameState, Hand, LastMove, MatchCounters, MatchResult, StatusFlags};
