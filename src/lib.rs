//! # rust-triad
//!
//! Rules engine for a two-player card-capture game on a 3x3 board.
//!
//! Each card has four directional stats. Placing a card next to an enemy
//! card whose facing stat is lower captures it. Optional rules (Same,
//! Plus, Combo, Elemental) and 28 card abilities layer on top.
//!
//! ## Design Principles
//!
//! 1. **Immutable snapshots**: `place_card` takes a `GameState` and
//!    returns a new one. Snapshots clone in O(1) through `im` structures
//!    and `Arc`-shared cards, so search and replay never copy the world.
//!
//! 2. **Pure resolution**: stat and capture resolution never mutate. The
//!    same code scores speculative moves for the AI and resolves real turns.
//!
//! 3. **Deterministic randomness**: trigger targets and elemental grids
//!    draw from a seeded `GameRng` carried in the snapshot, or from an
//!    injected `RandomSource`.
//!
//! ## Modules
//!
//! - `core`: owners, board, state, RNG, configuration, errors
//! - `cards`: card definitions, abilities, registry, catalog, decks
//! - `rules`: stat pipeline, capture resolution, combo propagation
//! - `triggers`: on-play and on-flip ability handlers
//! - `game`: match setup and turn resolution
//! - `ai`: move selection
//!
//! ## Example
//!
//! ```
//! use rust_triad::ai::select_move;
//! use rust_triad::cards::{standard_cards, CardId};
//! use rust_triad::core::RuleSet;
//! use rust_triad::game::{create_match, place_card};
//!
//! let cards = standard_cards();
//! let deck = |ids: [u32; 5]| ids.map(|id| cards.get(CardId::new(id)).cloned().unwrap());
//!
//! let (deck_a, deck_b) = (deck([1, 2, 3, 4, 5]), deck([6, 7, 8, 9, 10]));
//! let mut state = create_match(deck_a, deck_b, RuleSet::all(), None);
//! while let Some(mv) = select_move(&state) {
//!     state = place_card(&state, mv.position, mv.card_index).unwrap();
//! }
//! assert!(state.game_over);
//! ```

pub mod core;
pub mod cards;
pub mod rules;
pub mod triggers;
pub mod game;
pub mod ai;

// Re-export commonly used types
pub use crate::core::{
    Board, Direction, ElementalGrid, GameRng, GameRngState, GameState, InvalidMove, MatchConfig,
    MatchResult, Owner, OwnerMap, RandomSource, Rule, RuleSet,
};

pub use crate::cards::{AbilityKind, Card, CardId, CardRegistry, Element, Stats};

pub use crate::rules::{resolve_captures, Flip, FlipCause, MatchContext};

pub use crate::game::{create_match, place_card, place_card_with, MatchBuilder};

pub use crate::ai::{select_move, GreedySelector, Move, MoveSelector};
