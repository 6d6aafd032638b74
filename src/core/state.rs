//! Match state snapshots.
//!
//! A `GameState` is an immutable value: every turn produces a new snapshot
//! and earlier ones are never touched. Hands and status flags use `im`
//! persistent structures and cards are shared through `Arc`, so a snapshot
//! clone is cheap and structurally shared with its predecessor.
//!
//! The snapshot also carries its RNG state, which makes replaying a match
//! from its initial snapshot fully deterministic.

use std::sync::Arc;

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::config::{Rule, RuleSet};
use super::elemental::ElementalGrid;
use super::owner::{Owner, OwnerMap};
use super::rng::GameRng;
use crate::cards::Card;
use crate::rules::{Flip, MatchContext};

/// Cards a player still holds, in play order.
pub type Hand = Vector<Arc<Card>>;

/// One-shot defensive state attached to a board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardStatus {
    /// Armor Plating has already absorbed its one capture.
    pub armor_spent: bool,
}

/// Sparse per-cell status, keyed by board position.
///
/// An entry is dropped when the card in that cell is captured or removed.
pub type StatusFlags = OrdMap<usize, CardStatus>;

/// Per-owner tallies kept for the whole match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchCounters {
    /// Cards each owner has had captured away (feeds Grudge).
    pub lost: OwnerMap<u32>,
    /// Cards each owner has played from hand.
    pub placed: OwnerMap<u32>,
}

/// Final outcome of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    Winner(Owner),
    Draw,
}

impl MatchResult {
    /// Check if an owner won.
    #[must_use]
    pub fn is_winner(&self, owner: Owner) -> bool {
        matches!(self, MatchResult::Winner(o) if *o == owner)
    }
}

/// What happened on the most recent turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastMove {
    pub owner: Owner,
    pub position: usize,
    pub card_index: usize,
    /// Every ownership change, in the order it happened.
    pub flips: Vec<Flip>,
    /// Cells emptied by Explode or Self-Destruct.
    pub removed: Vec<usize>,
    /// Cell that received an Infestation token.
    pub spawned: Option<usize>,
    /// Cell whose card was replaced by a cursed copy.
    pub cursed: Option<usize>,
}

/// Complete snapshot of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub board: Board,
    pub hand_a: Hand,
    pub hand_b: Hand,
    pub current_player: Owner,
    pub game_over: bool,
    pub winner: Option<MatchResult>,
    pub rule_set: RuleSet,
    pub elemental_grid: Option<ElementalGrid>,
    pub counters: MatchCounters,
    pub status_flags: StatusFlags,
    pub last_move: Option<LastMove>,
    pub rng: GameRng,
}

impl GameState {
    /// Opening snapshot: empty board, full hands, player A to move.
    #[must_use]
    pub fn new(
        hand_a: Hand,
        hand_b: Hand,
        rule_set: RuleSet,
        elemental_grid: Option<ElementalGrid>,
        rng: GameRng,
    ) -> Self {
        Self {
            board: Board::new(),
            hand_a,
            hand_b,
            current_player: Owner::A,
            game_over: false,
            winner: None,
            rule_set,
            elemental_grid,
            counters: MatchCounters::default(),
            status_flags: StatusFlags::new(),
            last_move: None,
            rng,
        }
    }

    /// A player's hand.
    #[must_use]
    pub fn hand(&self, owner: Owner) -> &Hand {
        match owner {
            Owner::A => &self.hand_a,
            Owner::B => &self.hand_b,
        }
    }

    pub(crate) fn hand_mut(&mut self, owner: Owner) -> &mut Hand {
        match owner {
            Owner::A => &mut self.hand_a,
            Owner::B => &mut self.hand_b,
        }
    }

    /// The hand of the player to move.
    #[must_use]
    pub fn current_hand(&self) -> &Hand {
        self.hand(self.current_player)
    }

    /// Read-only view of everything capture resolution depends on.
    #[must_use]
    pub fn context(&self) -> MatchContext<'_> {
        MatchContext {
            rules: self.rule_set,
            elemental_grid: self
                .elemental_grid
                .as_ref()
                .filter(|_| self.rule_set.contains(Rule::Elemental)),
            counters: &self.counters,
            status_flags: &self.status_flags,
        }
    }

    /// Encode the snapshot for fixtures and replays.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Decode a snapshot produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}
