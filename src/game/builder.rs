//! Match setup.

use std::sync::Arc;

use crate::cards::{validate_deck, Card};
use crate::core::config::{MatchConfig, RuleSet};
use crate::core::elemental::ElementalGrid;
use crate::core::error::DeckError;
use crate::core::rng::GameRng;
use crate::core::state::{GameState, Hand};

/// Builder for the opening snapshot of a match.
///
/// ```
/// use rust_triad::cards::{Card, CardId, Stats};
/// use rust_triad::core::{Owner, RuleSet};
/// use rust_triad::game::MatchBuilder;
///
/// let deck = |base: u32| {
///     (0..5).map(move |i| Card::new(CardId::new(base + i), "Card", Stats::uniform(3)))
/// };
/// let state = MatchBuilder::new()
///     .rules(RuleSet::all())
///     .seed(7)
///     .build(deck(1), deck(10));
///
/// assert_eq!(state.current_player, Owner::A);
/// assert!(state.elemental_grid.is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MatchBuilder {
    rules: RuleSet,
    elemental_grid: Option<ElementalGrid>,
    config: MatchConfig,
}

impl MatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Use a fixed grid instead of generating one.
    /// Ignored unless the Elemental rule is enabled.
    pub fn elemental_grid(mut self, grid: ElementalGrid) -> Self {
        self.elemental_grid = Some(grid);
        self
    }

    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Build the opening snapshot. Decks become hands in the given order.
    pub fn build<A, B>(self, deck_a: A, deck_b: B) -> GameState
    where
        A: IntoIterator,
        A::Item: Into<Arc<Card>>,
        B: IntoIterator,
        B::Item: Into<Arc<Card>>,
    {
        let hand_a: Hand = deck_a.into_iter().map(Into::into).collect();
        let hand_b: Hand = deck_b.into_iter().map(Into::into).collect();

        let rng = GameRng::new(self.config.seed);
        let grid = if self.rules.elemental {
            Some(self.elemental_grid.unwrap_or_else(|| {
                let mut grid_rng = rng.for_context("elemental");
                ElementalGrid::generate(&mut grid_rng, self.config.elemental_tile_chance)
            }))
        } else {
            None
        };

        log::debug!(
            "new match: {} vs {} cards, rules {:?}, seed {}",
            hand_a.len(),
            hand_b.len(),
            self.rules,
            self.config.seed
        );
        GameState::new(hand_a, hand_b, self.rules, grid, rng)
    }

    /// Like `build`, but both decks must pass `validate_deck` first.
    pub fn build_validated(
        self,
        deck_a: Vec<Arc<Card>>,
        deck_b: Vec<Arc<Card>>,
    ) -> Result<GameState, DeckError> {
        validate_deck(&deck_a, &self.config)?;
        validate_deck(&deck_b, &self.config)?;
        Ok(self.build(deck_a, deck_b))
    }
}

/// Opening snapshot with default configuration.
///
/// The elemental grid is only kept when the Elemental rule is on; if none
/// is supplied one is generated from the match seed.
pub fn create_match<A, B>(
    deck_a: A,
    deck_b: B,
    rules: RuleSet,
    elemental_grid: Option<ElementalGrid>,
) -> GameState
where
    A: IntoIterator,
    A::Item: Into<Arc<Card>>,
    B: IntoIterator,
    B::Item: Into<Arc<Card>>,
{
    let mut builder = MatchBuilder::new().rules(rules);
    if let Some(grid) = elemental_grid {
        builder = builder.elemental_grid(grid);
    }
    builder.build(deck_a, deck_b)
}
