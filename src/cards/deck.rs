//! Deck validation and generation.

use std::borrow::Borrow;
use std::sync::Arc;

use rustc_hash::FxHashSet;

use super::definition::Card;
use super::registry::CardRegistry;
use crate::core::config::MatchConfig;
use crate::core::error::DeckError;
use crate::core::rng::GameRng;

/// Check a deck against the match configuration.
///
/// A deck must hold exactly `deck_size` distinct cards whose total cost
/// stays within `deck_cost_limit`.
pub fn validate_deck<C: Borrow<Card>>(cards: &[C], config: &MatchConfig) -> Result<(), DeckError> {
    if cards.len() != config.deck_size {
        return Err(DeckError::WrongSize {
            expected: config.deck_size,
            actual: cards.len(),
        });
    }

    let mut seen = FxHashSet::default();
    for card in cards {
        let card = card.borrow();
        if !seen.insert(card.id) {
            return Err(DeckError::DuplicateCard(card.id));
        }
    }

    let total: u32 = cards.iter().map(|c| c.borrow().cost).sum();
    if total > config.deck_cost_limit {
        return Err(DeckError::OverCostLimit {
            total,
            limit: config.deck_cost_limit,
        });
    }

    Ok(())
}

/// Draw a legal deck from `registry`.
///
/// Cards are visited in a shuffled order and taken greedily while enough
/// budget remains to fill the other slots with the cheapest card. The
/// same RNG state always yields the same deck.
pub fn random_deck(
    registry: &CardRegistry,
    config: &MatchConfig,
    rng: &mut GameRng,
) -> Result<Vec<Arc<Card>>, DeckError> {
    let mut pool = registry.sorted();
    let Some(cheapest) = pool.iter().map(|c| c.cost).min() else {
        return Err(DeckError::NotEnoughCards(config.deck_size));
    };
    rng.shuffle(&mut pool);

    let mut deck = Vec::with_capacity(config.deck_size);
    let mut total = 0u32;
    for card in pool {
        if deck.len() == config.deck_size {
            break;
        }
        let slots_after = (config.deck_size - deck.len() - 1) as u32;
        if total + card.cost + slots_after * cheapest <= config.deck_cost_limit {
            total += card.cost;
            deck.push(card);
        }
    }

    if deck.len() < config.deck_size {
        return Err(DeckError::NotEnoughCards(config.deck_size));
    }
    log::debug!("drew a {}-card deck costing {total}", deck.len());
    Ok(deck)
}
