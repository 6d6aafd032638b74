//! On-play handlers.

use std::sync::Arc;

use smallvec::SmallVec;

use super::TriggerScope;
use crate::cards::Card;
use crate::core::board::{neighbors, Slot};
use crate::core::owner::Owner;

/// Weaken one random adjacent enemy card for the rest of the match.
pub(super) fn curse(scope: &mut TriggerScope<'_>, position: usize, owner: Owner) {
    let enemies: SmallVec<[usize; 4]> = neighbors(position)
        .map(|(_, p)| p)
        .filter(|&p| scope.board.owner_at(p) == Some(owner.opponent()))
        .collect();
    let Some(target) = scope.choose(&enemies) else {
        return;
    };
    let Some(slot) = scope.board.get(target) else {
        return;
    };
    let cursed = Arc::new(slot.card.cursed());
    log::debug!("curse weakens {} at {target}", cursed.name);
    scope.board.replace_card(target, cursed);
    scope.report.cursed = Some(target);
}

/// Spawn a 1/1/1/1 token for the placer in one random adjacent empty cell.
pub(super) fn infestation(scope: &mut TriggerScope<'_>, position: usize, owner: Owner) {
    let empty: SmallVec<[usize; 4]> = neighbors(position)
        .map(|(_, p)| p)
        .filter(|&p| scope.board.is_empty(p))
        .collect();
    let Some(target) = scope.choose(&empty) else {
        return;
    };
    log::debug!("infestation spawns a token at {target}");
    scope.board.set(target, Slot::new(Arc::new(Card::token()), owner));
    scope.report.spawned = Some(target);
}
